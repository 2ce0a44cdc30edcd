//! Guide HTTP adapter - the questionnaire's rendering surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::GuideAppState;
pub use routes::guide_router;
