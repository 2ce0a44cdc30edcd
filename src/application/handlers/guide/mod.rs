//! Guide handlers - One command/query handler per questionnaire operation.

mod answer_question;
mod download_bundle;
mod fetch_module;
mod get_recommendations;
mod get_session;
mod reset_session;
mod start_session;

pub use answer_question::{
    AnswerQuestionCommand, AnswerQuestionError, AnswerQuestionHandler, AnswerQuestionResult,
};
pub use download_bundle::{
    DownloadBundleCommand, DownloadBundleError, DownloadBundleHandler, DownloadBundleResult,
};
pub use fetch_module::{FetchModuleError, FetchModuleHandler, FetchModuleQuery, FetchModuleResult};
pub use get_recommendations::{
    GetRecommendationsError, GetRecommendationsHandler, GetRecommendationsQuery,
    GetRecommendationsResult,
};
pub use get_session::{GetSessionError, GetSessionHandler, GetSessionQuery, GetSessionResult};
pub use reset_session::{
    ResetSessionCommand, ResetSessionError, ResetSessionHandler, ResetSessionResult,
};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
