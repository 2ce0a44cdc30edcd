//! Application handlers organized by domain module.

pub mod guide;
