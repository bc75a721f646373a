//! Shared Kernel
//!
//! Error vocabulary shared by every crate in the workspace:
//! - [`error::kind::ErrorKind`] classifies failures by HTTP status
//! - [`error::app_error::AppError`] carries kind, message and source
//! - conversions from common std / serde_json errors
//!
//! Keep this crate small. Only things with the same meaning in every
//! domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
