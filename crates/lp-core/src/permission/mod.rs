//! Permission domain for the privileged helper service.
//!
//! The privileged helper (a Shizuku-style broker) grants this application an
//! elevated capability. The manager only ever tracks one outstanding request
//! type, so every request and every result is attributed through the single
//! [`PERMISSION_REQUEST_CODE`] sentinel.

mod codes;
mod state;

pub use codes::{RequestCode, ResultCode, PERMISSION_REQUEST_CODE};
pub use state::{PermissionState, StatusKind};
