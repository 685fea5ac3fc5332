//! Shared HTTP building blocks

mod api_response;
mod validated_json;

pub use api_response::{status_for, ApiError, ApiResponse, ApiResult};
pub use validated_json::{non_negative, ValidatedJson, ValidatedJsonRejection};
