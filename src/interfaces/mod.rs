//! Interface adapters - the REST surface

pub mod http;

pub use http::{create_api_router, AppState};
