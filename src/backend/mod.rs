//! Remote prediction backends.

mod http;
pub mod traits;

pub use http::{BACKEND_URL_ENV, DEFAULT_BASE_URL, HttpBackend, resolve_base_url};
pub use traits::PredictionBackend;
