pub mod executor;
pub mod headers;
pub mod response_builder;
pub mod service;
pub mod types;

pub use executor::{dispatch, execute, prepare, resolve_body, resolve_url};
pub use headers::{browser_headers, merge_headers, BROWSER_HEADERS, GET_ACCEPT};
pub use response_builder::{build_response, decode_body, is_binary_content};
pub use service::{ReqwestTransport, Transport};
pub use types::*;
