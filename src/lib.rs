pub mod classify;
pub mod composer;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod routes;
pub mod shared;

pub use classify::{classify, ClassifiedError, ErrorCategory};
pub use composer::{Composer, ComposerAction, RequestConfig};
pub use config::Config;
pub use dispatch::{dispatch, DispatchOutcome, Exchange, ReqwestTransport, Transport};
pub use error::AppError;
pub use routes::{router, AppState};
