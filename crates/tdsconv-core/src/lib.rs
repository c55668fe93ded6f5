pub mod config;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod transform;

pub use error::{ConvertError, FetchError, WriteError};
