pub mod config;
pub mod error;
pub mod estimator;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod telemetry;
pub mod tui;

pub use error::EstimatorError;
pub use estimator::Estimator;
