pub mod client;
pub mod errors;

pub use client::{HttpJobsApi, JobsApi};
pub use errors::{ApiError, GENERIC_FAILURE_MESSAGE};

#[cfg(any(test, feature = "testing"))]
pub use client::MockJobsApi;
