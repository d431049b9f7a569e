//! Remote persistence client.

mod client;
mod error;

pub use client::{HttpJobPlanApi, JobPlanApi, SubmitReceipt};
pub use error::ApiError;
