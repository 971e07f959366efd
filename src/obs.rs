//! Optional observability helpers for executed requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mgmt_api_client.request` with the
//!   `resource` and `operation` fields.
//! - Enable `metrics` to increment the `mgmt_api_client_request_total` counter for every
//!   attempt/success/failure, labeled by `resource` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each executed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry into request execution.
	Attempt,
	/// Successful completion with a decoded response.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
