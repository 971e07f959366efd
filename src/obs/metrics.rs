// self
use crate::obs::CallOutcome;

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(resource: &'static str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"mgmt_api_client_request_total",
			"resource" => resource,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (resource, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_call_outcome_noop_without_metrics() {
		record_call_outcome("client_grants", CallOutcome::Failure);
	}
}
