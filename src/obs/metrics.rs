// self
use crate::obs::{OperationKind, OperationOutcome};

/// Counts one operation event on `idp_adapter_operation_total` when the `metrics` feature is on.
pub fn record_operation_outcome(kind: OperationKind, provider: &str, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"idp_adapter_operation_total",
			"operation" => kind.as_str(),
			"provider" => provider.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, provider, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn every_outcome_can_be_recorded_without_a_recorder() {
		for outcome in [
			OperationOutcome::Started,
			OperationOutcome::Accepted,
			OperationOutcome::Rejected,
			OperationOutcome::Failed,
		] {
			record_operation_outcome(OperationKind::ValidateSession, "ChurchTools", outcome);
		}
	}
}
