//! Optional observability helpers for provider operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit structured spans named `idp_adapter.operation` with
//!   the `operation` and `provider` fields, plus error events for failed provider calls.
//! - Enable `metrics` to increment the `idp_adapter_operation_total` counter once when an
//!   operation starts and once when it ends, labeled by `operation`, `provider` and `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Gateway-facing calls an identity provider adapter serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Userinfo lookup that fills a session's identity fields.
	EnrichSession,
	/// Liveness check of a session's access token.
	ValidateSession,
}
impl OperationKind {
	/// Label used for the `operation` span field and metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::EnrichSession => "enrich_session",
			Self::ValidateSession => "validate_session",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// How a provider operation ended.
///
/// Validation never errors, so a refused token is `Rejected` rather than `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// The adapter started the operation.
	Started,
	/// The session was enriched, or the token was accepted.
	Accepted,
	/// The token was refused or could not be checked.
	Rejected,
	/// Enrichment returned an error to the gateway.
	Failed,
}
impl OperationOutcome {
	/// Maps an enrichment result to its outcome.
	pub fn of_enrichment<T>(result: &Result<T>) -> Self {
		if result.is_ok() { Self::Accepted } else { Self::Failed }
	}

	/// Maps a validation verdict to its outcome.
	pub const fn of_validation(valid: bool) -> Self {
		if valid { Self::Accepted } else { Self::Rejected }
	}

	/// Label used for the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Started => "started",
			Self::Accepted => "accepted",
			Self::Rejected => "rejected",
			Self::Failed => "failed",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Renders `url` for logs with any `access_token` query value replaced.
pub fn redact_endpoint(url: &Url) -> String {
	if !url.query_pairs().any(|(key, _)| key == "access_token") {
		return url.to_string();
	}

	let pairs = url
		.query_pairs()
		.map(|(key, value)| {
			let value = if key == "access_token" { "redacted".into() } else { value.into_owned() };

			(key.into_owned(), value)
		})
		.collect::<Vec<_>>();
	let mut redacted = url.clone();

	redacted.query_pairs_mut().clear().extend_pairs(pairs);

	redacted.to_string()
}

/// Renders a configured endpoint string for logs and errors.
///
/// Unparseable values lose their whole query, since `access_token` cannot be located reliably.
pub fn redact_configured_endpoint(raw: &str) -> String {
	let raw = raw.trim();

	if let Ok(url) = Url::parse(raw) {
		return redact_endpoint(&url);
	}

	match raw.split_once('?') {
		Some((base, _)) => format!("{base}?redacted"),
		None => raw.to_owned(),
	}
}
