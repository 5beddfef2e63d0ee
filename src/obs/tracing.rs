// self
use crate::{_prelude::*, obs::OperationKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by provider operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation kind + provider name.
	pub fn new(kind: OperationKind, provider: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("idp_adapter.operation", operation = kind.as_str(), provider);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, provider);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a failed provider call. `endpoint` must already be redacted.
pub fn log_request_failure(endpoint: &str, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(endpoint, error = %error, "Failed making provider request.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, error);
	}
}

/// Logs the status returned by a token validation endpoint.
pub fn log_validation_response(endpoint: &str, status: u16, body_preview: &str) {
	#[cfg(feature = "tracing")]
	{
		if (200..300).contains(&status) {
			tracing::debug!(endpoint, status, "Token validation succeeded.");
		} else {
			tracing::error!(endpoint, status, body = body_preview, "Token validation rejected.");
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, status, body_preview);
	}
}
