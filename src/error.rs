//! Adapter-level error types shared by providers, transports, and the userinfo decoder.

// self
use crate::{_prelude::*, userinfo::ClaimError};

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider answered, but not with a usable userinfo document.
	#[error(transparent)]
	Response(#[from] ResponseError),

	/// A required claim is absent from the userinfo document or has the wrong type.
	#[error("Unable to extract {claim} from userinfo endpoint: {source}")]
	MissingClaim {
		/// Claim name (`id`, `email`).
		claim: &'static str,
		/// Lookup failure reported by the document.
		#[source]
		source: ClaimError,
	},
}
impl Error {
	/// Returns `true` when the failure originated below the HTTP layer.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// Configuration failures raised by adapters.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Neither the profile nor the validate endpoint is configured.
	#[error("Provider `{provider}` has neither a profile URL nor a validate URL configured.")]
	MissingEndpoint {
		/// Provider display name.
		provider: String,
	},
	/// A configured endpoint cannot be parsed.
	#[error("The {endpoint} URL `{url}` is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Raw configured value.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The access token cannot be carried in an HTTP header.
	#[error("Access token contains characters that are not valid in an HTTP header.")]
	InvalidHeader,
}

/// Transport-level failures (network, deadlines, request construction).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request exceeded its deadline.
	#[error("Request timed out while calling the provider.")]
	Timeout,
	/// The transport refused to build the outgoing request.
	#[error("Outgoing provider request is invalid.")]
	InvalidRequest {
		/// Transport-specific builder error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific request construction error.
	pub fn invalid_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::InvalidRequest { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::Timeout
		} else if e.is_builder() {
			Self::invalid_request(e)
		} else {
			Self::network(e)
		}
	}
}

/// Failures caused by the provider's response rather than the transport.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Provider returned a non-success status.
	#[error("Userinfo endpoint returned unexpected status {status}: {body}.")]
	UnexpectedStatus {
		/// HTTP status code.
		status: u16,
		/// Truncated response body.
		body: String,
	},
	/// Provider responded with a body that is not valid JSON.
	#[error("Userinfo endpoint returned malformed JSON.")]
	Malformed {
		/// JSON parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
	},
}
