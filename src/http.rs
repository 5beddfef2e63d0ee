//! Transport primitives for provider calls.
//!
//! The module exposes [`ProviderHttpClient`] alongside the crate-owned
//! [`ProviderRequest`] and [`ProviderResponse`] types so adapters never depend on a particular
//! HTTP stack. The default implementation, [`ReqwestHttpClient`], is enabled by the `reqwest`
//! feature; tests and downstream gateways can substitute their own transport.

// self
use crate::{_prelude::*, error::TransportError};

/// Header name/value pairs attached to a provider request.
pub type HttpHeaders = BTreeMap<String, String>;

/// Boxed future returned by [`ProviderHttpClient::execute`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing provider `GET` requests.
///
/// Implementations must be `Send + Sync + 'static` so a single client can be shared (behind
/// `Arc`) by every adapter and validator in the gateway. Dropping the returned future must abort
/// the in-flight request and release its connection; that is how callers cancel a call.
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Performs the request and buffers the full response body.
	///
	/// Only transport failures are errors; every HTTP status is returned as a response.
	fn execute(&self, request: ProviderRequest) -> HttpFuture<'_, ProviderResponse>;
}

/// Outbound `GET` request description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderRequest {
	/// Target endpoint.
	pub url: Url,
	/// Headers to attach.
	pub headers: HttpHeaders,
	/// Per-request deadline.
	pub timeout: Option<Duration>,
}
impl ProviderRequest {
	/// Creates a header-less request for `url`.
	pub fn get(url: Url) -> Self {
		Self { url, headers: HttpHeaders::new(), timeout: None }
	}

	/// Replaces the request headers.
	pub fn with_headers(mut self, headers: HttpHeaders) -> Self {
		self.headers = headers;

		self
	}

	/// Sets the per-request deadline.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;

		self
	}
}

/// Buffered provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ProviderResponse {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Creates a response from its parts.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Lossy, truncated rendering of the body suitable for logs and error messages.
	pub fn body_preview(&self) -> String {
		let body = String::from_utf8_lossy(&self.body);

		if body.chars().count() <= Self::BODY_PREVIEW_LIMIT {
			return body.into_owned();
		}

		let mut buf = String::new();

		for (idx, ch) in body.chars().enumerate() {
			if idx >= Self::BODY_PREVIEW_LIMIT {
				buf.push('…');

				break;
			}
			buf.push(ch);
		}

		buf
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Userinfo and validation endpoints answer directly, so a custom [`ReqwestClient`] should keep
/// redirect following conservative; the adapter reports whatever final status it observes.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProviderHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ProviderRequest) -> HttpFuture<'_, ProviderResponse> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.get(request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(timeout) = request.timeout {
				builder = builder.timeout(timeout);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok::<_, TransportError>(ProviderResponse { status, body })
		})
	}
}
