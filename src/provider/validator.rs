//! Shared bearer-token validation used by every provider adapter.
//!
//! Adapters never talk to the validation endpoint themselves; they hand the configured
//! endpoint, the token, and the authorization headers to a [`TokenValidator`]. The default
//! [`HttpTokenValidator`] issues a single `GET` and treats any 2xx status as "token accepted".

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	http::{HttpHeaders, ProviderHttpClient, ProviderRequest},
	obs,
	provider::{ProviderConfig, ProviderFuture},
};

/// Capability that checks whether an access token is still accepted by a provider.
///
/// Implementors are required to be `Send + Sync` so a single validator can back many adapters.
/// Failures of any kind (transport, status, configuration) are reported as `false`.
pub trait TokenValidator: Send + Sync {
	/// Validates `token` against the provider's validate endpoint.
	///
	/// When `headers` is empty the token is sent as the `access_token` query parameter instead.
	fn validate_token<'a>(
		&'a self,
		config: &'a ProviderConfig,
		token: &'a TokenSecret,
		headers: HttpHeaders,
	) -> ProviderFuture<'a, bool>;
}

/// Default [`TokenValidator`] that calls the validate endpoint over a [`ProviderHttpClient`].
pub struct HttpTokenValidator<C>
where
	C: ?Sized + ProviderHttpClient,
{
	http_client: Arc<C>,
}
impl<C> HttpTokenValidator<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a validator that shares the provided transport.
	pub fn new(http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into() }
	}
}
impl<C> Debug for HttpTokenValidator<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("HttpTokenValidator(..)")
	}
}
impl<C> TokenValidator for HttpTokenValidator<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn validate_token<'a>(
		&'a self,
		config: &'a ProviderConfig,
		token: &'a TokenSecret,
		headers: HttpHeaders,
	) -> ProviderFuture<'a, bool> {
		Box::pin(async move {
			if token.is_empty() {
				return false;
			}

			let mut endpoint = match config.validate_endpoint() {
				Ok(Some(url)) => url,
				Ok(None) => return false,
				Err(e) => {
					obs::log_request_failure(
						&obs::redact_configured_endpoint(&config.validate_url),
						&e,
					);

					return false;
				},
			};

			if headers.is_empty() {
				endpoint.query_pairs_mut().append_pair("access_token", token.expose());
			}

			let redacted = obs::redact_endpoint(&endpoint);
			let request = ProviderRequest::get(endpoint)
				.with_headers(headers)
				.with_timeout(config.request_timeout());

			match self.http_client.execute(request).await {
				Ok(response) => {
					obs::log_validation_response(
						&redacted,
						response.status,
						&response.body_preview(),
					);

					response.is_success()
				},
				Err(e) => {
					obs::log_request_failure(&redacted, &e);

					false
				},
			}
		})
	}
}
