//! ChurchTools adapter: userinfo-backed session enrichment plus bearer-token validation.
//!
//! ChurchTools exposes numeric user identifiers, so the `id` claim is read as an integer and
//! stored in its decimal form. `groups` is optional; `id` and `email` are required.

// self
use crate::{
	_prelude::*,
	auth::{self, AuthorizationHeaderFn, SessionState, TokenSecret},
	error::ResponseError,
	http::{ProviderHttpClient, ProviderRequest},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
	provider::{
		HttpTokenValidator, IdentityProvider, ProviderConfig, ProviderFuture, TokenValidator,
	},
	userinfo::UserInfoDocument,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Display name registered when the configuration leaves `name` empty.
pub const CHURCHTOOLS_PROVIDER_NAME: &str = "ChurchTools";

#[cfg(feature = "reqwest")]
/// Adapter specialized for the crate's default reqwest transport.
pub type ReqwestChurchToolsProvider = ChurchToolsProvider<ReqwestHttpClient>;

/// Identity provider adapter for ChurchTools instances.
///
/// Construction performs no I/O and no URL validation; endpoints are resolved on each call.
#[derive(Clone)]
pub struct ChurchToolsProvider<C>
where
	C: ?Sized + ProviderHttpClient,
{
	config: ProviderConfig,
	http_client: Arc<C>,
	validator: Arc<dyn TokenValidator>,
	authorization_header: AuthorizationHeaderFn,
}
impl<C> ChurchToolsProvider<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates an adapter that reuses the caller-provided transport.
	///
	/// The default [`HttpTokenValidator`] shares the same transport; replace it with
	/// [`ChurchToolsProvider::with_validator`].
	pub fn with_http_client(mut config: ProviderConfig, http_client: impl Into<Arc<C>>) -> Self {
		if config.name.is_empty() {
			config.name = CHURCHTOOLS_PROVIDER_NAME.into();
		}

		let http_client = http_client.into();
		let validator = Arc::new(HttpTokenValidator::<C>::new(http_client.clone()));

		Self { config, http_client, validator, authorization_header: auth::bearer_header }
	}

	/// Replaces the token validator used by [`IdentityProvider::validate_session`].
	pub fn with_validator(mut self, validator: Arc<dyn TokenValidator>) -> Self {
		self.validator = validator;

		self
	}

	async fn enrich(&self, session: &mut SessionState) -> Result<()> {
		let endpoint = self.config.userinfo_endpoint()?;
		let document = self.fetch_userinfo(endpoint, &session.access_token).await?;

		apply_claims(&document, session)
	}

	async fn fetch_userinfo(&self, endpoint: Url, token: &TokenSecret) -> Result<UserInfoDocument> {
		let headers = (self.authorization_header)(token)?;
		let redacted = obs::redact_endpoint(&endpoint);
		let request = ProviderRequest::get(endpoint)
			.with_headers(headers)
			.with_timeout(self.config.request_timeout());
		let response = self.http_client.execute(request).await.map_err(|e| {
			obs::log_request_failure(&redacted, &e);

			Error::from(e)
		})?;

		if !response.is_success() {
			let err = ResponseError::UnexpectedStatus {
				status: response.status,
				body: response.body_preview(),
			};

			obs::log_request_failure(&redacted, &err);

			return Err(err.into());
		}

		UserInfoDocument::from_slice(&response.body).map_err(|source| {
			let err = ResponseError::Malformed { source, status: response.status };

			obs::log_request_failure(&redacted, &err);

			err.into()
		})
	}

	async fn validate(&self, session: &SessionState) -> bool {
		match (self.authorization_header)(&session.access_token) {
			Ok(headers) =>
				self.validator.validate_token(&self.config, &session.access_token, headers).await,
			Err(e) => {
				obs::log_request_failure(
					&obs::redact_configured_endpoint(&self.config.validate_url),
					&e,
				);

				false
			},
		}
	}
}
#[cfg(feature = "reqwest")]
impl ChurchToolsProvider<ReqwestHttpClient> {
	/// Creates a new adapter backed by a default reqwest transport.
	pub fn new(config: ProviderConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> IdentityProvider for ChurchToolsProvider<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn config(&self) -> &ProviderConfig {
		&self.config
	}

	fn enrich_session<'a>(
		&'a self,
		session: &'a mut SessionState,
	) -> ProviderFuture<'a, Result<()>> {
		const KIND: OperationKind = OperationKind::EnrichSession;

		let span = OperationSpan::new(KIND, self.name());

		obs::record_operation_outcome(KIND, self.name(), OperationOutcome::Started);

		Box::pin(async move {
			let result = span.instrument(self.enrich(session)).await;

			obs::record_operation_outcome(
				KIND,
				self.name(),
				OperationOutcome::of_enrichment(&result),
			);

			result
		})
	}

	fn validate_session<'a>(&'a self, session: &'a SessionState) -> ProviderFuture<'a, bool> {
		const KIND: OperationKind = OperationKind::ValidateSession;

		let span = OperationSpan::new(KIND, self.name());

		obs::record_operation_outcome(KIND, self.name(), OperationOutcome::Started);

		Box::pin(async move {
			let valid = span.instrument(self.validate(session)).await;
			let outcome = OperationOutcome::of_validation(valid);

			obs::record_operation_outcome(KIND, self.name(), outcome);

			valid
		})
	}
}
impl<C> Debug for ChurchToolsProvider<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ChurchToolsProvider").field("config", &self.config).finish()
	}
}

/// Copies claims into the session: groups first, then `id`, then `email`.
///
/// Groups appended before a missing `id`/`email` is detected stay on the session; callers
/// discard the session on error.
fn apply_claims(document: &UserInfoDocument, session: &mut SessionState) -> Result<()> {
	if let Ok(groups) = document.get_path("groups").string_array() {
		session.append_groups(groups);
	}

	let id = document
		.get_path("id")
		.int()
		.map_err(|source| Error::MissingClaim { claim: "id", source })?;

	session.user = id.to_string();

	let email = document
		.get_path("email")
		.string()
		.map_err(|source| Error::MissingClaim { claim: "email", source })?;

	session.email = email;

	Ok(())
}
