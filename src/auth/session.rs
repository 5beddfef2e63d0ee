//! Gateway session records enriched by identity providers.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// One authenticated session as seen by the gateway.
///
/// The gateway creates the record after a token exchange, hands it to a provider once for
/// enrichment, and persists it afterwards. Providers only ever read [`access_token`] and write
/// the identity fields (`user`, `email`, `groups`).
///
/// [`access_token`]: SessionState::access_token
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
	/// Opaque access token issued by the upstream authorization server.
	pub access_token: TokenSecret,
	/// ID token, when the exchange produced one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id_token: Option<TokenSecret>,
	/// Refresh token, when the exchange produced one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<TokenSecret>,
	/// Expiry instant of the access token, when known.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expires_on: Option<OffsetDateTime>,
	/// Provider-scoped user identifier.
	#[serde(default)]
	pub user: String,
	/// Primary email address of the user.
	#[serde(default)]
	pub email: String,
	/// Group memberships in provider order.
	#[serde(default)]
	pub groups: Vec<String>,
}
impl SessionState {
	/// Creates an un-enriched session for the provided access token.
	pub fn new(access_token: TokenSecret) -> Self {
		Self { access_token, ..Default::default() }
	}

	/// Sets the access token expiry.
	pub fn with_expires_on(mut self, expires_on: OffsetDateTime) -> Self {
		self.expires_on = Some(expires_on);

		self
	}

	/// Returns `true` if the access token expired at or before `now`.
	///
	/// Sessions without a known expiry never report as expired.
	pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
		self.expires_on.is_some_and(|expires_on| expires_on <= now)
	}

	/// Appends provider groups, skipping empty names and keeping duplicates.
	pub fn append_groups<I>(&mut self, groups: I)
	where
		I: IntoIterator<Item = String>,
	{
		self.groups.extend(groups.into_iter().filter(|group| !group.is_empty()));
	}
}
