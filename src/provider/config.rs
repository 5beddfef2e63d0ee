//! Static provider configuration supplied by the gateway.

// self
use crate::{_prelude::*, error::ConfigError, obs};

/// Immutable provider configuration.
///
/// Endpoint URLs are kept exactly as configured and parsed lazily, so a misconfigured URL only
/// fails the operation that needs it. An empty string means "not configured".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
	/// Display name; adapters substitute their own default when empty.
	pub name: String,
	/// Legacy userinfo endpoint, also used for token validation.
	pub validate_url: String,
	/// Preferred userinfo endpoint.
	pub profile_url: String,
	/// Deadline applied to every outbound request, in milliseconds.
	pub request_timeout_ms: Option<u64>,
}
impl ProviderConfig {
	/// Creates an empty configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();

		self
	}

	/// Sets the validate (legacy userinfo) endpoint.
	pub fn with_validate_url(mut self, url: impl Into<String>) -> Self {
		self.validate_url = url.into();

		self
	}

	/// Sets the preferred userinfo endpoint.
	pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
		self.profile_url = url.into();

		self
	}

	/// Sets the per-request deadline.
	///
	/// Sub-millisecond remainders round up, so a non-zero timeout never collapses to zero.
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		let millis = timeout.as_nanos().div_ceil(1_000_000);

		self.request_timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));

		self
	}

	/// Returns the per-request deadline, if configured.
	pub fn request_timeout(&self) -> Option<Duration> {
		self.request_timeout_ms.map(Duration::from_millis)
	}

	/// Parses the validate endpoint; `Ok(None)` when it is not configured.
	pub fn validate_endpoint(&self) -> Result<Option<Url>, ConfigError> {
		parse_endpoint("validate", &self.validate_url)
	}

	/// Parses the profile endpoint; `Ok(None)` when it is not configured.
	pub fn profile_endpoint(&self) -> Result<Option<Url>, ConfigError> {
		parse_endpoint("profile", &self.profile_url)
	}

	/// Resolves the endpoint used for userinfo lookups.
	///
	/// The profile URL wins when set; deployments that only configured the legacy validate URL
	/// fall back to it.
	pub fn userinfo_endpoint(&self) -> Result<Url, ConfigError> {
		if let Some(url) = self.profile_endpoint()? {
			return Ok(url);
		}

		self.validate_endpoint()?
			.ok_or_else(|| ConfigError::MissingEndpoint { provider: self.name.clone() })
	}
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Option<Url>, ConfigError> {
	let raw = raw.trim();

	if raw.is_empty() {
		return Ok(None);
	}

	Url::parse(raw).map(Some).map_err(|source| ConfigError::InvalidEndpoint {
		endpoint,
		url: obs::redact_configured_endpoint(raw),
		source,
	})
}
