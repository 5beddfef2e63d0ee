//! Authorization header strategies used when calling provider endpoints.

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError, http::HttpHeaders};

/// Token type prefix for bearer credentials.
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
/// Media type requested from userinfo and validation endpoints.
pub const ACCEPT_JSON: &str = "application/json";

/// Builds the headers that authenticate a request on behalf of a session.
pub type AuthorizationHeaderFn = fn(&TokenSecret) -> Result<HttpHeaders, ConfigError>;

/// Produces `Authorization: Bearer <token>` and `Accept: application/json`.
pub fn bearer_header(token: &TokenSecret) -> Result<HttpHeaders, ConfigError> {
	authorization_header(TOKEN_TYPE_BEARER, token)
}

fn authorization_header(token_type: &str, token: &TokenSecret) -> Result<HttpHeaders, ConfigError> {
	if !is_header_safe(token.expose()) {
		return Err(ConfigError::InvalidHeader);
	}

	let mut headers = HttpHeaders::new();

	headers.insert("Authorization".into(), format!("{token_type} {}", token.expose()));
	headers.insert("Accept".into(), ACCEPT_JSON.into());

	Ok(headers)
}

fn is_header_safe(value: &str) -> bool {
	value.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
}
