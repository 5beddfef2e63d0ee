//! Session credentials that stay out of logs and error messages.

// self
use crate::_prelude::*;

/// Access, ID, or refresh token carried by a gateway session.
///
/// Formatting never prints the token; only [`TokenSecret::expose`] does, and the only callers of
/// that are the header and query builders that put the token on the wire. Serialization stays a
/// plain string so persisted sessions keep their existing shape.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a token issued by the identity provider.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw token for placement in an outbound request.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when the session holds no token; validation skips I/O in that case.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let shown = if self.is_empty() { "<empty>" } else { "<redacted>" };

		write!(f, "TokenSecret({shown})")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::SessionState;

	#[test]
	fn session_debug_output_hides_every_token() {
		let mut session = SessionState::new("access-abc".into());

		session.id_token = Some("id-def".into());
		session.refresh_token = Some("refresh-ghi".into());

		let rendered = format!("{session:?}");

		for raw in ["access-abc", "id-def", "refresh-ghi"] {
			assert!(!rendered.contains(raw), "Debug output leaked `{raw}`: {rendered}.");
		}

		assert!(rendered.contains("TokenSecret(<redacted>)"));
	}

	#[test]
	fn missing_tokens_are_distinguishable_in_logs() {
		assert_eq!(format!("{:?}", TokenSecret::default()), "TokenSecret(<empty>)");
		assert_eq!(format!("{}", TokenSecret::from("abc")), "<redacted>");
	}

	#[test]
	fn persisted_sessions_store_tokens_as_plain_strings() {
		let encoded = serde_json::to_value(SessionState::new("persisted".into()))
			.expect("Session should serialize.");

		assert_eq!(encoded["access_token"], "persisted");
		assert_eq!(
			serde_json::from_value::<TokenSecret>(encoded["access_token"].clone())
				.expect("Token should deserialize."),
			TokenSecret::new("persisted")
		);
	}
}
