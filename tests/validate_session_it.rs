// crates.io
use httpmock::prelude::*;
// self
use idp_adapter::{
	_preludet::*,
	auth::{SessionState, TokenSecret},
	http::{HttpHeaders, ReqwestHttpClient},
	provider::{
		HttpTokenValidator, IdentityProvider, ProviderConfig, ProviderFuture,
		ReqwestChurchToolsProvider, TokenValidator,
	},
};

const ACCESS_TOKEN: &str = "ct-access-token";

fn session() -> SessionState {
	SessionState::new(TokenSecret::new(ACCESS_TOKEN))
}

fn validating_provider(server: &MockServer, path: &str) -> ReqwestChurchToolsProvider {
	build_reqwest_test_provider(ProviderConfig::new().with_validate_url(server.url(path)))
}

#[tokio::test]
async fn validate_maps_status_classes() {
	let server = MockServer::start_async().await;

	for (path, status, expected) in [
		("/ok", 200, true),
		("/no-content", 204, true),
		("/unauthorized", 401, false),
		("/forbidden", 403, false),
		("/broken", 500, false),
		("/unavailable", 503, false),
	] {
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path(path)
					.header("authorization", format!("Bearer {ACCESS_TOKEN}"))
					.header("accept", "application/json");
				then.status(status);
			})
			.await;
		let provider = validating_provider(&server, path);

		assert_eq!(provider.validate_session(&session()).await, expected, "Status {status}.");

		mock.assert_async().await;
	}
}

#[tokio::test]
async fn validate_is_false_when_the_deadline_fires() {
	let server = MockServer::start_async().await;
	let _slow = server
		.mock_async(|when, then| {
			when.method(GET).path("/slow");
			then.status(200).delay(Duration::from_secs(3));
		})
		.await;
	let provider = build_reqwest_test_provider(
		ProviderConfig::new()
			.with_validate_url(server.url("/slow"))
			.with_request_timeout(Duration::from_secs(1)),
	);

	assert!(!provider.validate_session(&session()).await);
}

#[tokio::test]
async fn sub_second_timeout_still_validates_against_a_fast_provider() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/validate");
			then.status(200);
		})
		.await;
	let provider = build_reqwest_test_provider(
		ProviderConfig::new()
			.with_validate_url(server.url("/validate"))
			.with_request_timeout(Duration::from_millis(500)),
	);

	assert!(provider.validate_session(&session()).await);

	mock.assert_async().await;
}

#[tokio::test]
async fn validate_is_false_for_unreachable_hosts() {
	let provider = build_reqwest_test_provider(
		ProviderConfig::new().with_validate_url("http://127.0.0.1:1/validate"),
	);

	assert!(!provider.validate_session(&session()).await);
}

#[tokio::test]
async fn validate_uses_validate_url_only() {
	let server = MockServer::start_async().await;
	let profile = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/userinfo");
			then.status(200);
		})
		.await;
	let provider = build_reqwest_test_provider(
		ProviderConfig::new().with_profile_url(server.url("/oauth/userinfo")),
	);

	assert!(!provider.validate_session(&session()).await, "No validate URL means no validation.");

	profile.assert_calls_async(0).await;
}

#[tokio::test]
async fn validate_skips_io_for_empty_tokens() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/validate");
			then.status(200);
		})
		.await;
	let provider = validating_provider(&server, "/validate");
	let session = SessionState::new(TokenSecret::new(""));

	assert!(!provider.validate_session(&session).await);

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn validate_leaves_the_session_untouched() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/validate");
			then.status(200).body(r#"{"id": 1, "email": "ignored@example.com"}"#);
		})
		.await;
	let provider = validating_provider(&server, "/validate");
	let mut session = session();

	session.user = "existing".into();

	let before = session.clone();

	assert!(provider.validate_session(&session).await);
	assert_eq!(session, before);

	mock.assert_async().await;
}

#[tokio::test]
async fn header_less_validation_sends_token_as_query_parameter() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/validate").query_param("access_token", ACCESS_TOKEN);
			then.status(200);
		})
		.await;
	let validator = HttpTokenValidator::<ReqwestHttpClient>::new(test_reqwest_http_client());
	let config = ProviderConfig::new().with_validate_url(server.url("/validate"));
	let token = TokenSecret::new(ACCESS_TOKEN);

	assert!(validator.validate_token(&config, &token, HttpHeaders::new()).await);

	mock.assert_async().await;
}

#[tokio::test]
async fn injected_validator_replaces_the_default() {
	struct RejectAll;
	impl TokenValidator for RejectAll {
		fn validate_token<'a>(
			&'a self,
			_config: &'a ProviderConfig,
			_token: &'a TokenSecret,
			_headers: HttpHeaders,
		) -> ProviderFuture<'a, bool> {
			Box::pin(async { false })
		}
	}

	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/validate");
			then.status(200);
		})
		.await;
	let provider = build_reqwest_test_provider(
		ProviderConfig::new().with_validate_url(server.url("/validate")),
	)
	.with_validator(Arc::new(RejectAll));

	assert!(!provider.validate_session(&session()).await);

	mock.assert_calls_async(0).await;
}
