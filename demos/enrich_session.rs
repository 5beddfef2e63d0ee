//! Enriches a session from a live userinfo endpoint, then checks that the token is still valid.
//!
//! Usage: `IDP_PROFILE_URL=https://ct.example.com/oauth/userinfo IDP_ACCESS_TOKEN=... cargo run
//! --example enrich_session`. `IDP_VALIDATE_URL` is optional.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use idp_adapter::{
	auth::{SessionState, TokenSecret},
	provider::{ChurchToolsProvider, IdentityProvider, ProviderConfig},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let access_token =
		env::var("IDP_ACCESS_TOKEN").map_err(|_| eyre!("IDP_ACCESS_TOKEN must be set."))?;
	let config = ProviderConfig::new()
		.with_profile_url(env::var("IDP_PROFILE_URL").unwrap_or_default())
		.with_validate_url(env::var("IDP_VALIDATE_URL").unwrap_or_default())
		.with_request_timeout(std::time::Duration::from_secs(10));
	let provider: Arc<dyn IdentityProvider> = Arc::new(ChurchToolsProvider::new(config));
	let mut session = SessionState::new(TokenSecret::new(access_token));

	provider.enrich_session(&mut session).await?;

	println!("Provider: {}.", provider.name());
	println!("User: {}.", session.user);
	println!("Email: {}.", session.email);
	println!("Groups: {:?}.", session.groups);
	println!("Token still valid: {}.", provider.validate_session(&session).await);

	Ok(())
}
