//! Provider-facing contracts (configuration, validation) and concrete adapters.
//!
//! `config` holds the static [`ProviderConfig`] owned by the gateway, `validator` defines the
//! injected [`TokenValidator`] capability, and each concrete adapter implements
//! [`IdentityProvider`] so the gateway can treat every provider uniformly.

pub mod churchtools;
pub mod config;
pub mod validator;

pub use churchtools::*;
pub use config::*;
pub use validator::*;

// self
use crate::{_prelude::*, auth::SessionState};

/// Boxed future returned by provider hooks.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Capability shared by all identity-provider adapters.
///
/// The trait is object safe so gateways can hold `Arc<dyn IdentityProvider>` and pick the
/// concrete adapter from configuration. Implementations keep no mutable state between calls;
/// the session passed to each hook is owned by the calling request for the duration of the call.
pub trait IdentityProvider: Send + Sync {
	/// Returns the configuration the adapter was built with (display name already defaulted).
	fn config(&self) -> &ProviderConfig;

	/// Returns the provider display name.
	fn name(&self) -> &str {
		&self.config().name
	}

	/// Populates `session.user`, `session.email`, and `session.groups` from the provider.
	///
	/// The session may be partially updated when an error is returned.
	fn enrich_session<'a>(
		&'a self,
		session: &'a mut SessionState,
	) -> ProviderFuture<'a, Result<()>>;

	/// Returns `true` iff the provider still accepts the session's access token.
	fn validate_session<'a>(&'a self, session: &'a SessionState) -> ProviderFuture<'a, bool>;
}
