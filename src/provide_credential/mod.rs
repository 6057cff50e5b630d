use crate::{Context, Credential, Result};
use std::fmt::Debug;

mod chain;
pub use chain::ProvideCredentialChain;

mod config;
pub use config::ConfigCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod profile;
pub use profile::ProfileCredentialProvider;

mod static_;
pub use static_::StaticCredentialProvider;

/// ProvideCredential loads a credential from somewhere: the environment,
/// the shared config files, or a value the caller already holds.
///
/// Returning `Ok(None)` signals a clean absence, letting a chain fall
/// through to the next source; `Err` means the source exists but is
/// malformed.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Load a credential from this source.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>>;
}
