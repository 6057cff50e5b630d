use crate::provide_credential::ProvideCredential;
use crate::{Context, Credential, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider that yields a credential wins. Provider errors are
/// logged and skipped so a broken source never shadows a working one.
pub struct ProvideCredentialChain {
    providers: Vec<Box<dyn ProvideCredential>>,
}

impl ProvideCredentialChain {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl Default for ProvideCredentialChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProvideCredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait]
impl ProvideCredential for ProvideCredentialChain {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}, skipping");
                    continue;
                }
            }
        }

        Ok(None)
    }
}
