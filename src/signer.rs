use crate::{Context, Credential, Error, ProvideCredential, RequestSigner, Result};
use std::sync::{Arc, Mutex};

/// Signer resolves a credential and signs requests with it.
///
/// The last valid credential is cached and reused until it goes invalid,
/// so the provider chain is only consulted when needed.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    provider: Arc<dyn ProvideCredential>,
    request_signer: RequestSigner,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential,
        request_signer: RequestSigner,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            request_signer,
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign the request, extending its headers in place.
    ///
    /// Fails with a credential error if no provider yields a usable
    /// credential; the request is left unsigned and the caller decides
    /// whether to send it anyway.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        let cred = match cached {
            Some(cred) if cred.is_valid() => Some(cred),
            _ => {
                let loaded = self.provider.provide_credential(&self.ctx).await?;
                *self.credential.lock().expect("lock poisoned") = loaded.clone();
                loaded
            }
        };

        let Some(cred) = cred else {
            return Err(Error::credential_unavailable(
                "no credential found, request left unsigned",
            ));
        };

        self.request_signer.sign(req, body, &cred)
    }
}
