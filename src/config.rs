use crate::constants::*;
use crate::utils::Redact;
use crate::Context;
use std::fmt::{Debug, Formatter};

/// Static signing configuration, typically captured once at startup.
///
/// Unlike a module-level cache, a `Config` is an explicit value the caller
/// owns and passes on; rotating credentials means building a new one.
#[derive(Default, Clone)]
pub struct Config {
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
    /// Session token, present for temporary credentials.
    pub session_token: Option<String>,
    /// Region of the target service, e.g. `us-east-1`.
    pub region: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("region", &self.region)
            .finish()
    }
}

impl Config {
    /// Capture configuration from the context's environment.
    ///
    /// Region resolution prefers `AWS_REGION` and falls back to
    /// `AWS_DEFAULT_REGION`.
    pub fn from_env(ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        Self {
            access_key_id: envs.get(AWS_ACCESS_KEY_ID).cloned(),
            secret_access_key: envs.get(AWS_SECRET_ACCESS_KEY).cloned(),
            session_token: envs.get(AWS_SESSION_TOKEN).cloned(),
            region: envs
                .get(AWS_REGION)
                .or_else(|| envs.get(AWS_DEFAULT_REGION))
                .cloned(),
        }
    }
}
