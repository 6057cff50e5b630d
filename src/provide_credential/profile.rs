use crate::constants::*;
use crate::provide_credential::ProvideCredential;
use crate::{Context, Credential, Error, Result};
use async_trait::async_trait;
use ini::Ini;
use log::debug;

/// ProfileCredentialProvider loads credentials from the shared config files.
///
/// This provider loads credentials from:
/// - `~/.aws/credentials` (or the path specified by `AWS_SHARED_CREDENTIALS_FILE`)
/// - `~/.aws/config` (or the path specified by `AWS_CONFIG_FILE`)
///
/// The profile to use is determined by:
/// 1. The `AWS_PROFILE` environment variable
/// 2. The profile specified via `with_profile()`
/// 3. Default to "default"
///
/// These are the same files the `aws configure` CLI maintains, so anything
/// configured through the CLI is picked up here without shelling out.
#[derive(Debug)]
pub struct ProfileCredentialProvider {
    profile: String,
    config_file: Option<String>,
    credentials_file: Option<String>,
}

impl Default for ProfileCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider with default settings.
    pub fn new() -> Self {
        Self {
            profile: "default".to_string(),
            config_file: None,
            credentials_file: None,
        }
    }

    /// Set the profile name to use.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the path to the config file.
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the path to the credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    async fn load_section(
        &self,
        ctx: &Context,
        path: &str,
        section: &str,
        what: &str,
    ) -> Result<Option<Credential>> {
        let expanded_path = match ctx.expand_home_dir(path) {
            Some(expanded) => expanded,
            None => {
                debug!("failed to expand homedir for path: {path}");
                return Ok(None);
            }
        };

        let content = match ctx.file_read_as_string(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read {what} file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let conf = Ini::load_from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse {what} file"))
                .with_source(anyhow::Error::new(e))
        })?;

        let props = match conf.section(Some(section)) {
            Some(props) => props,
            None => {
                debug!("section {section} not found in {what} file");
                return Ok(None);
            }
        };

        let access_key_id = props.get("aws_access_key_id");
        let secret_access_key = props.get("aws_secret_access_key");

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key_id: ak.to_string(),
                secret_access_key: sk.to_string(),
                session_token: props.get("aws_session_token").map(|s| s.to_string()),
                expires_in: None,
            })),
            _ => Ok(None),
        }
    }

    async fn load_from_credentials_file(
        &self,
        ctx: &Context,
        profile: &str,
    ) -> Result<Option<Credential>> {
        let path = if let Some(path) = &self.credentials_file {
            path.clone()
        } else if let Some(path) = ctx.env_var(AWS_SHARED_CREDENTIALS_FILE) {
            path
        } else {
            "~/.aws/credentials".to_string()
        };

        // The credentials file names sections after the bare profile name.
        self.load_section(ctx, &path, profile, "credentials").await
    }

    async fn load_from_config_file(
        &self,
        ctx: &Context,
        profile: &str,
    ) -> Result<Option<Credential>> {
        let path = if let Some(path) = &self.config_file {
            path.clone()
        } else if let Some(path) = ctx.env_var(AWS_CONFIG_FILE) {
            path
        } else {
            "~/.aws/config".to_string()
        };

        // The config file prefixes non-default sections with "profile ".
        let section = match profile {
            "default" => "default".to_string(),
            x => format!("profile {x}"),
        };

        self.load_section(ctx, &path, &section, "config").await
    }
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let profile = ctx
            .env_var(AWS_PROFILE)
            .unwrap_or_else(|| self.profile.clone());

        if let Some(cred) = self.load_from_credentials_file(ctx, &profile).await? {
            return Ok(Some(cred));
        }

        self.load_from_config_file(ctx, &profile).await
    }
}
