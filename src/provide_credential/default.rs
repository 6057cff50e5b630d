use crate::provide_credential::{
    EnvCredentialProvider, ProfileCredentialProvider, ProvideCredential, ProvideCredentialChain,
};
use crate::{Context, Credential, Result};
use async_trait::async_trait;

/// DefaultCredentialProvider tries the default chain of sources.
///
/// Resolution order:
///
/// 1. Environment variables
/// 2. Shared config files (`~/.aws/credentials`, `~/.aws/config`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(ProfileCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SHARED_CREDENTIALS_FILE,
    };
    use crate::{StaticEnv, TokioFileRead};
    use std::collections::HashMap;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_default_provider_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::default());

        let l = DefaultCredentialProvider::new();
        let x = l.provide_credential(&ctx).await.expect("load must succeed");
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_default_provider_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (AWS_ACCESS_KEY_ID.to_string(), "access_key_id".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "secret_access_key".to_string(),
                ),
            ]),
        });

        let l = DefaultCredentialProvider::new();
        let x = l
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must be found");
        assert_eq!("access_key_id", x.access_key_id);
        assert_eq!("secret_access_key", x.secret_access_key);
    }

    #[tokio::test]
    async fn test_default_provider_falls_back_to_shared_file() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let tmp_dir = tempdir()?;
        let file_path = tmp_dir.path().join("credentials");
        let mut tmp_file = File::create(&file_path)?;
        writeln!(tmp_file, "[default]")?;
        writeln!(tmp_file, "aws_access_key_id = shared_access_key_id")?;
        writeln!(tmp_file, "aws_secret_access_key = shared_secret_access_key")?;

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([(
                    AWS_SHARED_CREDENTIALS_FILE.to_string(),
                    file_path.to_string_lossy().to_string(),
                )]),
            });

        let l = DefaultCredentialProvider::new();
        let x = l
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must be found");
        assert_eq!("shared_access_key_id", x.access_key_id);
        assert_eq!("shared_secret_access_key", x.secret_access_key);

        Ok(())
    }

    /// Environment variables win over the shared files.
    #[tokio::test]
    async fn test_default_provider_env_takes_precedence() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let tmp_dir = tempdir()?;
        let file_path = tmp_dir.path().join("credentials");
        let mut tmp_file = File::create(&file_path)?;
        writeln!(tmp_file, "[default]")?;
        writeln!(tmp_file, "aws_access_key_id = shared_access_key_id")?;
        writeln!(tmp_file, "aws_secret_access_key = shared_secret_access_key")?;

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (AWS_ACCESS_KEY_ID.to_string(), "env_access_key_id".to_string()),
                    (
                        AWS_SECRET_ACCESS_KEY.to_string(),
                        "env_secret_access_key".to_string(),
                    ),
                    (
                        AWS_SHARED_CREDENTIALS_FILE.to_string(),
                        file_path.to_string_lossy().to_string(),
                    ),
                ]),
            });

        let l = DefaultCredentialProvider::new();
        let x = l
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must be found");
        assert_eq!("env_access_key_id", x.access_key_id);

        Ok(())
    }
}
