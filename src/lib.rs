//! Sign HTTP requests to IAM-protected AWS endpoints with Signature V4.
//!
//! This crate produces the `Host`, `X-Amz-Date` and `Authorization` headers
//! a SigV4-verifying service (API Gateway `execute-api`, SageMaker runtime)
//! requires, without ever sending the secret key. It does not perform any
//! network I/O itself: the caller hands the signed headers to whatever HTTP
//! client actually sends the request.
//!
//! ## Overview
//!
//! - [`Credential`] holds the keys; [`ProvideCredential`] implementations
//!   load them from the environment, the shared config files, or a value
//!   the caller already has, usually combined in a
//!   [`ProvideCredentialChain`].
//! - [`RequestSigner`] performs the SigV4 computation for one service and
//!   region.
//! - [`Signer`] ties a provider and a request signer together and caches
//!   the resolved credential.
//!
//! ## Example
//!
//! ```no_run
//! use apisign::{Context, DefaultCredentialProvider, OsEnv, RequestSigner, Signer, TokioFileRead};
//!
//! # async fn example() -> apisign::Result<()> {
//! let ctx = Context::new()
//!     .with_env(OsEnv)
//!     .with_file_read(TokioFileRead);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new("execute-api", "us-east-1"),
//! );
//!
//! let body = br#"{"query":"hi"}"#;
//! let (mut parts, _) = http::Request::builder()
//!     .method("POST")
//!     .uri("https://example.execute-api.us-east-1.amazonaws.com/prod/invoke")
//!     .header("content-type", "application/json")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts();
//!
//! signer.sign(&mut parts, body).await?;
//! // parts.headers now carries Host, X-Amz-Date and Authorization,
//! // ready to send unmodified.
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod constants;

mod context;
pub use context::{Context, Env, FileRead, OsEnv, StaticEnv, TokioFileRead};

mod error;
pub use error::{Error, ErrorKind, Result};

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    ProfileCredentialProvider, ProvideCredential, ProvideCredentialChain, StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod signer;
pub use signer::Signer;
