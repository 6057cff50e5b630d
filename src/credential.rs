use crate::time::{now, DateTime};
use crate::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key and secret key.
///
/// The secret key is never logged or serialized; the Debug impl redacts
/// both keys and the session token.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token, present for temporary credentials.
    pub session_token: Option<String>,
    /// Expiration time for this credential.
    pub expires_in: Option<DateTime>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl Credential {
    /// Check whether this credential can be used for signing.
    ///
    /// Both keys must be present and the credential must not be about to
    /// expire. Takes 120s as buffer to avoid edge cases.
    pub fn is_valid(&self) -> bool {
        if self.access_key_id.is_empty() || self.secret_access_key.is_empty() {
            return false;
        }

        if let Some(valid) = self
            .expires_in
            .map(|v| v > now() + chrono::TimeDelta::try_minutes(2).expect("in bounds"))
        {
            return valid;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn credential() -> Credential {
        Credential {
            access_key_id: "access_key_id".to_string(),
            secret_access_key: "secret_access_key".to_string(),
            session_token: None,
            expires_in: None,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(credential().is_valid());

        let missing_secret = Credential {
            secret_access_key: String::new(),
            ..credential()
        };
        assert!(!missing_secret.is_valid());

        let missing_key = Credential {
            access_key_id: String::new(),
            ..credential()
        };
        assert!(!missing_key.is_valid());
    }

    #[test]
    fn test_is_valid_expiry_buffer() {
        let expiring = Credential {
            expires_in: Some(now() + TimeDelta::try_seconds(30).unwrap()),
            ..credential()
        };
        assert!(!expiring.is_valid());

        let fresh = Credential {
            expires_in: Some(now() + TimeDelta::try_hours(1).unwrap()),
            ..credential()
        };
        assert!(fresh.is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential {
            access_key_id: "AKIDEXAMPLEKEY".to_string(),
            secret_access_key: "wJalrXUtnFEMI/K7MDENG/bPxRfiCY".to_string(),
            session_token: Some("FwoGZXIvYXdzSESSION".to_string()),
            expires_in: None,
        };

        let out = format!("{cred:?}");
        assert!(!out.contains("wJalrXUtnFEMI/K7MDENG/bPxRfiCY"));
        assert!(!out.contains("FwoGZXIvYXdzSESSION"));
        assert!(out.contains("AKI***KEY"));
    }
}
