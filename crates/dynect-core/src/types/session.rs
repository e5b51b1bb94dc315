use serde::{Deserialize, Serialize};
use std::fmt;

/// Account credentials used to open a session
///
/// Serializes directly as the body of a `POST Session/`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Customer (account) name
    pub customer_name: String,
    /// User within the customer account
    pub user_name: String,
    /// Password for the user
    pub password: String,
}

impl Credentials {
    /// Create a new set of credentials
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_name", &self.customer_name)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct SessionData {
    /// Token to send as `Auth-Token` on every later request
    #[serde(default)]
    pub token: Option<String>,

    /// API version reported by the server
    #[serde(default)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_login_body() {
        let creds = Credentials::new("acme", "alice", "s3cret");
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            serde_json::json!({
                "customer_name": "acme",
                "user_name": "alice",
                "password": "s3cret"
            })
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("acme", "alice", "s3cret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cret"));
    }
}
