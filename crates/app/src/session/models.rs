//! Session Models

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroize;

/// Sensitive string that is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(**redacted**)")?;
        Ok(())
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: Secret,
}

/// Signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Authenticated session, as returned by the login and refresh endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: AdminUser,
    access_token: Secret,
    refresh_token: Secret,
}

impl Session {
    #[must_use]
    pub fn new(user: AdminUser, access_token: Secret, refresh_token: Secret) -> Self {
        Self {
            user,
            access_token,
            refresh_token,
        }
    }

    /// Bearer token for API requests.
    #[must_use]
    pub const fn access_token(&self) -> &Secret {
        &self.access_token
    }

    /// Token exchanged for a new session once the access token expires.
    #[must_use]
    pub const fn refresh_token(&self) -> &Secret {
        &self.refresh_token
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let credentials = Credentials {
            email: "admin@example.com".to_string(),
            password: Secret::new("hunter2"),
        };

        let debug = format!("{credentials:?}");

        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("**redacted**"));
    }

    #[test]
    fn credentials_serialize_with_plain_password() -> TestResult {
        let credentials = Credentials {
            email: "admin@example.com".to_string(),
            password: Secret::new("hunter2"),
        };

        assert_eq!(
            serde_json::to_value(&credentials)?,
            json!({ "email": "admin@example.com", "password": "hunter2" })
        );

        Ok(())
    }

    #[test]
    fn session_deserializes_login_response() -> TestResult {
        let session: Session = serde_json::from_value(json!({
            "accessToken": "access-1",
            "refreshToken": "refresh-1",
            "user": { "id": 3, "email": "admin@example.com" }
        }))?;

        assert_eq!(session.user.id, 3);
        assert_eq!(session.access_token().expose(), "access-1");
        assert_eq!(session.refresh_token().expose(), "refresh-1");
        assert!(!format!("{session:?}").contains("access-1"));

        Ok(())
    }
}
