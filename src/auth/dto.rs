use serde::{Deserialize, Serialize};

use crate::{auth::repo_types::User, error::AppError};

/// Request body for signup. Every field is optional on the wire so that a
/// missing field is reported as a validation error, not a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Signup fields after validation, password still in plain text.
#[derive(Debug)]
pub struct ValidSignup {
    pub username: String,
    pub password: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl SignupRequest {
    pub fn validate(self) -> Result<ValidSignup, AppError> {
        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::validation("Username is required"))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::validation("Password is required"))?;

        Ok(ValidSignup {
            username,
            password,
            image_url: self.image_url,
            bio: self.bio,
        })
    }
}

/// Request body for login. Missing fields are treated as bad credentials.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for Profile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            image_url: u.image_url,
            bio: u.bio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_never_carries_password_hash() {
        let user = User {
            id: 7,
            username: "ada".into(),
            password_hash: "$argon2id$secret".into(),
            image_url: None,
            bio: Some("cooks".into()),
        };
        let json = serde_json::to_value(Profile::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "username": "ada", "image_url": null, "bio": "cooks" })
        );
    }

    #[test]
    fn signup_requires_username_and_password() {
        let err = SignupRequest {
            username: Some("   ".into()),
            password: Some("pw".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Username is required");

        let err = SignupRequest {
            username: Some("ada".into()),
            password: None,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Password is required");
    }

    #[test]
    fn signup_keeps_optional_fields() {
        let valid = SignupRequest {
            username: Some("ada".into()),
            password: Some("pw".into()),
            image_url: Some("https://img/ada.png".into()),
            bio: None,
        }
        .validate()
        .unwrap();
        assert_eq!(valid.username, "ada");
        assert_eq!(valid.image_url.as_deref(), Some("https://img/ada.png"));
        assert!(valid.bio.is_none());
    }
}
