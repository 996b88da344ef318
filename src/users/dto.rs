use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldError};
use crate::users::repo::User;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    // Missing fields default to empty so they show up as field errors
    // instead of a body-level deserialization rejection.
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub photo_url: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

fn is_valid_url(s: &str) -> bool {
    lazy_static! {
        static ref URL_RE: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
    }
    URL_RE.is_match(s)
}

impl CreateUserRequest {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push(FieldError::new("firstName", "First name cannot be empty"));
        }
        if self.last_name.trim().is_empty() {
            errors.push(FieldError::new("lastName", "Last name cannot be empty"));
        }
        if self.photo_url.trim().is_empty() {
            errors.push(FieldError::new("photoUrl", "Photo URL cannot be empty"));
        } else if !is_valid_url(self.photo_url.trim()) {
            errors.push(FieldError::new("photoUrl", "Photo URL must be a valid URL"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}
