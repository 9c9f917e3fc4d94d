use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::sanitize::{Sanitized, require_non_empty},
    utils::sanitize_form_input,
};

/// A message sent through the public "share your aspiration" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspiration {
    pub name: String,
    pub message: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAspirationRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name length must be between 1 and 100 chars"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Message length must be between 1 and 2000 chars"
    ))]
    pub message: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
}

impl CreateAspirationRequest {
    /// Free-text fields go through the strict form sanitizer. The email has
    /// already passed validation and is kept as submitted.
    pub fn sanitize(&self) -> Result<Sanitized<Aspiration>, String> {
        let aspiration = Aspiration {
            name: sanitize_form_input(&self.name),
            message: sanitize_form_input(&self.message),
            email: self.email.clone(),
        };

        require_non_empty(&[
            ("name", aspiration.name.as_str()),
            ("message", aspiration.message.as_str()),
        ])?;

        let modified = aspiration.name != self.name || aspiration.message != self.message;

        Ok(Sanitized {
            record: aspiration,
            modified,
        })
    }
}
