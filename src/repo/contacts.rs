use chrono::{DateTime, Utc};

use serde::Serialize;

use crate::domain::EmailAddress;

/// Validated contact form, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub privacy_policy: bool,
}

/// Stored contact form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub privacy_policy: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub(crate) fn new(id: u64, contact: NewContact, created_at: DateTime<Utc>) -> Self {
        let NewContact {
            first_name,
            last_name,
            email,
            company,
            subject,
            message,
            privacy_policy,
        } = contact;

        Self {
            id,
            first_name,
            last_name,
            email,
            company,
            subject,
            message,
            privacy_policy,
            created_at,
        }
    }
}
