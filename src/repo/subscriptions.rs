use chrono::{DateTime, Utc};

use serde::Serialize;

use crate::domain::EmailAddress;

/// New newsletter subscription request
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub email: EmailAddress,
}

/// Stored newsletter subscription record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: u64,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}
