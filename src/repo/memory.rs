use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use chrono::Utc;

use super::{
    ContactSubmission, NewContact, NewSubscription, NewsletterSubscription, StoreError,
    StoreResult, SubmissionStore,
};

/// Process-local submission store. Records are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Submissions>,
}

#[derive(Debug)]
struct Submissions {
    // Keyed by id; ids are handed out in increasing order, so iteration
    // order is insertion order
    contacts: BTreeMap<u64, ContactSubmission>,
    subscriptions: BTreeMap<u64, NewsletterSubscription>,
    next_contact_id: u64,
    next_subscription_id: u64,
}

impl Default for Submissions {
    fn default() -> Self {
        Self {
            contacts: BTreeMap::new(),
            subscriptions: BTreeMap::new(),
            next_contact_id: 1,
            next_subscription_id: 1,
        }
    }
}

impl Submissions {
    fn find_subscription(&self, email: &str) -> Option<&NewsletterSubscription> {
        self.subscriptions
            .values()
            .find(|subscription| subscription.email.as_ref() == email)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Submissions>> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    #[tracing::instrument(name = "Insert contact submission", skip(self, new_contact))]
    async fn create_contact(&self, new_contact: NewContact) -> StoreResult<ContactSubmission> {
        let mut submissions = self.lock()?;

        let id = submissions.next_contact_id;
        submissions.next_contact_id += 1;

        let contact = ContactSubmission::new(id, new_contact, Utc::now());
        submissions.contacts.insert(id, contact.clone());

        tracing::debug!(id, "Stored contact submission");
        Ok(contact)
    }

    #[tracing::instrument(name = "Fetch contact submission by id", skip(self))]
    async fn get_contact(&self, id: u64) -> StoreResult<Option<ContactSubmission>> {
        Ok(self.lock()?.contacts.get(&id).cloned())
    }

    #[tracing::instrument(name = "Fetch all contact submissions", skip(self))]
    async fn list_contacts(&self) -> StoreResult<Vec<ContactSubmission>> {
        Ok(self.lock()?.contacts.values().cloned().collect())
    }

    #[tracing::instrument(
        name = "Insert newsletter subscription",
        skip(self, new_subscription),
        fields(email = %new_subscription.email)
    )]
    async fn create_newsletter_subscription(
        &self,
        new_subscription: NewSubscription,
    ) -> StoreResult<NewsletterSubscription> {
        // Check and insert under the same guard
        let mut submissions = self.lock()?;

        if let Some(existing) = submissions.find_subscription(new_subscription.email.as_ref()) {
            tracing::debug!(id = existing.id, "Email already subscribed");
            return Ok(existing.clone());
        }

        let id = submissions.next_subscription_id;
        submissions.next_subscription_id += 1;

        let subscription = NewsletterSubscription {
            id,
            email: new_subscription.email,
            created_at: Utc::now(),
        };
        submissions.subscriptions.insert(id, subscription.clone());

        tracing::debug!(id, "Stored newsletter subscription");
        Ok(subscription)
    }

    #[tracing::instrument(name = "Fetch newsletter subscription by id", skip(self))]
    async fn get_newsletter_subscription(
        &self,
        id: u64,
    ) -> StoreResult<Option<NewsletterSubscription>> {
        Ok(self.lock()?.subscriptions.get(&id).cloned())
    }

    #[tracing::instrument(name = "Fetch newsletter subscription by email", skip(self))]
    async fn find_newsletter_subscription_by_email(
        &self,
        email: &str,
    ) -> StoreResult<Option<NewsletterSubscription>> {
        Ok(self.lock()?.find_subscription(email).cloned())
    }

    #[tracing::instrument(name = "Fetch all newsletter subscriptions", skip(self))]
    async fn list_newsletter_subscriptions(&self) -> StoreResult<Vec<NewsletterSubscription>> {
        Ok(self.lock()?.subscriptions.values().cloned().collect())
    }
}
