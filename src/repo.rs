use async_trait::async_trait;

mod contacts;
mod memory;
mod subscriptions;

pub use contacts::{ContactSubmission, NewContact};
pub use memory::MemoryStore;
pub use subscriptions::{NewSubscription, NewsletterSubscription};

/// Failures raised by a submission store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Submission store lock was poisoned by a panicking writer")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository owning contact submissions and newsletter subscriptions.
///
/// Every operation is a single critical section; in particular the
/// duplicate check and insert of `create_newsletter_subscription` must not
/// interleave with another create.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a contact submission under the next contact id
    async fn create_contact(&self, new_contact: NewContact) -> StoreResult<ContactSubmission>;

    async fn get_contact(&self, id: u64) -> StoreResult<Option<ContactSubmission>>;

    /// All contact submissions in insertion order
    async fn list_contacts(&self) -> StoreResult<Vec<ContactSubmission>>;

    /// Idempotent create: returns the existing record when the email is already subscribed
    async fn create_newsletter_subscription(
        &self,
        new_subscription: NewSubscription,
    ) -> StoreResult<NewsletterSubscription>;

    async fn get_newsletter_subscription(
        &self,
        id: u64,
    ) -> StoreResult<Option<NewsletterSubscription>>;

    /// Exact, case-sensitive match on the stored address
    async fn find_newsletter_subscription_by_email(
        &self,
        email: &str,
    ) -> StoreResult<Option<NewsletterSubscription>>;

    /// All newsletter subscriptions in insertion order
    async fn list_newsletter_subscriptions(&self) -> StoreResult<Vec<NewsletterSubscription>>;
}
