use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::envelope::Envelope;
use crate::error::{RestError, RestResult};
use crate::repo::{NewSubscription, SubmissionStore};
use crate::validation::{Fields, ValidationErrors, Validator};

use super::read_fields;

pub const SUBSCRIBED: &str = "Newsletter subscription successful";
pub const INVALID_EMAIL: &str = "Invalid email address";

impl TryFrom<Fields> for NewSubscription {
    type Error = ValidationErrors;

    fn try_from(form: Fields) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        match v.email("email", form.get("email"), INVALID_EMAIL) {
            Some(email) => Ok(NewSubscription { email }),
            None => Err(v.into_errors()),
        }
    }
}

/// Newsletter signup endpoint, accepting JSON or url-encoded bodies.
///
/// Subscribing an address twice is not an error: the original record's id is
/// returned with the same `201 Created`.
#[tracing::instrument(name = "Subscribe to the newsletter", skip(req, store, body))]
#[post("")]
async fn subscribe(
    req: HttpRequest,
    store: web::Data<dyn SubmissionStore>,
    body: web::Bytes,
) -> RestResult<HttpResponse> {
    let new_subscription: NewSubscription = read_fields(&req, &body)
        .and_then(NewSubscription::try_from)
        .map_err(|errors| RestError::validation(INVALID_EMAIL, errors))?;

    let subscription = store
        .create_newsletter_subscription(new_subscription)
        .await?;
    tracing::info!(id = subscription.id, "Accepted newsletter subscription");

    Ok(Envelope::created(SUBSCRIBED, subscription.id).respond(StatusCode::CREATED))
}

/// Newsletter API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/newsletter").service(subscribe)
}
