use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::envelope::Envelope;
use crate::error::{RestError, RestResult};
use crate::repo::{NewContact, SubmissionStore};
use crate::validation::{Fields, ValidationErrors, Validator};

use super::read_fields;

pub const SUBMITTED: &str = "Contact form submitted successfully";
pub const VALIDATION_FAILED: &str = "Validation error";

impl TryFrom<Fields> for NewContact {
    type Error = ValidationErrors;

    fn try_from(form: Fields) -> Result<Self, Self::Error> {
        let mut v = Validator::new();

        let first_name = v.min_len(
            "firstName",
            form.get("firstName"),
            2,
            "First name must be at least 2 characters.",
        );
        let last_name = v.min_len(
            "lastName",
            form.get("lastName"),
            2,
            "Last name must be at least 2 characters.",
        );
        let email = v.email(
            "email",
            form.get("email"),
            "Please enter a valid email address.",
        );
        let company = v.min_len(
            "company",
            form.get("company"),
            2,
            "Company name must be at least 2 characters.",
        );
        // The site offers a fixed list of subjects, only emptiness is checked here
        let subject = v.min_len("subject", form.get("subject"), 1, "Please select a subject.");
        let message = v.min_len(
            "message",
            form.get("message"),
            10,
            "Message must be at least 10 characters.",
        );
        let privacy_policy = v.accepted(
            "privacyPolicy",
            form.get("privacyPolicy"),
            "You must agree to the privacy policy.",
        );

        match (first_name, last_name, email, company, subject, message) {
            (Some(first_name), Some(last_name), Some(email), Some(company), Some(subject), Some(message))
                if v.is_valid() =>
            {
                Ok(NewContact {
                    first_name,
                    last_name,
                    email,
                    company,
                    subject,
                    message,
                    privacy_policy,
                })
            }
            _ => Err(v.into_errors()),
        }
    }
}

/// Contact form submission endpoint
#[tracing::instrument(name = "Submit a contact form", skip(req, store, body))]
#[post("")]
async fn submit(
    req: HttpRequest,
    store: web::Data<dyn SubmissionStore>,
    body: web::Bytes,
) -> RestResult<HttpResponse> {
    let new_contact: NewContact = read_fields(&req, &body)
        .and_then(NewContact::try_from)
        .map_err(|errors| RestError::validation(VALIDATION_FAILED, errors))?;

    let contact = store.create_contact(new_contact).await?;
    tracing::info!(id = contact.id, "Accepted contact form submission");

    Ok(Envelope::created(SUBMITTED, contact.id).respond(StatusCode::CREATED))
}

/// Contact API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/contact").service(submit)
}
