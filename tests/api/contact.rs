use reqwest::{Method, StatusCode};

use mdmsite::envelope::Envelope;
use mdmsite::repo::SubmissionStore;

use crate::helpers::{ContactBody, FailingStore, TestApp};

#[tokio::test]
async fn contact_returns_created_for_valid_request() {
    let app = TestApp::spawn().await;

    let res = app
        .contact_submit(&ContactBody::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());

    let envelope: Envelope = res.json().await.expect("Failed to parse envelope");
    assert_eq!(
        envelope,
        Envelope::created("Contact form submitted successfully", 1)
    );
}

#[tokio::test]
async fn contact_persists_the_submission() {
    let app = TestApp::spawn().await;
    let body = ContactBody::valid();

    let res = app
        .contact_submit(&body)
        .await
        .expect("Failed to execute request");
    let envelope: Envelope = res.json().await.unwrap();

    let stored = app
        .store
        .get_contact(envelope.id.unwrap())
        .await
        .unwrap()
        .expect("Submission was not stored");

    assert_eq!(body.first_name.unwrap(), stored.first_name);
    assert_eq!(body.last_name.unwrap(), stored.last_name);
    assert_eq!(body.email.unwrap(), stored.email.as_ref());
    assert_eq!(body.company.unwrap(), stored.company);
    assert_eq!(body.subject.unwrap(), stored.subject);
    assert_eq!(body.message.unwrap(), stored.message);
    assert!(stored.privacy_policy);
}

#[tokio::test]
async fn contact_ids_increase_per_submission() {
    let app = TestApp::spawn().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let res = app.contact_submit(&ContactBody::valid()).await.unwrap();
        let envelope: Envelope = res.json().await.unwrap();
        ids.push(envelope.id.unwrap());
    }

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(app.store.list_contacts().await.unwrap().len(), 3);
}

#[tokio::test]
async fn contact_returns_bad_request_for_invalid_data() {
    let app = TestApp::spawn().await;

    let test_cases: Vec<(&str, ContactBody, Vec<&str>)> = vec![
        (
            "one character first name",
            ContactBody {
                first_name: Some("A".into()),
                ..ContactBody::valid()
            },
            vec!["firstName"],
        ),
        (
            "declined privacy policy",
            ContactBody {
                privacy_policy: Some(false),
                ..ContactBody::valid()
            },
            vec!["privacyPolicy"],
        ),
        (
            "malformed email",
            ContactBody {
                email: Some("bad email address".into()),
                ..ContactBody::valid()
            },
            vec!["email"],
        ),
        (
            "empty subject and short message",
            ContactBody {
                subject: Some("".into()),
                message: Some("too short".into()),
                ..ContactBody::valid()
            },
            vec!["subject", "message"],
        ),
        (
            "missing everything",
            ContactBody::default(),
            vec![
                "firstName",
                "lastName",
                "email",
                "company",
                "subject",
                "message",
                "privacyPolicy",
            ],
        ),
    ];

    for (desc, body, expected_fields) in test_cases {
        let res = app
            .contact_submit(&body)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when payload had {}",
            desc
        );

        let envelope: Envelope = res.json().await.unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Validation error");
        assert_eq!(envelope.id, None);

        let fields: Vec<String> = envelope
            .errors
            .expect("Missing errors list")
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, expected_fields, "Wrong violations for {}", desc);
    }

    assert!(app.store.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_returns_bad_request_for_unreadable_body() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::POST, "api/contact")
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let envelope: Envelope = res.json().await.unwrap();
    assert_eq!(envelope.message, "Validation error");
    assert_eq!(envelope.errors.unwrap()[0].field, "body");
}

#[tokio::test]
async fn contact_reports_wrongly_typed_field_with_the_others() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::POST, "api/contact")
        .json(&serde_json::json!({
            "firstName": 1,
            "lastName": "L",
            "email": "bad",
            "company": "X",
            "subject": "",
            "message": "short",
            "privacyPolicy": false
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let envelope: Envelope = res.json().await.unwrap();
    assert_eq!(envelope.message, "Validation error");

    let errors = envelope.errors.expect("Missing errors list");
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "firstName",
            "lastName",
            "email",
            "company",
            "subject",
            "message",
            "privacyPolicy"
        ]
    );
    assert_eq!(errors[0].message, "Expected string, received number");
}

#[tokio::test]
async fn contact_without_json_content_type_reports_every_field_required() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::POST, "api/contact")
        .body(r#"{"firstName":"Al"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let envelope: Envelope = res.json().await.unwrap();
    let errors = envelope.errors.expect("Missing errors list");
    assert_eq!(errors.len(), 7);
    assert!(errors.iter().all(|e| e.message == "Required"));
}

#[tokio::test]
async fn contact_accepts_two_unit_names() {
    let app = TestApp::spawn().await;

    for name in ["रा", "😀", "e\u{301}"] {
        let body = ContactBody {
            first_name: Some(name.into()),
            last_name: Some(name.into()),
            ..ContactBody::valid()
        };
        let res = app
            .contact_submit(&body)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::CREATED,
            res.status(),
            "API rejected the name {:?}",
            name
        );
    }
}

#[tokio::test]
async fn contact_hides_store_failures() {
    let app = TestApp::spawn_with(FailingStore).await;

    let res = app
        .contact_submit(&ContactBody::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());

    let envelope: Envelope = res.json().await.unwrap();
    assert_eq!(envelope, Envelope::failure("Error processing your request"));
}
