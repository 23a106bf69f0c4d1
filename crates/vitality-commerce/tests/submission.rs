use std::sync::Arc;

use vitality_commerce::prelude::*;
use vitality_commerce::submission::{Submission, SubmissionKind};

#[tokio::test]
async fn newsletter_signup_is_acknowledged_and_recorded() {
    let service = SimulatedSubmissionService::new();

    let receipt = service
        .subscribe(NewsletterSignup::new("sarah@example.com"))
        .await
        .unwrap();

    assert_eq!(receipt.kind, SubmissionKind::Newsletter);
    assert_eq!(receipt.title, "Subscribed!");
    assert_eq!(receipt.message, "You've successfully subscribed to our newsletter.");
    assert_eq!(
        service.submissions(),
        vec![Submission::Newsletter(NewsletterSignup::new("sarah@example.com"))]
    );
}

#[tokio::test]
async fn invalid_signup_is_not_recorded() {
    let service = SimulatedSubmissionService::new();

    let err = service
        .subscribe(NewsletterSignup::new("not-an-email"))
        .await
        .unwrap_err();

    assert_eq!(err, CommerceError::InvalidEmail("not-an-email".to_string()));
    assert!(service.submissions().is_empty());
}

#[tokio::test]
async fn contact_message_is_acknowledged() {
    let service = SimulatedSubmissionService::new();
    let message = ContactMessage::new(
        "Mike T.",
        "mike@example.com",
        ContactSubject::Wholesale,
        "Do you stock cafes?",
    );

    let receipt = service.send_message(message.clone()).await.unwrap();

    assert_eq!(receipt.kind, SubmissionKind::Contact);
    assert_eq!(receipt.title, "Message Sent");
    assert_eq!(service.submissions(), vec![Submission::Contact(message)]);
}

#[tokio::test]
async fn contact_message_requires_fields() {
    let service = SimulatedSubmissionService::new();
    let blank = ContactMessage::new("", "mike@example.com", ContactSubject::General, "Hi");

    assert_eq!(
        service.send_message(blank).await.unwrap_err(),
        CommerceError::MissingField("name")
    );
    assert!(service.submissions().is_empty());
}

#[tokio::test]
async fn service_is_usable_as_shared_trait_object() {
    let service: Arc<dyn SubmissionService> = Arc::new(SimulatedSubmissionService::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .subscribe(NewsletterSignup::new(format!("reader{}@example.com", i)))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
