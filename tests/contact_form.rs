use std::time::Duration;

use folio_contact::{ContactClient, ContactForm, ContactSubmission, FormStatus};
use folio_notification::MockMailer;

mod helpers;

fn client_for(addr: std::net::SocketAddr) -> ContactClient {
    ContactClient::new(
        format!("http://{addr}{}", helpers::SEND_EMAIL_PATH),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ann".to_owned(),
        email: "ann@x.com".to_owned(),
        message: "Hi\nthere".to_owned(),
    }
}

#[tokio::test]
async fn test_form_reports_success() {
    let mailer = MockMailer::succeeding("250 OK");
    let addr = helpers::spawn_app(&mailer).await;

    let status = filled_form().submit(&client_for(addr)).await;

    assert_eq!(
        status,
        FormStatus::Sent {
            provider_response: "250 OK".to_owned()
        }
    );
    assert!(status.is_sent());
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_form_reports_server_rejection() {
    let mailer = MockMailer::succeeding("250 OK");
    let addr = helpers::spawn_app(&mailer).await;

    // Bypass the form's own blank check to exercise the server's 400
    let status = client_for(addr)
        .submit(&ContactSubmission::new("", "a@x.com", "Hi"))
        .await;

    assert_eq!(
        status,
        FormStatus::Failed {
            status: 400,
            message: "Missing required fields: name, email, or message".to_owned()
        }
    );
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_form_reports_provider_failure() {
    let mailer = MockMailer::failing("auth error");
    let addr = helpers::spawn_app(&mailer).await;

    let status = filled_form().submit(&client_for(addr)).await;

    assert_eq!(
        status,
        FormStatus::Failed {
            status: 500,
            message: "Error sending email: auth error".to_owned()
        }
    );
}

#[tokio::test]
async fn test_form_reports_unreachable_endpoint() {
    // Reserve a port, then release it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let status = filled_form().submit(&client_for(addr)).await;

    assert!(matches!(status, FormStatus::Unreachable { .. }));
    assert!(status.feedback().starts_with("Could not submit"));
}

#[tokio::test]
async fn test_blank_form_is_not_submitted() {
    let mailer = MockMailer::succeeding("250 OK");
    let addr = helpers::spawn_app(&mailer).await;
    let form = ContactForm {
        message: "   ".to_owned(),
        ..filled_form()
    };

    let status = form.submit(&client_for(addr)).await;

    assert_eq!(
        status,
        FormStatus::Incomplete {
            missing: vec!["message"]
        }
    );
    assert!(mailer.sent().is_empty());
}
