//! The account service contract, exercised against a mocked HTTP endpoint.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockito::Matcher;
use pretty_assertions::assert_eq;

use regtui::{
    action::Action,
    api::{SignupClient, SignupRequest, SubmitOutcome},
    components::{Component, SignUp},
    mode::Mode,
};

fn request() -> SignupRequest {
    SignupRequest {
        name: String::from("A"),
        email: String::from("a@b.com"),
        password: String::from("Abcdef1!"),
    }
}

#[tokio::test]
async fn accepted_signup_posts_json_without_confirmation() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/signup")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "A",
            "email": "a@b.com",
            "password": "Abcdef1!",
        })))
        .with_status(201)
        .create_async()
        .await;

    let client = SignupClient::new(server.url());
    let outcome = client.signup(&request()).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    mock.assert_async().await;
}

#[tokio::test]
async fn response_body_is_ignored_on_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/users/signup")
        .with_status(200)
        .with_body("{\"whatever\": true}")
        .create_async()
        .await;

    let client = SignupClient::new(server.url());
    assert_eq!(client.signup(&request()).await, SubmitOutcome::Created);
}

#[tokio::test]
async fn rejected_signup_reports_the_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/users/signup")
        .with_status(409)
        .with_body("email already registered")
        .create_async()
        .await;

    let client = SignupClient::new(server.url());
    assert_eq!(
        client.signup(&request()).await,
        SubmitOutcome::Rejected { status: 409 }
    );
}

#[tokio::test]
async fn unreachable_endpoint_fails_without_panicking() {
    // Port 1 is never listening.
    let client = SignupClient::new("http://127.0.0.1:1");
    let outcome = client.signup(&request()).await;
    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
}

/// The full submit path: component validates, client talks to the mocked
/// service, the outcome feeds back into the component.
#[tokio::test]
async fn component_and_client_round_trip_through_the_mocked_service() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/users/signup")
        .with_status(201)
        .create_async()
        .await;

    let mut signup = SignUp::new();
    let mut set = |field, value: &str| {
        while signup.focused() != field {
            signup.update(Action::FocusNext).expect("focus");
        }
        for c in value.chars() {
            signup
                .handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .expect("key");
        }
    };
    set(regtui::domain::Field::Name, "A");
    set(regtui::domain::Field::Email, "a@b.com");
    set(regtui::domain::Field::Password, "Abcdef1!");
    set(regtui::domain::Field::ConfirmPassword, "Abcdef1!");

    let followup = signup.update(Action::Submit).expect("update");
    let Some(Action::SendSignup(request)) = followup else {
        panic!("expected SendSignup, got {followup:?}");
    };
    assert!(signup.is_submitting());

    let client = SignupClient::new(server.url());
    let outcome = client.signup(&request).await;

    let followup = signup
        .update(Action::SubmitFinished(outcome))
        .expect("update");
    assert_eq!(followup, Some(Action::Navigate(Mode::Login)));
    assert!(!signup.is_submitting());
    assert_eq!(signup.error_message(), None);
}

#[tokio::test]
async fn failed_round_trip_keeps_the_form_usable() {
    let mut signup = SignUp::new();
    for (field, value) in [
        (regtui::domain::Field::Name, "A"),
        (regtui::domain::Field::Email, "a@b.com"),
        (regtui::domain::Field::Password, "Abcdef1!"),
        (regtui::domain::Field::ConfirmPassword, "Abcdef1!"),
    ] {
        while signup.focused() != field {
            signup.update(Action::FocusNext).expect("focus");
        }
        for c in value.chars() {
            signup
                .handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .expect("key");
        }
    }

    let followup = signup.update(Action::Submit).expect("update");
    let Some(Action::SendSignup(request)) = followup else {
        panic!("expected SendSignup, got {followup:?}");
    };

    let client = SignupClient::new("http://127.0.0.1:1");
    let outcome = client.signup(&request).await;

    let followup = signup
        .update(Action::SubmitFinished(outcome))
        .expect("update");
    assert_eq!(followup, None, "no navigation on failure");
    assert_eq!(signup.error_message(), Some("An error occurred."));

    // The values survived; the user can resubmit.
    assert_eq!(signup.form().value(regtui::domain::Field::Email), "a@b.com");
    assert!(!signup.is_submitting());
}
