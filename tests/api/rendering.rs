//! tests/api/rendering.rs
use crate::helpers::{setup, unreachable_client};
use signup::component::{ConfirmationView, View, SUBMITTING_LABEL, SUBMIT_LABEL};
use wiremock::{matchers::any, Mock, ResponseTemplate};

#[tokio::test]
async fn submit_button_is_disabled_only_while_the_request_is_in_flight() {
    // Arrange
    let mut test = setup().await;
    test.client = unreachable_client();
    test.component.input("ursula_le_guin@gmail.com");

    // Act
    let signup = test.component.begin_submit().expect("Form should be valid");
    let in_flight = test.component.render();
    let outcome = test.client.send(&signup).await;
    test.component.finish_submit(outcome);
    let after = test.component.render();

    // Assert
    let button = in_flight.submit_button().unwrap();
    assert!(button.disabled);
    assert_eq!(button.label, SUBMITTING_LABEL);

    let button = after.submit_button().unwrap();
    assert!(!button.disabled);
    assert_eq!(button.label, SUBMIT_LABEL);
}

#[tokio::test]
async fn confirmation_panel_replaces_the_form_for_good() {
    // Arrange
    let mut test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&test.webhook_server)
        .await;

    // Act
    test.type_and_submit("ursula_le_guin@gmail.com").await;

    // Assert
    for _ in 0..3 {
        let view = test.component.render();
        assert_eq!(view, View::Confirmation(ConfirmationView::default()));
        assert!(view.submit_button().is_none());
        assert!(!view.to_html().contains("<form"));
    }
}

#[tokio::test]
async fn inline_error_is_rendered_next_to_the_field() {
    // Arrange
    let mut test = setup().await;

    // Act
    test.type_and_submit("user@yahoo.com").await;

    // Assert
    let view = test.component.render();
    let View::Form(form) = &view else {
        panic!("Expected the form to still be shown");
    };
    assert_eq!(form.value, "user@yahoo.com");
    assert_eq!(
        form.error.as_deref(),
        Some("Only @gmail.com addresses are allowed.")
    );
    assert!(view
        .to_string()
        .contains("  ! Only @gmail.com addresses are allowed."));
}
