//! Address form behavior: strict save validation, optional title.

use sofra_integration_tests::fresh_session;
use sofra_widget::WidgetError;
use sofra_widget::view::{AlertLevel, AlertRegion};

#[test]
fn test_save_with_empty_title_succeeds() {
    let widget = fresh_session();

    let saved = widget
        .save_address("", "Bağdat Cad.", "İstanbul")
        .expect("title is optional");
    assert_eq!(saved.summary, "Saved: Address – Bağdat Cad. İstanbul");
    assert_eq!(saved.alert.level, AlertLevel::Success);
    assert_eq!(saved.alert.region, AlertRegion::AddressForm);

    let stored = widget.state().address_book().load().expect("persisted");
    assert_eq!(stored.title, "");
    assert_eq!(stored.street, "Bağdat Cad.");
    assert_eq!(stored.city, "İstanbul");
}

#[test]
fn test_missing_fields_are_refused_with_form_alert() {
    let widget = fresh_session();

    for (street, city) in [("", "İstanbul"), ("Bağdat Cad.", ""), ("  ", "  ")] {
        let err = widget
            .save_address("Home", street, city)
            .expect_err("street and city are required");
        assert!(matches!(err, WidgetError::Address(_)));
        assert_eq!(err.to_alert().region, AlertRegion::AddressForm);
    }

    assert!(widget.state().address_book().load().is_none());
    assert_eq!(widget.address_info(), "Saved: (none)");
}

#[test]
fn test_failed_save_leaves_previous_address() {
    let widget = fresh_session();

    widget
        .save_address("Home", "Bağdat Cad.", "İstanbul")
        .expect("first save");
    widget
        .save_address("Work", "", "Ankara")
        .expect_err("refused");

    assert_eq!(widget.address_info(), "Saved: Home – Bağdat Cad. İstanbul");
}

#[test]
fn test_address_survives_across_session_stores() {
    // The address lives in durable storage: clearing the cart's session
    // storage entry (checkout) must not touch it.
    let widget = fresh_session();
    widget
        .save_address("Home", "Bağdat Cad.", "İstanbul")
        .expect("save");

    widget.state().cart_store().clear();
    assert!(widget.state().address_book().load().is_some());
}
