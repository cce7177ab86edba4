//! Consent banner decisions and payment-method memory.

use sofra_core::MenuItemId;
use sofra_integration_tests::fresh_session;
use sofra_widget::checkout::{PaymentMethod, PaymentRequest};
use sofra_widget::consent::Consent;

#[test]
fn test_no_prefill_before_any_decision() {
    let mut widget = fresh_session();
    widget.add_item(MenuItemId::new(1));

    assert_eq!(widget.state().consent().decision(), None);
    let screen = widget.begin_checkout().expect("begin");
    assert_eq!(screen.method_prefill, None);
}

#[test]
fn test_accept_then_completed_order_is_remembered() {
    let mut widget = fresh_session();
    widget.accept_consent(PaymentMethod::Card);
    widget
        .save_address("Home", "Bağdat Cad.", "İstanbul")
        .expect("save address");

    widget.add_item(MenuItemId::new(2));
    widget.begin_checkout().expect("begin");
    widget
        .confirm_payment(&PaymentRequest {
            method: PaymentMethod::Door,
            address_line: String::new(),
            card: None,
        })
        .expect("confirm at the door");

    // The next checkout preselects the door method.
    widget.add_item(MenuItemId::new(2));
    let screen = widget.begin_checkout().expect("next order");
    assert_eq!(screen.method_prefill, Some(PaymentMethod::Door));
}

#[test]
fn test_reject_clears_and_blocks_memory() {
    let mut widget = fresh_session();
    widget.accept_consent(PaymentMethod::Card);
    widget.reject_consent();

    assert_eq!(widget.state().consent().decision(), Some(Consent::Rejected));

    // Selecting a method after rejection records nothing.
    widget.select_payment_method(PaymentMethod::Door);
    widget.add_item(MenuItemId::new(1));
    let screen = widget.begin_checkout().expect("begin");
    assert_eq!(screen.method_prefill, None);
}

#[test]
fn test_completion_without_consent_records_nothing() {
    let mut widget = fresh_session();
    widget
        .save_address("Home", "Bağdat Cad.", "İstanbul")
        .expect("save address");

    widget.add_item(MenuItemId::new(1));
    widget.begin_checkout().expect("begin");
    widget
        .confirm_payment(&PaymentRequest {
            method: PaymentMethod::Card,
            address_line: "Bağdat Cad. İstanbul".to_owned(),
            card: Some(sofra_widget::checkout::CardDetails {
                holder_name: "Ayşe Yılmaz".to_owned(),
                card_number: "4111111111111111".to_owned(),
                expiry_month: "12".to_owned(),
                expiry_year: "2099".to_owned(),
                cvv: "123".to_owned(),
            }),
        })
        .expect("confirm by card");

    assert_eq!(widget.state().consent().recall_payment_method(), None);
}
