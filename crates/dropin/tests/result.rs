#![allow(clippy::unwrap_used, clippy::expect_used)]

use dropin::{
    CardNonce, DropInPaymentMethodType, DropInResult, GooglePayCardNonce, NonceInspector,
    PayPalAccountNonce, PaymentMethodNonce, VenmoAccountNonce,
};

struct StubInspector {
    type_label: &'static str,
    description: &'static str,
}

impl NonceInspector for StubInspector {
    fn type_label(&self, _nonce: &PaymentMethodNonce) -> String {
        self.type_label.to_owned()
    }

    fn description(&self, _nonce: &PaymentMethodNonce) -> String {
        self.description.to_owned()
    }
}

fn visa_nonce() -> PaymentMethodNonce {
    CardNonce {
        nonce: "fake-valid-visa-nonce".into(),
        is_default: true,
        card_type: "Visa".to_owned(),
        last_two: "11".to_owned(),
        last_four: "1111".to_owned(),
        bin: "411111".to_owned(),
    }
    .into()
}

fn paypal_nonce() -> PaymentMethodNonce {
    PayPalAccountNonce {
        nonce: "fake-paypal-one-time-nonce".into(),
        is_default: false,
        email: "jane.doe@example.com".to_owned(),
        first_name: Some("Jane".to_owned()),
        last_name: None,
    }
    .into()
}

#[test]
/// An inspector reporting "Visa" yields the Visa type and the reported description.
fn test_payment_method_nonce_derives_type_and_description() {
    let inspector = StubInspector {
        type_label: "Visa",
        description: "Visa ending in 1111",
    };
    let nonce = visa_nonce();

    let result = DropInResult::new().payment_method_nonce_with(Some(nonce.clone()), &inspector);

    assert_eq!(
        result.get_payment_method_type(),
        Some(DropInPaymentMethodType::Visa)
    );
    assert_eq!(
        result.get_payment_description(),
        Some("Visa ending in 1111")
    );
    assert_eq!(result.get_payment_method_nonce(), Some(&nonce));
}

#[test]
fn test_payment_method_nonce_with_default_inspector() {
    let result = DropInResult::new().payment_method_nonce(Some(visa_nonce()));
    assert_eq!(
        result.get_payment_method_type(),
        Some(DropInPaymentMethodType::Visa)
    );
    assert_eq!(result.get_payment_description(), Some("ending in ••11"));

    let result = DropInResult::new().payment_method_nonce(Some(paypal_nonce()));
    assert_eq!(
        result.get_payment_method_type(),
        Some(DropInPaymentMethodType::PayPal)
    );
    assert_eq!(
        result.get_payment_description(),
        Some("jane.doe@example.com")
    );
}

#[test]
/// Every kind of nonce populates both the type and the description.
fn test_every_nonce_variant_derives_type_and_description() {
    let venmo: PaymentMethodNonce = VenmoAccountNonce {
        nonce: "fake-venmo-account-nonce".into(),
        is_default: false,
        username: "venmojoe".to_owned(),
    }
    .into();
    let google_pay: PaymentMethodNonce = GooglePayCardNonce {
        nonce: "fake-android-pay-nonce".into(),
        is_default: false,
        card_type: "MasterCard".to_owned(),
        last_two: "44".to_owned(),
        last_four: "4444".to_owned(),
        email: None,
    }
    .into();

    let cases = [
        (visa_nonce(), DropInPaymentMethodType::Visa, "ending in ••11"),
        (
            paypal_nonce(),
            DropInPaymentMethodType::PayPal,
            "jane.doe@example.com",
        ),
        (venmo, DropInPaymentMethodType::PayWithVenmo, "venmojoe"),
        (
            google_pay,
            DropInPaymentMethodType::GooglePay,
            "ending in ••44",
        ),
    ];

    for (nonce, expected_type, expected_description) in cases {
        let result = DropInResult::new().payment_method_nonce(Some(nonce.clone()));

        assert_eq!(result.get_payment_method_type(), Some(expected_type));
        assert_eq!(
            result.get_payment_description(),
            Some(expected_description)
        );
        assert_eq!(result.get_payment_method_nonce(), Some(&nonce));
    }
}

#[test]
fn test_unrecognized_type_label_resolves_to_unknown() {
    let inspector = StubInspector {
        type_label: "Carte Blanche",
        description: "ending in ••00",
    };

    let result = DropInResult::new().payment_method_nonce_with(Some(visa_nonce()), &inspector);

    assert_eq!(
        result.get_payment_method_type(),
        Some(DropInPaymentMethodType::Unknown)
    );
    assert_eq!(result.get_payment_description(), Some("ending in ••00"));
}

#[test]
fn test_null_nonce_leaves_derived_fields_unset() {
    let result = DropInResult::new().payment_method_nonce(None);

    assert_eq!(result.get_payment_method_type(), None);
    assert_eq!(result.get_payment_description(), None);
    assert_eq!(result.get_payment_method_nonce(), None);
}

#[test]
fn test_null_nonce_keeps_previously_derived_fields() {
    let result = DropInResult::new()
        .payment_method_nonce(Some(visa_nonce()))
        .payment_method_nonce(None);

    assert_eq!(result.get_payment_method_nonce(), None);
    assert_eq!(
        result.get_payment_method_type(),
        Some(DropInPaymentMethodType::Visa)
    );
    assert_eq!(result.get_payment_description(), Some("ending in ••11"));
}

#[test]
fn test_device_data_is_independent_of_nonce() {
    let with_nonce = DropInResult::new().payment_method_nonce(Some(visa_nonce()));
    let with_both = with_nonce
        .clone()
        .device_data(Some(r#"{"correlation_id":"abc"}"#.to_owned()));

    assert_eq!(
        with_both.get_payment_method_type(),
        with_nonce.get_payment_method_type()
    );
    assert_eq!(
        with_both.get_payment_method_nonce(),
        with_nonce.get_payment_method_nonce()
    );
    assert_eq!(
        with_both.get_payment_description(),
        with_nonce.get_payment_description()
    );
    assert_eq!(
        with_both.get_device_data(),
        Some(r#"{"correlation_id":"abc"}"#)
    );

    let device_data_first = DropInResult::new()
        .device_data(Some("device".to_owned()))
        .payment_method_nonce(Some(visa_nonce()));
    assert_eq!(device_data_first.get_device_data(), Some("device"));

    let cleared = device_data_first.device_data(None);
    assert_eq!(cleared.get_device_data(), None);
    assert_eq!(
        cleared.get_payment_method_type(),
        Some(DropInPaymentMethodType::Visa)
    );
}

#[test]
fn test_debug_masks_secrets() {
    let result = DropInResult::new()
        .payment_method_nonce(Some(visa_nonce()))
        .device_data(Some("fingerprint-123".to_owned()));

    let debug = format!("{result:?}");
    assert!(!debug.contains("fake-valid-visa-nonce"));
    assert!(!debug.contains("fingerprint-123"));
    assert!(debug.contains("Visa"));
}

#[test]
fn test_json_round_trip() {
    let result = DropInResult::new()
        .payment_method_nonce(Some(paypal_nonce()))
        .device_data(Some("device".to_owned()));

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(serialized["payment_method_type"], "PayPal");
    assert_eq!(serialized["payment_method_nonce"]["type"], "paypal");
    assert_eq!(
        serialized["payment_method_nonce"]["nonce"],
        "fake-paypal-one-time-nonce"
    );

    let deserialized = serde_json::from_value::<DropInResult>(serialized).unwrap();
    assert_eq!(deserialized, result);
}

#[test]
fn test_well_known_keys() {
    assert_eq!(
        dropin::consts::EXTRA_DROP_IN_RESULT,
        "com.braintreepayments.api.dropin.EXTRA_DROP_IN_RESULT"
    );
    assert_eq!(
        dropin::consts::EXTRA_ERROR,
        "com.braintreepayments.api.dropin.EXTRA_ERROR"
    );
    assert_eq!(
        dropin::consts::LAST_USED_PAYMENT_METHOD_TYPE,
        "com.braintreepayments.api.dropin.LAST_USED_PAYMENT_METHOD_TYPE"
    );
}
