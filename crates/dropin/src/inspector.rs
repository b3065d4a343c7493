//!
//! Derives display information from a nonce.
//!

use common_enums::DropInPaymentMethodType;

use crate::nonce::PaymentMethodNonce;

/// Reports the type label and human readable description of a nonce.
pub trait NonceInspector {
    /// Label resolved through [`DropInPaymentMethodType::for_type`].
    fn type_label(&self, nonce: &PaymentMethodNonce) -> String;

    fn description(&self, nonce: &PaymentMethodNonce) -> String;
}

/// Stateless inspector used unless a caller supplies its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaymentMethodNonceInspector;

impl NonceInspector for PaymentMethodNonceInspector {
    fn type_label(&self, nonce: &PaymentMethodNonce) -> String {
        match nonce {
            PaymentMethodNonce::Card(card) => card.card_type.clone(),
            PaymentMethodNonce::PayPal(_) => DropInPaymentMethodType::PayPal.to_string(),
            PaymentMethodNonce::Venmo(_) => DropInPaymentMethodType::PayWithVenmo.to_string(),
            PaymentMethodNonce::GooglePay(_) => DropInPaymentMethodType::GooglePay.to_string(),
        }
    }

    fn description(&self, nonce: &PaymentMethodNonce) -> String {
        match nonce {
            PaymentMethodNonce::Card(card) => format!("ending in ••{}", card.last_two),
            PaymentMethodNonce::PayPal(paypal) => paypal.email.clone(),
            PaymentMethodNonce::Venmo(venmo) => venmo.username.clone(),
            PaymentMethodNonce::GooglePay(google_pay) => {
                format!("ending in ••{}", google_pay.last_two)
            }
        }
    }
}

/// Resolving a [`DropInPaymentMethodType`] straight from a nonce.
pub trait DropInPaymentMethodTypeExt {
    fn for_nonce(nonce: &PaymentMethodNonce) -> Self;
}

impl DropInPaymentMethodTypeExt for DropInPaymentMethodType {
    fn for_nonce(nonce: &PaymentMethodNonce) -> Self {
        Self::for_type(&PaymentMethodNonceInspector.type_label(nonce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonce::{GooglePayCardNonce, PayPalAccountNonce, VenmoAccountNonce};

    #[test]
    fn wallet_labels_resolve_to_their_types() {
        let paypal = PaymentMethodNonce::PayPal(PayPalAccountNonce {
            nonce: "fake-paypal-nonce".into(),
            is_default: false,
            email: "jane.doe@example.com".to_owned(),
            first_name: None,
            last_name: None,
        });
        let venmo = PaymentMethodNonce::Venmo(VenmoAccountNonce {
            nonce: "fake-venmo-nonce".into(),
            is_default: true,
            username: "venmojoe".to_owned(),
        });
        let google_pay = PaymentMethodNonce::GooglePay(GooglePayCardNonce {
            nonce: "fake-google-pay-nonce".into(),
            is_default: false,
            card_type: "Visa".to_owned(),
            last_two: "11".to_owned(),
            last_four: "1111".to_owned(),
            email: None,
        });

        assert_eq!(
            DropInPaymentMethodType::for_nonce(&paypal),
            DropInPaymentMethodType::PayPal
        );
        assert_eq!(
            DropInPaymentMethodType::for_nonce(&venmo),
            DropInPaymentMethodType::PayWithVenmo
        );
        assert_eq!(
            DropInPaymentMethodType::for_nonce(&google_pay),
            DropInPaymentMethodType::GooglePay
        );
        assert_eq!(
            PaymentMethodNonceInspector.description(&google_pay),
            "ending in ••11"
        );
        assert_eq!(PaymentMethodNonceInspector.description(&venmo), "venmojoe");
    }
}
