//!
//! Tokenized payment methods returned by a drop-in flow.
//!

use std::fmt;

use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{CustomResult, ParcelError},
    parcel::{ParcelReader, ParcelWriter, Parcelable},
};

/// Opaque single-use token. Never printed by `Debug`.
#[derive(Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NonceToken(String);

impl NonceToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn peek(&self) -> &str {
        &self.0
    }
}

impl From<String> for NonceToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for NonceToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl fmt::Debug for NonceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** nonce ***")
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardNonce {
    pub nonce: NonceToken,
    pub is_default: bool,
    /// Brand reported by the gateway, e.g. `Visa`.
    pub card_type: String,
    pub last_two: String,
    pub last_four: String,
    pub bin: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PayPalAccountNonce {
    pub nonce: NonceToken,
    pub is_default: bool,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VenmoAccountNonce {
    pub nonce: NonceToken,
    pub is_default: bool,
    pub username: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GooglePayCardNonce {
    pub nonce: NonceToken,
    pub is_default: bool,
    /// Brand of the underlying card.
    pub card_type: String,
    pub last_two: String,
    pub last_four: String,
    pub email: Option<String>,
}

/// A tokenized payment method of any supported kind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethodNonce {
    Card(CardNonce),
    #[serde(rename = "paypal")]
    PayPal(PayPalAccountNonce),
    Venmo(VenmoAccountNonce),
    GooglePay(GooglePayCardNonce),
}

impl PaymentMethodNonce {
    const CARD_TAG: &'static str = "card";
    const PAYPAL_TAG: &'static str = "paypal";
    const VENMO_TAG: &'static str = "venmo";
    const GOOGLE_PAY_TAG: &'static str = "google_pay";

    pub fn nonce(&self) -> &NonceToken {
        match self {
            Self::Card(card) => &card.nonce,
            Self::PayPal(paypal) => &paypal.nonce,
            Self::Venmo(venmo) => &venmo.nonce,
            Self::GooglePay(google_pay) => &google_pay.nonce,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            Self::Card(card) => card.is_default,
            Self::PayPal(paypal) => paypal.is_default,
            Self::Venmo(venmo) => venmo.is_default,
            Self::GooglePay(google_pay) => google_pay.is_default,
        }
    }

    /// Discriminator written ahead of the variant's fields in a parcel.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Card(_) => Self::CARD_TAG,
            Self::PayPal(_) => Self::PAYPAL_TAG,
            Self::Venmo(_) => Self::VENMO_TAG,
            Self::GooglePay(_) => Self::GOOGLE_PAY_TAG,
        }
    }
}

impl From<CardNonce> for PaymentMethodNonce {
    fn from(nonce: CardNonce) -> Self {
        Self::Card(nonce)
    }
}

impl From<PayPalAccountNonce> for PaymentMethodNonce {
    fn from(nonce: PayPalAccountNonce) -> Self {
        Self::PayPal(nonce)
    }
}

impl From<VenmoAccountNonce> for PaymentMethodNonce {
    fn from(nonce: VenmoAccountNonce) -> Self {
        Self::Venmo(nonce)
    }
}

impl From<GooglePayCardNonce> for PaymentMethodNonce {
    fn from(nonce: GooglePayCardNonce) -> Self {
        Self::GooglePay(nonce)
    }
}

impl Parcelable for PaymentMethodNonce {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_string(Some(self.tag()))?;
        match self {
            Self::Card(card) => card.write_to_parcel(dest),
            Self::PayPal(paypal) => paypal.write_to_parcel(dest),
            Self::Venmo(venmo) => venmo.write_to_parcel(dest),
            Self::GooglePay(google_pay) => google_pay.write_to_parcel(dest),
        }
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        let tag = source.read_required_string("tag")?;
        match tag.as_str() {
            Self::CARD_TAG => CardNonce::create_from_parcel(source).map(Self::Card),
            Self::PAYPAL_TAG => PayPalAccountNonce::create_from_parcel(source).map(Self::PayPal),
            Self::VENMO_TAG => VenmoAccountNonce::create_from_parcel(source).map(Self::Venmo),
            Self::GOOGLE_PAY_TAG => {
                GooglePayCardNonce::create_from_parcel(source).map(Self::GooglePay)
            }
            _ => Err(report!(ParcelError::UnknownTag(tag))),
        }
    }
}

impl Parcelable for CardNonce {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_string(Some(self.nonce.peek()))?;
        dest.write_bool(self.is_default);
        dest.write_string(Some(&self.card_type))?;
        dest.write_string(Some(&self.last_two))?;
        dest.write_string(Some(&self.last_four))?;
        dest.write_string(Some(&self.bin))
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        Ok(Self {
            nonce: source.read_required_string("nonce")?.into(),
            is_default: source.read_bool()?,
            card_type: source.read_required_string("card_type")?,
            last_two: source.read_required_string("last_two")?,
            last_four: source.read_required_string("last_four")?,
            bin: source.read_required_string("bin")?,
        })
    }
}

impl Parcelable for PayPalAccountNonce {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_string(Some(self.nonce.peek()))?;
        dest.write_bool(self.is_default);
        dest.write_string(Some(&self.email))?;
        dest.write_string(self.first_name.as_deref())?;
        dest.write_string(self.last_name.as_deref())
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        Ok(Self {
            nonce: source.read_required_string("nonce")?.into(),
            is_default: source.read_bool()?,
            email: source.read_required_string("email")?,
            first_name: source.read_string()?,
            last_name: source.read_string()?,
        })
    }
}

impl Parcelable for VenmoAccountNonce {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_string(Some(self.nonce.peek()))?;
        dest.write_bool(self.is_default);
        dest.write_string(Some(&self.username))
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        Ok(Self {
            nonce: source.read_required_string("nonce")?.into(),
            is_default: source.read_bool()?,
            username: source.read_required_string("username")?,
        })
    }
}

impl Parcelable for GooglePayCardNonce {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_string(Some(self.nonce.peek()))?;
        dest.write_bool(self.is_default);
        dest.write_string(Some(&self.card_type))?;
        dest.write_string(Some(&self.last_two))?;
        dest.write_string(Some(&self.last_four))?;
        dest.write_string(self.email.as_deref())
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        Ok(Self {
            nonce: source.read_required_string("nonce")?.into(),
            is_default: source.read_bool()?,
            card_type: source.read_required_string("card_type")?,
            last_two: source.read_required_string("last_two")?,
            last_four: source.read_required_string("last_four")?,
            email: source.read_string()?,
        })
    }
}
