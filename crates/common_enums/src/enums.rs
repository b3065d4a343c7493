use strum::IntoEnumIterator;

/// Payment method types that a drop-in flow can return.
///
/// The declaration order is persisted as an ordinal in encoded results. Do not reorder.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
pub enum DropInPaymentMethodType {
    #[serde(rename = "American Express")]
    #[strum(serialize = "American Express")]
    Amex,
    #[serde(rename = "Google Pay")]
    #[strum(serialize = "Google Pay")]
    GooglePay,
    #[serde(rename = "Diners")]
    #[strum(serialize = "Diners")]
    DinersClub,
    Discover,
    #[serde(rename = "JCB")]
    #[strum(serialize = "JCB")]
    Jcb,
    Maestro,
    #[serde(rename = "MasterCard")]
    #[strum(serialize = "MasterCard")]
    Mastercard,
    PayPal,
    Visa,
    #[serde(rename = "Venmo")]
    #[strum(serialize = "Venmo")]
    PayWithVenmo,
    UnionPay,
    Hiper,
    Hipercard,
    Unknown,
}

/// Coarse grouping of [`DropInPaymentMethodType`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodCategory {
    Card,
    Wallet,
    AlternativePayment,
    Unknown,
}

impl DropInPaymentMethodType {
    /// Resolves a type label reported for a nonce. Labels without a matching canonical
    /// name resolve to [`Self::Unknown`].
    pub fn for_type(label: &str) -> Self {
        label.parse().unwrap_or(Self::Unknown)
    }

    /// Stable name used when the type is persisted.
    pub fn canonical_name(&self) -> &'static str {
        self.into()
    }

    /// Position of the variant in declaration order.
    pub fn ordinal(&self) -> i32 {
        match self {
            Self::Amex => 0,
            Self::GooglePay => 1,
            Self::DinersClub => 2,
            Self::Discover => 3,
            Self::Jcb => 4,
            Self::Maestro => 5,
            Self::Mastercard => 6,
            Self::PayPal => 7,
            Self::Visa => 8,
            Self::PayWithVenmo => 9,
            Self::UnionPay => 10,
            Self::Hiper => 11,
            Self::Hipercard => 12,
            Self::Unknown => 13,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        let position = usize::try_from(ordinal).ok()?;
        Self::iter().nth(position)
    }

    pub fn category(&self) -> PaymentMethodCategory {
        match self {
            Self::Amex
            | Self::DinersClub
            | Self::Discover
            | Self::Jcb
            | Self::Maestro
            | Self::Mastercard
            | Self::Visa
            | Self::UnionPay
            | Self::Hiper
            | Self::Hipercard => PaymentMethodCategory::Card,
            Self::GooglePay => PaymentMethodCategory::Wallet,
            Self::PayPal | Self::PayWithVenmo => PaymentMethodCategory::AlternativePayment,
            Self::Unknown => PaymentMethodCategory::Unknown,
        }
    }
}
