//! Well-known keys

/// The key used to return a [`crate::DropInResult`] to the host application.
pub const EXTRA_DROP_IN_RESULT: &str = "com.braintreepayments.api.dropin.EXTRA_DROP_IN_RESULT";

/// The key under which an error is returned when the flow did not complete.
pub const EXTRA_ERROR: &str = "com.braintreepayments.api.dropin.EXTRA_ERROR";

/// Preference key holding the canonical name of the last used payment method type.
pub const LAST_USED_PAYMENT_METHOD_TYPE: &str =
    "com.braintreepayments.api.dropin.LAST_USED_PAYMENT_METHOD_TYPE";

/// Length prefix standing in for an absent string or parcelable.
pub(crate) const NULL_MARKER: i32 = -1;

/// Presence marker written ahead of a non-null parcelable.
pub(crate) const PRESENT_MARKER: i32 = 1;

/// Ordinal written for an absent payment method type.
pub(crate) const NULL_ORDINAL: i32 = -1;

/// Strings and parcel payloads are padded to this many bytes.
pub(crate) const PARCEL_ALIGNMENT: usize = 4;
