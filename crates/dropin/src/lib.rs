#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Result of a drop-in checkout flow and the pieces it is built from.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod consts;
pub mod errors;
pub mod inspector;
pub mod nonce;
pub mod parcel;
pub mod result;
pub mod storage;

pub use common_enums::{DropInPaymentMethodType, PaymentMethodCategory};

pub use self::{
    inspector::{DropInPaymentMethodTypeExt, NonceInspector, PaymentMethodNonceInspector},
    nonce::{
        CardNonce, GooglePayCardNonce, NonceToken, PayPalAccountNonce, PaymentMethodNonce,
        VenmoAccountNonce,
    },
    parcel::{Parcelable, ParcelReader, ParcelWriter},
    result::DropInResult,
    storage::{FileStore, InMemoryStore, KeyValueStore},
};
