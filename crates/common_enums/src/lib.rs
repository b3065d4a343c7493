#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Enums shared by the drop-in result and the collaborators that produce it.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod enums;

pub use enums::{DropInPaymentMethodType, PaymentMethodCategory};
