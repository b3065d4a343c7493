//!
//! Outcome of a drop-in flow as handed to the calling application.
//!

use std::fmt;

use common_enums::DropInPaymentMethodType;
use dropin_env::logger;
use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::{
    consts::{LAST_USED_PAYMENT_METHOD_TYPE, NULL_ORDINAL},
    errors::{CustomResult, ParcelError, StorageError},
    inspector::{DropInPaymentMethodTypeExt, NonceInspector, PaymentMethodNonceInspector},
    nonce::PaymentMethodNonce,
    parcel::{ParcelReader, ParcelWriter, Parcelable},
    storage::KeyValueStore,
};

/// Contains the result of a drop-in flow, or of fetching the most recently used payment method.
///
/// The payment method type and description are derived from the nonce and are only ever set
/// together with it.
#[derive(Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DropInResult {
    payment_method_type: Option<DropInPaymentMethodType>,
    payment_method_nonce: Option<PaymentMethodNonce>,
    payment_description: Option<String>,
    device_data: Option<String>,
}

impl DropInResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `nonce` and derive type and description with the default inspector.
    pub fn payment_method_nonce(self, nonce: Option<PaymentMethodNonce>) -> Self {
        self.payment_method_nonce_with(nonce, &PaymentMethodNonceInspector)
    }

    /// Store `nonce` and derive type and description with `inspector`.
    ///
    /// A `None` nonce is stored as is and leaves type and description untouched.
    pub fn payment_method_nonce_with<I>(
        mut self,
        nonce: Option<PaymentMethodNonce>,
        inspector: &I,
    ) -> Self
    where
        I: NonceInspector + ?Sized,
    {
        if let Some(nonce) = nonce.as_ref() {
            let payment_method_type =
                DropInPaymentMethodType::for_type(&inspector.type_label(nonce));
            logger::debug!(
                %payment_method_type,
                tag = nonce.tag(),
                "derived payment method type from nonce"
            );
            self.payment_method_type = Some(payment_method_type);
            self.payment_description = Some(inspector.description(nonce));
        }
        self.payment_method_nonce = nonce;

        self
    }

    pub fn device_data(mut self, device_data: Option<String>) -> Self {
        self.device_data = device_data;
        self
    }

    pub(crate) fn set_payment_method_type(
        &mut self,
        payment_method_type: Option<DropInPaymentMethodType>,
    ) {
        self.payment_method_type = payment_method_type;
    }

    /// The previously used payment method type, `None` if there was none.
    ///
    /// For [`DropInPaymentMethodType::GooglePay`] read back from storage the wallet flow has to
    /// run again at checkout and [`Self::get_payment_method_nonce`] returns `None`.
    pub fn get_payment_method_type(&self) -> Option<DropInPaymentMethodType> {
        self.payment_method_type
    }

    pub fn get_payment_method_nonce(&self) -> Option<&PaymentMethodNonce> {
        self.payment_method_nonce.as_ref()
    }

    /// Device data, present when the request asked for it to be collected.
    pub fn get_device_data(&self) -> Option<&str> {
        self.device_data.as_deref()
    }

    pub fn get_payment_description(&self) -> Option<&str> {
        self.payment_description.as_deref()
    }

    /// Persist the canonical name of the type of `nonce` as the last used payment method type.
    pub fn set_last_used_payment_method_type<S>(
        store: &S,
        nonce: &PaymentMethodNonce,
    ) -> CustomResult<(), StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        let payment_method_type = DropInPaymentMethodType::for_nonce(nonce);
        logger::debug!(%payment_method_type, "persisting last used payment method type");
        store.put(
            LAST_USED_PAYMENT_METHOD_TYPE,
            payment_method_type.canonical_name(),
        )
    }

    pub fn get_last_used_payment_method_type<S>(
        store: &S,
    ) -> CustomResult<Option<DropInPaymentMethodType>, StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        Ok(store
            .get(LAST_USED_PAYMENT_METHOD_TYPE)?
            .map(|name| DropInPaymentMethodType::for_type(&name)))
    }

    /// A result carrying only the persisted last used type, without nonce or description.
    pub fn from_last_used_payment_method_type<S>(
        store: &S,
    ) -> CustomResult<Option<Self>, StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        Ok(Self::get_last_used_payment_method_type(store)?.map(|payment_method_type| {
            let mut result = Self::new();
            result.set_payment_method_type(Some(payment_method_type));
            result
        }))
    }
}

impl fmt::Debug for DropInResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropInResult")
            .field("payment_method_type", &self.payment_method_type)
            .field("payment_method_nonce", &self.payment_method_nonce)
            .field("payment_description", &self.payment_description)
            .field(
                "device_data",
                &self.device_data.as_ref().map(|_| "*** device data ***"),
            )
            .finish()
    }
}

impl Parcelable for DropInResult {
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError> {
        dest.write_i32(
            self.payment_method_type
                .map_or(NULL_ORDINAL, |payment_method_type| payment_method_type.ordinal()),
        );
        dest.write_parcelable(self.payment_method_nonce.as_ref())?;
        dest.write_string(self.payment_description.as_deref())?;
        dest.write_string(self.device_data.as_deref())
    }

    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError> {
        let payment_method_type = match source.read_i32()? {
            NULL_ORDINAL => None,
            ordinal => Some(
                DropInPaymentMethodType::from_ordinal(ordinal)
                    .ok_or_else(|| report!(ParcelError::UnknownOrdinal(ordinal)))?,
            ),
        };

        Ok(Self {
            payment_method_type,
            payment_method_nonce: source.read_parcelable()?,
            payment_description: source.read_string()?,
            device_data: source.read_string()?,
        })
    }
}
