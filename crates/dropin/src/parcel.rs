//!
//! Flat, ordered field stream used to hand values across process boundaries.
//!
//! Every primitive is little endian and the stream stays 4-byte aligned:
//!
//! - `i32`: four bytes.
//! - `bool`: an `i32` holding `0` or `1`.
//! - nullable string: `i32` byte length (`-1` for null), UTF-8 bytes, zero padding.
//! - nullable parcelable: `i32` marker (`-1` for null, `1` otherwise), then the value itself.
//!

use bytes::{Buf, BufMut, Bytes, BytesMut};
use dropin_env::logger;
use error_stack::{report, ResultExt};

use crate::{
    consts::{NULL_MARKER, PARCEL_ALIGNMENT, PRESENT_MARKER},
    errors::{CustomResult, ParcelError},
};

/// A value that can be flattened into a parcel and rebuilt from one.
///
/// Fields must be read back in exactly the order they were written.
pub trait Parcelable: Sized {
    /// Write the fields of `self` into `dest`.
    fn write_to_parcel(&self, dest: &mut ParcelWriter) -> CustomResult<(), ParcelError>;

    /// Rebuild a value from the fields at the current position of `source`.
    fn create_from_parcel(source: &mut ParcelReader) -> CustomResult<Self, ParcelError>;

    /// Bitmask of special objects contained in the parcel. Always `0` here.
    fn describe_contents(&self) -> i32 {
        0
    }

    /// Flatten `self` into a fresh buffer.
    fn to_bytes(&self) -> CustomResult<Bytes, ParcelError> {
        let mut dest = ParcelWriter::new();
        self.write_to_parcel(&mut dest)?;
        Ok(dest.into_bytes())
    }

    /// Rebuild a value from a buffer that holds nothing else.
    fn from_bytes(bytes: impl Into<Bytes>) -> CustomResult<Self, ParcelError> {
        let mut source = ParcelReader::new(bytes);
        Self::create_from_parcel(&mut source)
            .and_then(|value| match source.remaining() {
                0 => Ok(value),
                left => Err(report!(ParcelError::TrailingBytes(left))),
            })
            .inspect_err(|error| {
                logger::warn!(?error, "failed to unmarshall parcel");
            })
    }
}

fn padding_for(len: usize) -> usize {
    (PARCEL_ALIGNMENT - len % PARCEL_ALIGNMENT) % PARCEL_ALIGNMENT
}

/// Appends fields to a growable buffer.
#[derive(Debug, Default)]
pub struct ParcelWriter {
    buf: BytesMut,
}

impl ParcelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_i32(i32::from(value));
    }

    pub fn write_string(&mut self, value: Option<&str>) -> CustomResult<(), ParcelError> {
        let Some(value) = value else {
            self.write_i32(NULL_MARKER);
            return Ok(());
        };

        let len = i32::try_from(value.len())
            .change_context(ParcelError::TooLarge(value.len()))?;
        self.write_i32(len);
        self.buf.put_slice(value.as_bytes());
        self.buf.put_bytes(0, padding_for(value.len()));
        Ok(())
    }

    pub fn write_parcelable<P: Parcelable>(
        &mut self,
        value: Option<&P>,
    ) -> CustomResult<(), ParcelError> {
        match value {
            Some(value) => {
                self.write_i32(PRESENT_MARKER);
                value.write_to_parcel(self)
            }
            None => {
                self.write_i32(NULL_MARKER);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Consumes fields from the front of a buffer.
#[derive(Debug)]
pub struct ParcelReader {
    buf: Bytes,
}

impl ParcelReader {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { buf: bytes.into() }
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, expected: usize) -> CustomResult<(), ParcelError> {
        if self.buf.remaining() < expected {
            return Err(report!(ParcelError::UnexpectedEof {
                expected: expected - self.buf.remaining(),
            }));
        }
        Ok(())
    }

    pub fn read_i32(&mut self) -> CustomResult<i32, ParcelError> {
        self.ensure(std::mem::size_of::<i32>())?;
        Ok(self.buf.get_i32_le())
    }

    pub fn read_bool(&mut self) -> CustomResult<bool, ParcelError> {
        Ok(self.read_i32()? != 0)
    }

    pub fn read_string(&mut self) -> CustomResult<Option<String>, ParcelError> {
        let len = match self.read_i32()? {
            NULL_MARKER => return Ok(None),
            len => usize::try_from(len).change_context(ParcelError::InvalidLength(len))?,
        };

        let padding = padding_for(len);
        self.ensure(len + padding)?;
        let payload = self.buf.split_to(len);
        self.buf.advance(padding);

        String::from_utf8(payload.to_vec())
            .map(Some)
            .change_context(ParcelError::InvalidUtf8)
    }

    /// Read a string that the writer never leaves null.
    pub fn read_required_string(
        &mut self,
        field_name: &'static str,
    ) -> CustomResult<String, ParcelError> {
        self.read_string()?
            .ok_or_else(|| report!(ParcelError::MissingField { field_name }))
    }

    pub fn read_parcelable<P: Parcelable>(&mut self) -> CustomResult<Option<P>, ParcelError> {
        match self.read_i32()? {
            NULL_MARKER => Ok(None),
            PRESENT_MARKER => P::create_from_parcel(self).map(Some),
            marker => Err(report!(ParcelError::InvalidMarker(marker))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn strings_are_padded_to_four_bytes() {
        let mut writer = ParcelWriter::new();
        writer.write_string(Some("Visa")).unwrap();
        assert_eq!(writer.len(), 8);

        writer.write_string(Some("Venmo")).unwrap();
        assert_eq!(writer.len(), 8 + 4 + 8);

        writer.write_string(None).unwrap();
        assert_eq!(writer.len(), 24);

        let mut reader = ParcelReader::new(writer.into_bytes());
        assert_eq!(reader.read_string().unwrap().as_deref(), Some("Visa"));
        assert_eq!(reader.read_string().unwrap().as_deref(), Some("Venmo"));
        assert_eq!(reader.read_string().unwrap(), None);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn empty_string_is_not_null() {
        let mut writer = ParcelWriter::new();
        writer.write_string(Some("")).unwrap();

        let bytes = writer.into_bytes();
        assert_eq!(bytes.as_ref(), &[0, 0, 0, 0]);

        let mut reader = ParcelReader::new(bytes);
        assert_eq!(reader.read_string().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn null_string_is_minus_one() {
        let mut writer = ParcelWriter::new();
        writer.write_string(None).unwrap();
        assert_eq!(writer.into_bytes().as_ref(), &(-1i32).to_le_bytes());
    }

    #[test]
    fn truncated_string_is_eof() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(10);
        writer.write_i32(0);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let error = reader.read_string().unwrap_err();
        assert!(matches!(
            error.current_context(),
            ParcelError::UnexpectedEof { expected: 8 }
        ));
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(-7);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let error = reader.read_string().unwrap_err();
        assert!(matches!(
            error.current_context(),
            ParcelError::InvalidLength(-7)
        ));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut writer = ParcelWriter::new();
        writer.write_i32(2);
        writer.buf.put_slice(&[0xc3, 0x28, 0, 0]);

        let mut reader = ParcelReader::new(writer.into_bytes());
        let error = reader.read_string().unwrap_err();
        assert!(matches!(error.current_context(), ParcelError::InvalidUtf8));
    }
}
