//! Byte codecs for FINS memory values.
//!
//! FINS returns multi-word values low-word-first. A 32-bit value's two
//! 16-bit words are swapped before a big-endian decode; a 64-bit value's
//! four 16-bit words are reversed as a whole (`[w0 w1 w2 w3] -> [w3 w2 w1
//! w0]`); 16-bit values decode directly as big-endian. An odd-length buffer
//! is left-padded with one zero byte before decoding.

use crate::error::{FinsError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tag identifying how a chunk of memory-read bytes should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE-754 single precision float.
    Float,
    /// IEEE-754 double precision float.
    Double,
    /// Binary-coded decimal (one decimal digit per nibble).
    Bcd,
}

impl DataType {
    /// Number of 16-bit PLC words one value of this type occupies.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::codec::DataType;
    ///
    /// assert_eq!(DataType::Int16.words_per_value(), 1);
    /// assert_eq!(DataType::Float.words_per_value(), 2);
    /// assert_eq!(DataType::Double.words_per_value(), 4);
    /// ```
    pub fn words_per_value(self) -> u16 {
        match self {
            DataType::Int16 | DataType::UInt16 | DataType::Bcd => 1,
            DataType::Int32 | DataType::UInt32 | DataType::Float => 2,
            DataType::Int64 | DataType::UInt64 | DataType::Double => 4,
        }
    }

    /// Byte width of one value of this type (`words_per_value * 2`).
    pub fn byte_width(self) -> usize {
        self.words_per_value() as usize * 2
    }

    /// Decodes a byte buffer according to this tag, returning a
    /// [`ReadValue`] carrying the typed sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::codec::{DataType, ReadValue};
    ///
    /// let value = DataType::Int16.decode(&[0x00, 0x14]).unwrap();
    /// assert_eq!(value, ReadValue::Int16(vec![20]));
    /// ```
    pub fn decode(self, data: &[u8]) -> Result<ReadValue> {
        Ok(match self {
            DataType::Int16 => ReadValue::Int16(to_int16(data)),
            DataType::UInt16 => ReadValue::UInt16(to_uint16(data)),
            DataType::Int32 => ReadValue::Int32(to_int32(data)),
            DataType::UInt32 => ReadValue::UInt32(to_uint32(data)),
            DataType::Int64 => ReadValue::Int64(to_int64(data)),
            DataType::UInt64 => ReadValue::UInt64(to_uint64(data)),
            DataType::Float => ReadValue::Float(to_float(data)),
            DataType::Double => ReadValue::Double(to_double(data)),
            DataType::Bcd => ReadValue::Bcd(to_bcd(data)?),
        })
    }

    /// An empty [`ReadValue`] of this type, used to populate error envelopes
    /// when no data was decoded at all.
    pub fn empty_value(self) -> ReadValue {
        match self {
            DataType::Int16 => ReadValue::Int16(Vec::new()),
            DataType::UInt16 => ReadValue::UInt16(Vec::new()),
            DataType::Int32 => ReadValue::Int32(Vec::new()),
            DataType::UInt32 => ReadValue::UInt32(Vec::new()),
            DataType::Int64 => ReadValue::Int64(Vec::new()),
            DataType::UInt64 => ReadValue::UInt64(Vec::new()),
            DataType::Float => ReadValue::Float(Vec::new()),
            DataType::Double => ReadValue::Double(Vec::new()),
            DataType::Bcd => ReadValue::Bcd(Vec::new()),
        }
    }
}

/// A decoded memory read, tagged by the [`DataType`] used to decode it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values")]
pub enum ReadValue {
    /// Signed 16-bit integers.
    Int16(Vec<i16>),
    /// Unsigned 16-bit integers.
    UInt16(Vec<u16>),
    /// Signed 32-bit integers.
    Int32(Vec<i32>),
    /// Unsigned 32-bit integers.
    UInt32(Vec<u32>),
    /// Signed 64-bit integers.
    Int64(Vec<i64>),
    /// Unsigned 64-bit integers.
    UInt64(Vec<u64>),
    /// IEEE-754 single-precision floats.
    Float(Vec<f32>),
    /// IEEE-754 double-precision floats.
    Double(Vec<f64>),
    /// Binary-coded decimal values.
    Bcd(Vec<u32>),
}

impl ReadValue {
    /// Number of decoded scalar values carried.
    pub fn len(&self) -> usize {
        match self {
            ReadValue::Int16(v) => v.len(),
            ReadValue::UInt16(v) => v.len(),
            ReadValue::Int32(v) => v.len(),
            ReadValue::UInt32(v) => v.len(),
            ReadValue::Int64(v) => v.len(),
            ReadValue::UInt64(v) => v.len(),
            ReadValue::Float(v) => v.len(),
            ReadValue::Double(v) => v.len(),
            ReadValue::Bcd(v) => v.len(),
        }
    }

    /// Whether no values were decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for DataType {
    type Err = FinsError;

    /// Parses a data-type tag, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::codec::DataType;
    ///
    /// assert_eq!("int16".parse::<DataType>().unwrap(), DataType::Int16);
    /// assert!("i12".parse::<DataType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "INT16" => Ok(DataType::Int16),
            "UINT16" => Ok(DataType::UInt16),
            "INT32" => Ok(DataType::Int32),
            "UINT32" => Ok(DataType::UInt32),
            "INT64" => Ok(DataType::Int64),
            "UINT64" => Ok(DataType::UInt64),
            "FLOAT" => Ok(DataType::Float),
            "DOUBLE" => Ok(DataType::Double),
            "BCD" => Ok(DataType::Bcd),
            other => Err(FinsError::invalid_data_type(other)),
        }
    }
}

/// Left-pads an odd-length buffer with a single zero byte.
fn pad_even(data: &[u8]) -> Vec<u8> {
    if data.len() % 2 != 0 {
        let mut padded = Vec::with_capacity(data.len() + 1);
        padded.push(0);
        padded.extend_from_slice(data);
        padded
    } else {
        data.to_vec()
    }
}

/// Decodes a byte buffer as big-endian signed 16-bit integers.
pub fn to_int16(data: &[u8]) -> Vec<i16> {
    let data = pad_even(data);
    data.chunks_exact(2)
        .map(|w| i16::from_be_bytes([w[0], w[1]]))
        .collect()
}

/// Decodes a byte buffer as big-endian unsigned 16-bit integers.
pub fn to_uint16(data: &[u8]) -> Vec<u16> {
    let data = pad_even(data);
    data.chunks_exact(2)
        .map(|w| u16::from_be_bytes([w[0], w[1]]))
        .collect()
}

/// Swaps the two 16-bit words of a 4-byte group: `[w0 w1] -> [w1 w0]`.
fn swap_words_32(word: &[u8]) -> [u8; 4] {
    [word[2], word[3], word[0], word[1]]
}

/// Reverses the four 16-bit words of an 8-byte group: `[w0 w1 w2 w3] -> [w3 w2 w1 w0]`.
fn swap_words_64(word: &[u8]) -> [u8; 8] {
    [
        word[6], word[7], word[4], word[5], word[2], word[3], word[0], word[1],
    ]
}

/// Decodes a byte buffer as signed 32-bit integers (with FINS word-swap).
pub fn to_int32(data: &[u8]) -> Vec<i32> {
    let data = pad_even(data);
    data.chunks_exact(4)
        .map(|w| i32::from_be_bytes(swap_words_32(w)))
        .collect()
}

/// Decodes a byte buffer as unsigned 32-bit integers (with FINS word-swap).
pub fn to_uint32(data: &[u8]) -> Vec<u32> {
    let data = pad_even(data);
    data.chunks_exact(4)
        .map(|w| u32::from_be_bytes(swap_words_32(w)))
        .collect()
}

/// Decodes a byte buffer as signed 64-bit integers (with FINS word-swap).
pub fn to_int64(data: &[u8]) -> Vec<i64> {
    let data = pad_even(data);
    data.chunks_exact(8)
        .map(|w| i64::from_be_bytes(swap_words_64(w)))
        .collect()
}

/// Decodes a byte buffer as unsigned 64-bit integers (with FINS word-swap).
pub fn to_uint64(data: &[u8]) -> Vec<u64> {
    let data = pad_even(data);
    data.chunks_exact(8)
        .map(|w| u64::from_be_bytes(swap_words_64(w)))
        .collect()
}

/// Decodes a byte buffer as IEEE-754 single-precision floats (with FINS word-swap).
pub fn to_float(data: &[u8]) -> Vec<f32> {
    let data = pad_even(data);
    data.chunks_exact(4)
        .map(|w| f32::from_be_bytes(swap_words_32(w)))
        .collect()
}

/// Decodes a byte buffer as IEEE-754 double-precision floats (with FINS word-swap).
pub fn to_double(data: &[u8]) -> Vec<f64> {
    let data = pad_even(data);
    data.chunks_exact(8)
        .map(|w| f64::from_be_bytes(swap_words_64(w)))
        .collect()
}

/// Decodes a single BCD byte into a two-digit decimal value.
///
/// Returns an error if either nibble is not a valid decimal digit (0-9).
fn bcd_byte(byte: u8) -> Result<u32> {
    let hi = byte >> 4;
    let lo = byte & 0x0F;
    if hi > 9 || lo > 9 {
        return Err(FinsError::decode(format!(
            "invalid BCD byte 0x{byte:02X}: nibble exceeds 9"
        )));
    }
    Ok(hi as u32 * 10 + lo as u32)
}

/// Decodes a byte buffer as BCD values, one decoded value per word (two
/// bytes, four decimal digits).
///
/// Each word yields `(b0.hi*1000 + b0.lo*100 + b1.hi*10 + b1.lo)` via
/// [`bcd_group_to_decimal`]. Stops and returns an error on the first invalid
/// nibble, preserving values decoded so far is the caller's responsibility
/// (the client layer does this via the chunked-read accumulator, not this
/// function).
pub fn to_bcd(data: &[u8]) -> Result<Vec<u32>> {
    let data = pad_even(data);
    data.chunks_exact(2)
        .map(|w| bcd_group_to_decimal([w[0], w[1]]))
        .collect()
}

/// Decodes a two-byte BCD group into a four-digit decimal value:
/// `(b0.hi*1000 + b0.lo*100 + b1.hi*10 + b1.lo)`.
pub fn bcd_group_to_decimal(bytes: [u8; 2]) -> Result<u32> {
    let hi = bcd_byte(bytes[0])?;
    let lo = bcd_byte(bytes[1])?;
    Ok(hi * 100 + lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_words_per_value() {
        assert_eq!(DataType::Int16.words_per_value(), 1);
        assert_eq!(DataType::UInt16.words_per_value(), 1);
        assert_eq!(DataType::Bcd.words_per_value(), 1);
        assert_eq!(DataType::Int32.words_per_value(), 2);
        assert_eq!(DataType::Float.words_per_value(), 2);
        assert_eq!(DataType::Int64.words_per_value(), 4);
        assert_eq!(DataType::Double.words_per_value(), 4);
    }

    #[test]
    fn data_type_parse_case_insensitive() {
        assert_eq!("int16".parse::<DataType>().unwrap(), DataType::Int16);
        assert_eq!("Float".parse::<DataType>().unwrap(), DataType::Float);
        assert_eq!("BCD".parse::<DataType>().unwrap(), DataType::Bcd);
    }

    #[test]
    fn data_type_parse_unknown_tag_is_error() {
        assert!("i12".parse::<DataType>().is_err());
    }

    #[test]
    fn int16_decodes_big_endian() {
        assert_eq!(to_int16(&[0x00, 0x14]), vec![20]);
    }

    #[test]
    fn int16_odd_length_left_pads() {
        assert_eq!(to_int16(&[0x14]), vec![20]);
    }

    #[test]
    fn int32_swaps_words_before_decode() {
        // low word first on the wire: 0x0001 0x0000 -> value 0x0000_0001
        assert_eq!(to_int32(&[0x00, 0x01, 0x00, 0x00]), vec![1]);
    }

    #[test]
    fn uint32_swaps_words_before_decode() {
        assert_eq!(to_uint32(&[0x00, 0x02, 0x00, 0x00]), vec![2]);
    }

    #[test]
    fn int64_reverses_all_four_words() {
        // wire order w0 w1 w2 w3 = 0x0000 0x0000 0x0000 0x0001 -> value 1
        let wire = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(to_int64(&wire), vec![1]);
    }

    #[test]
    fn float_round_trip_via_known_bit_pattern() {
        // 1.0f32 = 0x3F800000; wire holds words swapped: [0x0000, 0x3F80]
        let wire = [0x00, 0x00, 0x3F, 0x80];
        assert_eq!(to_float(&wire), vec![1.0f32]);
    }

    #[test]
    fn bcd_single_word_is_four_digits() {
        // word 0x1234 -> 1234, not two single-byte values [0x12, 0x34].
        assert_eq!(to_bcd(&[0x12, 0x34]).unwrap(), vec![1234]);
    }

    #[test]
    fn bcd_multiple_words_decode_one_value_each() {
        assert_eq!(
            to_bcd(&[0x00, 0x42, 0x19, 0x99]).unwrap(),
            vec![42, 1999]
        );
    }

    #[test]
    fn bcd_rejects_invalid_nibble() {
        assert!(to_bcd(&[0xFA, 0x00]).is_err());
    }

    #[test]
    fn bcd_group_decodes_four_digits() {
        assert_eq!(bcd_group_to_decimal([0x20, 0x25]).unwrap(), 2025);
    }

    #[test]
    fn multi_value_chunk_decodes_in_order() {
        let wire = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
        assert_eq!(to_int16(&wire), vec![1, 2, 3]);
    }

    #[test]
    fn data_type_decode_dispatches_by_tag() {
        let value = DataType::Int16.decode(&[0x00, 0x14]).unwrap();
        assert_eq!(value, ReadValue::Int16(vec![20]));
        assert_eq!(value.len(), 1);

        let value = DataType::Float.decode(&[0x00, 0x00, 0x3F, 0x80]).unwrap();
        assert_eq!(value, ReadValue::Float(vec![1.0]));
    }

    #[test]
    fn data_type_decode_bcd_propagates_error() {
        assert!(DataType::Bcd.decode(&[0xFA]).is_err());
    }

    #[test]
    fn read_value_empty() {
        let value = ReadValue::Int16(vec![]);
        assert!(value.is_empty());
    }
}
