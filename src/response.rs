//! FINS response parsing and validation.
//!
//! This module handles parsing and validation of FINS responses received from PLCs.
//!
//! # Response Structure
//!
//! A FINS response consists of:
//!
//! | Component | Size | Description |
//! |-----------|------|-------------|
//! | Header | 10 bytes | FINS header (same structure as command) |
//! | MRC | 1 byte | Main Response Code (echoes the command) |
//! | SRC | 1 byte | Sub Response Code (echoes the command) |
//! | Main Code | 1 byte | End code main byte (0x00 = success) |
//! | Sub Code | 1 byte | End code sub byte (0x00 = success) |
//! | Text | Variable | Response payload (if any) |
//!
//! # Example
//!
//! ```
//! use omron_fins::FinsResponse;
//!
//! let bytes = [
//!     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01, // header
//!     0x01, 0x01, // MRC, SRC
//!     0x00, 0x00, // end code (success)
//!     0x12, 0x34, 0x56, 0x78, // text: 0x1234, 0x5678
//! ];
//!
//! let response = FinsResponse::from_bytes(&bytes).unwrap();
//! assert!(response.is_success());
//!
//! let words = response.to_words().unwrap();
//! assert_eq!(words, vec![0x1234, 0x5678]);
//! ```

use crate::endcode::{self, EndCodeClass};
use crate::error::{FinsError, Result};
use crate::header::{FinsHeader, FINS_HEADER_SIZE};

/// Minimum response size: header (10) + MRC (1) + SRC (1) + main code (1) + sub code (1) = 14 bytes.
pub const MIN_RESPONSE_SIZE: usize = FINS_HEADER_SIZE + 4;

/// Parsed FINS response.
#[derive(Debug, Clone)]
pub struct FinsResponse {
    /// Response header.
    pub header: FinsHeader,
    /// Main Response Code (MRC), echoing the command.
    pub mrc: u8,
    /// Sub Response Code (SRC), echoing the command.
    pub src: u8,
    /// End code main byte (0x00 = success).
    pub main_code: u8,
    /// End code sub byte (0x00 = success).
    pub sub_code: u8,
    /// Response payload, if any.
    pub text: Vec<u8>,
}

impl FinsResponse {
    /// Parses a FINS response from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the response is shorter than [`MIN_RESPONSE_SIZE`].
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01, // header
    ///     0x01, 0x01, // MRC, SRC
    ///     0x00, 0x00, // end code (success)
    ///     0x12, 0x34, // text
    /// ];
    /// let response = FinsResponse::from_bytes(&bytes).unwrap();
    /// assert!(response.is_success());
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_RESPONSE_SIZE {
            return Err(FinsError::decode(format!(
                "response too short: expected at least {} bytes, got {}",
                MIN_RESPONSE_SIZE,
                data.len()
            )));
        }

        let header = FinsHeader::from_bytes(&data[..FINS_HEADER_SIZE])?;

        Ok(Self {
            header,
            mrc: data[FINS_HEADER_SIZE],
            src: data[FINS_HEADER_SIZE + 1],
            main_code: data[FINS_HEADER_SIZE + 2],
            sub_code: data[FINS_HEADER_SIZE + 3],
            text: data[MIN_RESPONSE_SIZE..].to_vec(),
        })
    }

    /// Returns the raw two-byte end code (`main_code << 8 | sub_code`).
    pub fn end_code(&self) -> u16 {
        u16::from_be_bytes([self.main_code, self.sub_code])
    }

    /// Returns whether the end code is `0x0000` (normal completion).
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let success_bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01,
    ///     0x01, 0x01, 0x00, 0x00,
    /// ];
    /// let response = FinsResponse::from_bytes(&success_bytes).unwrap();
    /// assert!(response.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.main_code == 0x00 && self.sub_code == 0x00
    }

    /// Returns whether the end code is `0x0001` (service cancelled).
    pub fn is_service_cancelled(&self) -> bool {
        self.main_code == 0x00 && self.sub_code == 0x01
    }

    /// Validates the end code, mapping a non-success code to [`FinsError::Fins`]
    /// or [`FinsError::ServiceCancelled`].
    ///
    /// # Errors
    ///
    /// Returns an error built from the end-code catalogue ([`crate::endcode`])
    /// when the end code is not `0x0000`.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let error_bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01,
    ///     0x01, 0x01, 0x11, 0x03, // address range error
    /// ];
    /// let response = FinsResponse::from_bytes(&error_bytes).unwrap();
    /// assert!(response.check_end_code().is_err());
    /// ```
    pub fn check_end_code(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(FinsError::from_end_code(self.main_code, self.sub_code))
        }
    }

    /// Returns the catalogue class for this response's end code, without
    /// constructing an error (useful for logging a success path uniformly).
    pub fn end_code_class(&self) -> EndCodeClass {
        endcode::lookup(self.main_code, self.sub_code).class
    }

    /// Validates the Service ID matches the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`FinsError::SidMismatch`] if the SID doesn't match.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x05,
    ///     0x01, 0x01, 0x00, 0x00,
    /// ];
    /// let response = FinsResponse::from_bytes(&bytes).unwrap();
    /// assert!(response.check_sid(0x05).is_ok());
    /// assert!(response.check_sid(0x01).is_err());
    /// ```
    pub fn check_sid(&self, expected: u8) -> Result<()> {
        if self.header.sid == expected {
            Ok(())
        } else {
            Err(FinsError::sid_mismatch(expected, self.header.sid))
        }
    }

    /// Converts the response text to words (big-endian u16 values), left-padding
    /// an odd-length buffer with one zero byte first.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01,
    ///     0x01, 0x01, 0x00, 0x00,
    ///     0x12, 0x34, 0x56, 0x78, // text: 0x1234, 0x5678
    /// ];
    /// let response = FinsResponse::from_bytes(&bytes).unwrap();
    /// let words = response.to_words().unwrap();
    /// assert_eq!(words, vec![0x1234, 0x5678]);
    /// ```
    pub fn to_words(&self) -> Result<Vec<u16>> {
        Ok(crate::codec::to_uint16(&self.text))
    }

    /// Converts the response text to a single bit value.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no text.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::FinsResponse;
    ///
    /// let bytes = [
    ///     0xC0, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0A, 0x00, 0x01,
    ///     0x01, 0x01, 0x00, 0x00,
    ///     0x01, // bit value: true
    /// ];
    /// let response = FinsResponse::from_bytes(&bytes).unwrap();
    /// assert_eq!(response.to_bit().unwrap(), true);
    /// ```
    pub fn to_bit(&self) -> Result<bool> {
        if self.text.is_empty() {
            return Err(FinsError::decode("no text for bit conversion"));
        }

        Ok(self.text[0] != 0)
    }
}
