//! Error types for the FINS protocol.

use crate::endcode::EndCodeClass;
use std::io;
use thiserror::Error;

/// Result type alias for FINS operations.
pub type Result<T> = std::result::Result<T, FinsError>;

/// Errors that can occur during FINS communication.
#[derive(Debug, Error)]
pub enum FinsError {
    /// The PLC returned a non-zero, non-cancelled end code.
    #[error("FINS error 0x{end_code:04X} ({class:?}): {description}")]
    Fins {
        /// Raw two-byte end code (`main_code << 8 | sub_code`).
        end_code: u16,
        /// Category this end code belongs to.
        class: EndCodeClass,
        /// Human-readable description from the end-code catalogue.
        description: &'static str,
    },

    /// The PLC returned end code `0x0001`: the service was cancelled.
    ///
    /// This is a recoverable warning rather than a hard failure.
    #[error("service was cancelled (end code 0x0001)")]
    ServiceCancelled,

    /// An address string did not match the supported grammar.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// The address string that failed to parse.
        address: String,
        /// Description of why it was rejected.
        reason: String,
    },

    /// A data-type tag was not one of the supported types.
    #[error("invalid data type: '{0}'")]
    InvalidDataType(String),

    /// An operation was attempted on a transport that is not open.
    #[error("transport is not ready (not connected)")]
    TransportNotReady,

    /// No response arrived within the configured timeout.
    #[error("transport timed out waiting for a response")]
    TransportTimeout,

    /// A datagram arrived from an address other than the configured peer.
    #[error("received datagram from unexpected peer {actual}, expected {expected}")]
    PeerMismatch {
        /// The peer address the transport is configured to talk to.
        expected: String,
        /// The address the stray datagram actually came from.
        actual: String,
    },

    /// A frame was too short or otherwise malformed to decode.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid parameter provided to a command builder.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        parameter: String,
        /// Description of why the parameter is invalid.
        reason: String,
    },

    /// Service ID mismatch between request and response.
    #[error("SID mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    SidMismatch {
        /// Expected SID value.
        expected: u8,
        /// Received SID value.
        received: u8,
    },

    /// I/O error during communication.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FinsError {
    /// Creates a new [`FinsError::Fins`] from a raw end code and its
    /// catalogue entry.
    pub fn from_end_code(main_code: u8, sub_code: u8) -> Self {
        let info = crate::endcode::lookup(main_code, sub_code);
        if info.is_success {
            unreachable!("from_end_code must not be called with a success end code");
        }
        if info.class == EndCodeClass::ServiceCancelled {
            return Self::ServiceCancelled;
        }
        Self::Fins {
            end_code: u16::from_be_bytes([main_code, sub_code]),
            class: info.class,
            description: info.description,
        }
    }

    /// Creates a new [`FinsError::InvalidAddress`].
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new [`FinsError::InvalidDataType`].
    pub fn invalid_data_type(tag: impl Into<String>) -> Self {
        Self::InvalidDataType(tag.into())
    }

    /// Creates a new [`FinsError::Decode`].
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }

    /// Creates a new [`FinsError::PeerMismatch`].
    pub fn peer_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::PeerMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a new [`FinsError::InvalidParameter`].
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new [`FinsError::SidMismatch`].
    pub fn sid_mismatch(expected: u8, received: u8) -> Self {
        Self::SidMismatch { expected, received }
    }

    /// Whether this error represents the recoverable "service cancelled"
    /// condition rather than a hard failure.
    pub fn is_service_cancelled(&self) -> bool {
        matches!(self, Self::ServiceCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fins_error_display() {
        let err = FinsError::from_end_code(0x11, 0x03);
        assert!(err.to_string().contains("Address range error"));
    }

    #[test]
    fn from_end_code_maps_service_cancelled() {
        let err = FinsError::from_end_code(0x00, 0x01);
        assert!(err.is_service_cancelled());
    }

    #[test]
    fn invalid_address_display() {
        let err = FinsError::invalid_address("Q100", "unrecognised prefix 'Q'");
        assert_eq!(
            err.to_string(),
            "invalid address 'Q100': unrecognised prefix 'Q'"
        );
    }

    #[test]
    fn invalid_data_type_display() {
        let err = FinsError::invalid_data_type("i12");
        assert_eq!(err.to_string(), "invalid data type: 'i12'");
    }

    #[test]
    fn transport_not_ready_display() {
        assert_eq!(
            FinsError::TransportNotReady.to_string(),
            "transport is not ready (not connected)"
        );
    }

    #[test]
    fn peer_mismatch_display() {
        let err = FinsError::peer_mismatch("10.0.0.1:9600", "10.0.0.99:9600");
        assert_eq!(
            err.to_string(),
            "received datagram from unexpected peer 10.0.0.99:9600, expected 10.0.0.1:9600"
        );
    }

    #[test]
    fn sid_mismatch_display() {
        let err = FinsError::sid_mismatch(0x01, 0x02);
        assert_eq!(
            err.to_string(),
            "SID mismatch: expected 0x01, received 0x02"
        );
    }
}
