//! Structured result envelope returned by every public client operation.
//!
//! Every fallible outcome is surfaced as data, not as a bare error: success
//! and failure share one shape, distinguished by `status`. This keeps
//! callers from needing two code paths to recover partial reads.

use serde::{Deserialize, Serialize};

use crate::codec::ReadValue;

/// Outcome discriminator for a [`FinsEnvelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    /// The operation completed with end code `0x0000`.
    Success,
    /// The operation failed; `message` carries the reason and `data` carries
    /// whatever was decoded before the failure.
    Error,
}

/// Diagnostic metadata describing the address and chunking of a read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    /// `"word"` or `"bit"`.
    pub address_type: Option<String>,
    /// The address string as supplied by the caller.
    pub original_address: Option<String>,
    /// Human-readable memory area name.
    pub memory_area: Option<String>,
    /// Resolved starting word address.
    pub word_address: Option<u16>,
    /// Bit index, present only for bit addresses.
    pub bit_index: Option<u8>,
    /// Number of chunk requests issued.
    pub read_chunks: Option<u16>,
    /// The 2-byte big-endian word address as sent on the wire.
    pub offset_bytes: Option<[u8; 2]>,
}

/// Hex-encoded wire traces, populated only when `ClientConfig::debug` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugTrace {
    /// The outbound command frame, hex-encoded.
    pub command_frame_hex: Option<String>,
    /// The full inbound datagram, hex-encoded.
    pub raw_response_hex: Option<String>,
    /// The 10-byte response header, hex-encoded.
    pub response_header_hex: Option<String>,
    /// The 2-byte command code echo, hex-encoded.
    pub response_command_hex: Option<String>,
    /// The 2-byte end code, hex-encoded.
    pub response_end_code_hex: Option<String>,
    /// CPU status read's 2-byte fatal error field, hex-encoded.
    pub fatal_error_hex: Option<String>,
    /// CPU status read's 2-byte non-fatal error field, hex-encoded.
    pub non_fatal_error_hex: Option<String>,
}

/// Uniform structured result for every public client operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinsEnvelope<T> {
    /// Success or error.
    pub status: EnvelopeStatus,
    /// Human-readable outcome message (end-code description on error).
    pub message: String,
    /// The decoded payload. On error, whatever was decoded before failure.
    pub data: T,
    /// Name of the decoder used to produce `data`, for diagnostics.
    pub data_format: String,
    /// Resolved-address and chunking metadata.
    pub meta: EnvelopeMeta,
    /// Optional wire-level traces.
    pub debug: DebugTrace,
}

impl<T> FinsEnvelope<T> {
    /// Builds a success envelope.
    pub fn success(data: T, data_format: impl Into<String>, meta: EnvelopeMeta, debug: DebugTrace) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: "OK".to_string(),
            data,
            data_format: data_format.into(),
            meta,
            debug,
        }
    }

    /// Builds an error envelope, carrying whatever partial data was decoded.
    pub fn error(
        message: impl Into<String>,
        data: T,
        data_format: impl Into<String>,
        meta: EnvelopeMeta,
        debug: DebugTrace,
    ) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data,
            data_format: data_format.into(),
            meta,
            debug,
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

/// CPU identity fields read back from command `05 01`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuIdentity {
    /// ASCII device/unit name.
    pub unit_name: String,
    /// Boot (system) version string.
    pub boot_version: String,
    /// Model number string.
    pub model_number: String,
    /// OS version string.
    pub os_version: String,
}

/// Run/Stop status and programming mode read back from command `06 01`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuStatus {
    /// `"Stop"`, `"Run"`, `"Standby"`, or `"unknown status"`.
    pub status: String,
    /// `"Program"`, `"Monitor"`, `"Run"`, or `"unknown mode"`.
    pub mode: String,
}

/// Envelope returned by [`crate::Client::read`].
pub type ReadEnvelope = FinsEnvelope<ReadValue>;
/// Envelope returned by [`crate::Client::cpu_identity_read`].
pub type IdentityEnvelope = FinsEnvelope<CpuIdentity>;
/// Envelope returned by [`crate::Client::cpu_status_read`].
pub type StatusEnvelope = FinsEnvelope<CpuStatus>;
/// Envelope returned by [`crate::Client::clock_read`]; `data` is an
/// ISO-8601 local civil date-time string.
pub type ClockEnvelope = FinsEnvelope<String>;
/// Envelope returned by [`crate::Client::mode_run`] / `mode_program`.
pub type ModeEnvelope = FinsEnvelope<()>;
/// Envelope returned by [`crate::Client::program_area_read`]; `data` is the
/// number of bytes written to the output file.
pub type ProgramReadEnvelope = FinsEnvelope<usize>;
/// Envelope returned by [`crate::Client::program_area_write`].
pub type ProgramWriteEnvelope = FinsEnvelope<()>;
