//! FINS command structures and serialization.
//!
//! This module contains the FINS command structures actually exercised by
//! [`Client`](crate::Client): memory area read (word and bit), CPU identity
//! and status read, clock read, run/program mode change, and program area
//! read/write. Each command handles its own serialization to bytes for
//! transmission.
//!
//! # Command Types
//!
//! The module provides the following command types:
//!
//! ## Memory Operations
//! - [`ReadWordCommand`] - Read words from PLC memory
//! - [`ReadBitCommand`] - Read a single bit from PLC memory
//!
//! ## PLC Control
//! - [`RunCommand`] - Put PLC into run mode
//! - [`StopCommand`] - Stop the PLC
//!
//! ## Program Area
//! - [`ProgramAreaReadCommand`] - Read a range of the user program area
//! - [`ProgramAreaWriteCommand`] - Write a range of the user program area
//!
//! # Example
//!
//! Commands are typically created and used through the [`Client`](crate::Client) struct,
//! but can also be used directly for lower-level control:
//!
//! ```
//! use omron_fins::{ReadWordCommand, MemoryArea, NodeAddress};
//!
//! let dest = NodeAddress::new(0, 10, 0);
//! let src = NodeAddress::new(0, 1, 0);
//!
//! let cmd = ReadWordCommand::new(dest, src, 0x01, MemoryArea::DataMemory, 100, 10).unwrap();
//! let bytes = cmd.to_bytes();
//! // bytes can now be sent over UDP
//! ```
//!
//! # Constants
//!
//! - [`MAX_WORDS_PER_COMMAND`] - Maximum number of words (990) per read/write command

use crate::error::{FinsError, Result};
use crate::header::{FinsHeader, NodeAddress, FINS_HEADER_SIZE};
use crate::memory::MemoryArea;

/// Memory Read command code (MRC).
pub(crate) const MRC_MEMORY_READ: u8 = 0x01;
/// Memory Read command sub-code (SRC).
pub(crate) const SRC_MEMORY_READ: u8 = 0x01;
/// Run command code (MRC).
pub(crate) const MRC_RUN: u8 = 0x04;
/// Run command sub-code (SRC).
pub(crate) const SRC_RUN: u8 = 0x01;
/// Stop command sub-code (SRC).
pub(crate) const SRC_STOP: u8 = 0x02;

/// Maximum number of words that can be read/written in a single command.
pub const MAX_WORDS_PER_COMMAND: u16 = 990;

/// Address specification for FINS commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    /// Word address in the memory area.
    pub word: u16,
    /// Bit position (0-15) for bit access, or 0 for word access.
    pub bit: u8,
}

impl Address {
    /// Creates a new word address (bit = 0).
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::Address;
    ///
    /// let addr = Address::word(100);
    /// assert_eq!(addr.word, 100);
    /// assert_eq!(addr.bit, 0);
    /// ```
    pub fn word(word: u16) -> Self {
        Self { word, bit: 0 }
    }

    /// Creates a new bit address.
    ///
    /// # Errors
    ///
    /// Returns an error if bit > 15.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::Address;
    ///
    /// let addr = Address::bit(100, 5).unwrap();
    /// assert_eq!(addr.word, 100);
    /// assert_eq!(addr.bit, 5);
    /// ```
    pub fn bit(word: u16, bit: u8) -> Result<Self> {
        if bit > 15 {
            return Err(FinsError::invalid_parameter("bit", "must be 0-15"));
        }
        Ok(Self { word, bit })
    }

    /// Serializes address to 3 bytes (word high, word low, bit).
    pub(crate) fn to_bytes(self) -> [u8; 3] {
        [(self.word >> 8) as u8, (self.word & 0xFF) as u8, self.bit]
    }
}

/// Command for reading words from PLC memory.
#[derive(Debug, Clone)]
pub struct ReadWordCommand {
    header: FinsHeader,
    area: MemoryArea,
    address: Address,
    count: u16,
}

impl ReadWordCommand {
    /// Creates a new read word command.
    ///
    /// # Arguments
    ///
    /// * `destination` - Destination node address
    /// * `source` - Source node address
    /// * `sid` - Service ID for request/response matching
    /// * `area` - Memory area to read from
    /// * `address` - Starting word address
    /// * `count` - Number of words to read (1-990)
    ///
    /// # Errors
    ///
    /// Returns an error if count is 0 or exceeds MAX_WORDS_PER_COMMAND.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::{ReadWordCommand, MemoryArea, NodeAddress};
    ///
    /// let cmd = ReadWordCommand::new(
    ///     NodeAddress::new(0, 10, 0),
    ///     NodeAddress::new(0, 1, 0),
    ///     0x01,
    ///     MemoryArea::DataMemory,
    ///     100,
    ///     10,
    /// ).unwrap();
    /// ```
    pub fn new(
        destination: NodeAddress,
        source: NodeAddress,
        sid: u8,
        area: MemoryArea,
        word_address: u16,
        count: u16,
    ) -> Result<Self> {
        if count == 0 {
            return Err(FinsError::invalid_parameter(
                "count",
                "must be greater than 0",
            ));
        }
        if count > MAX_WORDS_PER_COMMAND {
            return Err(FinsError::invalid_parameter(
                "count",
                format!("must not exceed {}", MAX_WORDS_PER_COMMAND),
            ));
        }

        Ok(Self {
            header: FinsHeader::new_command(destination, source, sid),
            area,
            address: Address::word(word_address),
            count,
        })
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 8);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_MEMORY_READ);
        bytes.push(SRC_MEMORY_READ);
        bytes.push(self.area.word_code());
        bytes.extend_from_slice(&self.address.to_bytes());
        bytes.push((self.count >> 8) as u8);
        bytes.push((self.count & 0xFF) as u8);
        bytes
    }
}

/// Command for reading a single bit from PLC memory.
#[derive(Debug, Clone)]
pub struct ReadBitCommand {
    header: FinsHeader,
    area: MemoryArea,
    address: Address,
}

impl ReadBitCommand {
    /// Creates a new read bit command.
    ///
    /// # Arguments
    ///
    /// * `destination` - Destination node address
    /// * `source` - Source node address
    /// * `sid` - Service ID for request/response matching
    /// * `area` - Memory area to read from (must support bit access)
    /// * `word_address` - Word address
    /// * `bit` - Bit position (0-15)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The memory area doesn't support bit access (DM)
    /// - The bit position is > 15
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::{ReadBitCommand, MemoryArea, NodeAddress};
    ///
    /// let cmd = ReadBitCommand::new(
    ///     NodeAddress::new(0, 10, 0),
    ///     NodeAddress::new(0, 1, 0),
    ///     0x01,
    ///     MemoryArea::Cio,
    ///     100,
    ///     5,
    /// ).unwrap();
    /// ```
    pub fn new(
        destination: NodeAddress,
        source: NodeAddress,
        sid: u8,
        area: MemoryArea,
        word_address: u16,
        bit: u8,
    ) -> Result<Self> {
        // Validate bit access is supported
        area.bit_code()?;

        Ok(Self {
            header: FinsHeader::new_command(destination, source, sid),
            area,
            address: Address::bit(word_address, bit)?,
        })
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 8);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_MEMORY_READ);
        bytes.push(SRC_MEMORY_READ);
        bytes.push(self.area.bit_code()?);
        bytes.extend_from_slice(&self.address.to_bytes());
        bytes.push(0x00); // Count high byte (always 1 bit)
        bytes.push(0x01); // Count low byte
        Ok(bytes)
    }
}

/// PLC operating mode for Run command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlcMode {
    /// Debug mode - step execution.
    Debug,
    /// Monitor mode - run with monitoring enabled.
    Monitor,
    /// Run mode - normal execution.
    Run,
}

impl PlcMode {
    /// Returns the FINS code for this mode.
    pub(crate) fn code(self) -> u8 {
        match self {
            PlcMode::Debug => 0x01,
            PlcMode::Monitor => 0x02,
            PlcMode::Run => 0x04,
        }
    }
}

/// Command for putting the PLC into run mode.
#[derive(Debug, Clone)]
pub struct RunCommand {
    header: FinsHeader,
    mode: PlcMode,
}

impl RunCommand {
    /// Creates a new run command.
    ///
    /// # Arguments
    ///
    /// * `destination` - Destination node address
    /// * `source` - Source node address
    /// * `sid` - Service ID for request/response matching
    /// * `mode` - PLC operating mode
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::{RunCommand, PlcMode, NodeAddress};
    ///
    /// let cmd = RunCommand::new(
    ///     NodeAddress::new(0, 10, 0),
    ///     NodeAddress::new(0, 1, 0),
    ///     0x01,
    ///     PlcMode::Monitor,
    /// );
    /// ```
    pub fn new(destination: NodeAddress, source: NodeAddress, sid: u8, mode: PlcMode) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
            mode,
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 5);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_RUN);
        bytes.push(SRC_RUN);
        bytes.push(0xFF); // Program number high byte (current program)
        bytes.push(0xFF); // Program number low byte
        bytes.push(self.mode.code());
        bytes
    }
}

/// Command for stopping the PLC.
#[derive(Debug, Clone)]
pub struct StopCommand {
    header: FinsHeader,
}

impl StopCommand {
    /// Creates a new stop command.
    ///
    /// # Arguments
    ///
    /// * `destination` - Destination node address
    /// * `source` - Source node address
    /// * `sid` - Service ID for request/response matching
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::{StopCommand, NodeAddress};
    ///
    /// let cmd = StopCommand::new(
    ///     NodeAddress::new(0, 10, 0),
    ///     NodeAddress::new(0, 1, 0),
    ///     0x01,
    /// );
    /// ```
    pub fn new(destination: NodeAddress, source: NodeAddress, sid: u8) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 2);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_RUN);
        bytes.push(SRC_STOP);
        bytes
    }
}

/// CPU Unit Data Read command code (MRC).
pub(crate) const MRC_CPU_IDENTITY: u8 = 0x05;
/// CPU Unit Data Read command sub-code (SRC).
pub(crate) const SRC_CPU_IDENTITY: u8 = 0x01;
/// CPU Unit Status Read command code (MRC).
pub(crate) const MRC_CPU_STATUS: u8 = 0x06;
/// CPU Unit Status Read command sub-code (SRC).
pub(crate) const SRC_CPU_STATUS: u8 = 0x01;
/// Clock Read command code (MRC).
pub(crate) const MRC_CLOCK_READ: u8 = 0x07;
/// Clock Read command sub-code (SRC).
pub(crate) const SRC_CLOCK_READ: u8 = 0x01;
/// Program Area Read command code (MRC).
pub(crate) const MRC_PROGRAM_AREA: u8 = 0x03;
/// Program Area Read command sub-code (SRC).
pub(crate) const SRC_PROGRAM_AREA_READ: u8 = 0x06;
/// Program Area Write command sub-code (SRC).
pub(crate) const SRC_PROGRAM_AREA_WRITE: u8 = 0x07;

/// Command for reading CPU Unit identity data (device name, versions, model).
#[derive(Debug, Clone)]
pub struct CpuIdentityReadCommand {
    header: FinsHeader,
}

impl CpuIdentityReadCommand {
    /// Creates a new CPU identity read command.
    pub fn new(destination: NodeAddress, source: NodeAddress, sid: u8) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 2);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_CPU_IDENTITY);
        bytes.push(SRC_CPU_IDENTITY);
        bytes
    }
}

/// Command for reading CPU Unit status (run/stop/standby, operating mode).
#[derive(Debug, Clone)]
pub struct CpuStatusReadCommand {
    header: FinsHeader,
}

impl CpuStatusReadCommand {
    /// Creates a new CPU status read command.
    pub fn new(destination: NodeAddress, source: NodeAddress, sid: u8) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 2);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_CPU_STATUS);
        bytes.push(SRC_CPU_STATUS);
        bytes
    }
}

/// Command for reading the PLC's real-time clock.
#[derive(Debug, Clone)]
pub struct ClockReadCommand {
    header: FinsHeader,
}

impl ClockReadCommand {
    /// Creates a new clock read command.
    pub fn new(destination: NodeAddress, source: NodeAddress, sid: u8) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 2);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_CLOCK_READ);
        bytes.push(SRC_CLOCK_READ);
        bytes
    }
}

/// Command for reading a range of the user program area.
#[derive(Debug, Clone)]
pub struct ProgramAreaReadCommand {
    header: FinsHeader,
    start_word: u32,
    byte_count: u16,
}

impl ProgramAreaReadCommand {
    /// Creates a new program area read command.
    ///
    /// Always targets the current program (program number `0xFFFF`).
    pub fn new(
        destination: NodeAddress,
        source: NodeAddress,
        sid: u8,
        start_word: u32,
        byte_count: u16,
    ) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
            start_word,
            byte_count,
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 8);
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_PROGRAM_AREA);
        bytes.push(SRC_PROGRAM_AREA_READ);
        bytes.push(0xFF);
        bytes.push(0xFF);
        bytes.extend_from_slice(&self.start_word.to_be_bytes());
        bytes.extend_from_slice(&self.byte_count.to_be_bytes());
        bytes
    }
}

/// Command for writing a range of the user program area.
///
/// The PLC must be in Program mode for this command to succeed; the client
/// facade is responsible for forcing and restoring the mode around the
/// write sequence.
#[derive(Debug, Clone)]
pub struct ProgramAreaWriteCommand {
    header: FinsHeader,
    start_word: u32,
    data: Vec<u8>,
    is_last_chunk: bool,
}

impl ProgramAreaWriteCommand {
    /// Creates a new program area write command.
    ///
    /// `is_last_chunk` sets the top bit of the on-wire byte count, telling
    /// the PLC this is the final chunk of the write sequence.
    pub fn new(
        destination: NodeAddress,
        source: NodeAddress,
        sid: u8,
        start_word: u32,
        data: Vec<u8>,
        is_last_chunk: bool,
    ) -> Self {
        Self {
            header: FinsHeader::new_command(destination, source, sid),
            start_word,
            data,
            is_last_chunk,
        }
    }

    /// Returns the service ID.
    pub fn sid(&self) -> u8 {
        self.header.sid
    }

    /// Serializes the command to bytes for transmission.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FINS_HEADER_SIZE + 8 + self.data.len());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.push(MRC_PROGRAM_AREA);
        bytes.push(SRC_PROGRAM_AREA_WRITE);
        bytes.push(0xFF);
        bytes.push(0xFF);
        bytes.extend_from_slice(&self.start_word.to_be_bytes());
        let mut byte_count = self.data.len() as u16;
        if self.is_last_chunk {
            byte_count |= 0x8000;
        }
        bytes.extend_from_slice(&byte_count.to_be_bytes());
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_addresses() -> (NodeAddress, NodeAddress) {
        (NodeAddress::new(0, 10, 0), NodeAddress::new(0, 1, 0))
    }

    #[test]
    fn test_address_word() {
        let addr = Address::word(0x1234);
        assert_eq!(addr.word, 0x1234);
        assert_eq!(addr.bit, 0);
        assert_eq!(addr.to_bytes(), [0x12, 0x34, 0x00]);
    }

    #[test]
    fn test_address_bit() {
        let addr = Address::bit(0x1234, 5).unwrap();
        assert_eq!(addr.word, 0x1234);
        assert_eq!(addr.bit, 5);
        assert_eq!(addr.to_bytes(), [0x12, 0x34, 0x05]);
    }

    #[test]
    fn test_address_bit_invalid() {
        let result = Address::bit(100, 16);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_word_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = ReadWordCommand::new(dest, src, 0x01, MemoryArea::DataMemory, 100, 10).unwrap();
        let bytes = cmd.to_bytes();

        // Header (10 bytes) + MRC + SRC + Area + Address (3 bytes) + Count (2 bytes) = 18 bytes
        assert_eq!(bytes.len(), 18);

        // Check header
        assert_eq!(bytes[0], 0x80); // ICF
        assert_eq!(bytes[9], 0x01); // SID

        // Check command
        assert_eq!(bytes[10], MRC_MEMORY_READ);
        assert_eq!(bytes[11], SRC_MEMORY_READ);
        assert_eq!(bytes[12], 0x82); // DM word code

        // Check address (100 = 0x0064)
        assert_eq!(bytes[13], 0x00);
        assert_eq!(bytes[14], 0x64);
        assert_eq!(bytes[15], 0x00); // bit

        // Check count (10 = 0x000A)
        assert_eq!(bytes[16], 0x00);
        assert_eq!(bytes[17], 0x0A);
    }

    #[test]
    fn test_read_word_command_invalid_count() {
        let (dest, src) = test_addresses();

        let result = ReadWordCommand::new(dest, src, 0x01, MemoryArea::DataMemory, 100, 0);
        assert!(result.is_err());

        let result = ReadWordCommand::new(dest, src, 0x01, MemoryArea::DataMemory, 100, 1000);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_bit_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = ReadBitCommand::new(dest, src, 0x03, MemoryArea::Cio, 100, 5).unwrap();
        let bytes = cmd.to_bytes().unwrap();

        // Header (10) + MRC + SRC + Area + Address (3) + Count (2) = 18 bytes
        assert_eq!(bytes.len(), 18);

        // Check area code (CIO bit)
        assert_eq!(bytes[12], 0x30);

        // Check address with bit
        assert_eq!(bytes[13], 0x00);
        assert_eq!(bytes[14], 0x64); // 100
        assert_eq!(bytes[15], 0x05); // bit 5

        // Check count (always 1 for bit)
        assert_eq!(bytes[16], 0x00);
        assert_eq!(bytes[17], 0x01);
    }

    #[test]
    fn test_read_bit_command_timer_fails() {
        let (dest, src) = test_addresses();
        let result = ReadBitCommand::new(dest, src, 0x01, MemoryArea::Timer, 100, 5);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_bit_command_data_memory_succeeds() {
        let (dest, src) = test_addresses();
        let cmd = ReadBitCommand::new(dest, src, 0x01, MemoryArea::DataMemory, 100, 5).unwrap();
        let bytes = cmd.to_bytes().unwrap();
        assert_eq!(bytes[12], 0x02); // DM bit code
    }

    #[test]
    fn test_run_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = RunCommand::new(dest, src, 0x01, PlcMode::Monitor);
        let bytes = cmd.to_bytes();

        // Header (10) + MRC + SRC + Program (2) + Mode (1) = 15 bytes
        assert_eq!(bytes.len(), 15);

        // Check command codes
        assert_eq!(bytes[10], MRC_RUN); // 0x04
        assert_eq!(bytes[11], SRC_RUN); // 0x01

        // Check program number (0xFFFF = current)
        assert_eq!(bytes[12], 0xFF);
        assert_eq!(bytes[13], 0xFF);

        // Check mode (Monitor = 0x02)
        assert_eq!(bytes[14], 0x02);
    }

    #[test]
    fn test_run_command_modes() {
        let (dest, src) = test_addresses();

        let cmd = RunCommand::new(dest, src, 0x01, PlcMode::Debug);
        assert_eq!(cmd.to_bytes()[14], 0x01);

        let cmd = RunCommand::new(dest, src, 0x01, PlcMode::Monitor);
        assert_eq!(cmd.to_bytes()[14], 0x02);

        let cmd = RunCommand::new(dest, src, 0x01, PlcMode::Run);
        assert_eq!(cmd.to_bytes()[14], 0x04);
    }

    #[test]
    fn test_stop_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = StopCommand::new(dest, src, 0x01);
        let bytes = cmd.to_bytes();

        // Header (10) + MRC + SRC = 12 bytes
        assert_eq!(bytes.len(), 12);

        // Check command codes
        assert_eq!(bytes[10], MRC_RUN); // 0x04
        assert_eq!(bytes[11], SRC_STOP); // 0x02
    }

    #[test]
    fn test_plc_mode_codes() {
        assert_eq!(PlcMode::Debug.code(), 0x01);
        assert_eq!(PlcMode::Monitor.code(), 0x02);
        assert_eq!(PlcMode::Run.code(), 0x04);
    }

    #[test]
    fn test_cpu_identity_read_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = CpuIdentityReadCommand::new(dest, src, 0x01);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes.len(), FINS_HEADER_SIZE + 2);
        assert_eq!(bytes[10], MRC_CPU_IDENTITY);
        assert_eq!(bytes[11], SRC_CPU_IDENTITY);
    }

    #[test]
    fn test_cpu_status_read_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = CpuStatusReadCommand::new(dest, src, 0x01);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes[10], MRC_CPU_STATUS);
        assert_eq!(bytes[11], SRC_CPU_STATUS);
    }

    #[test]
    fn test_clock_read_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = ClockReadCommand::new(dest, src, 0x01);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes[10], MRC_CLOCK_READ);
        assert_eq!(bytes[11], SRC_CLOCK_READ);
    }

    #[test]
    fn test_program_area_read_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd = ProgramAreaReadCommand::new(dest, src, 0x01, 0x1000, 100);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes[10], MRC_PROGRAM_AREA);
        assert_eq!(bytes[11], SRC_PROGRAM_AREA_READ);
        assert_eq!(&bytes[12..14], &[0xFF, 0xFF]); // current program
        assert_eq!(&bytes[14..18], &0x1000u32.to_be_bytes());
        assert_eq!(&bytes[18..20], &100u16.to_be_bytes());
    }

    #[test]
    fn test_program_area_write_command_serialization() {
        let (dest, src) = test_addresses();
        let cmd =
            ProgramAreaWriteCommand::new(dest, src, 0x01, 0x1000, vec![0xAA, 0xBB, 0xCC], false);
        let bytes = cmd.to_bytes();

        assert_eq!(bytes[10], MRC_PROGRAM_AREA);
        assert_eq!(bytes[11], SRC_PROGRAM_AREA_WRITE);
        assert_eq!(&bytes[12..14], &[0xFF, 0xFF]);
        assert_eq!(&bytes[14..18], &0x1000u32.to_be_bytes());
        assert_eq!(&bytes[18..20], &3u16.to_be_bytes());
        assert_eq!(&bytes[20..23], &[0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_program_area_write_command_last_chunk_sets_top_bit() {
        let (dest, src) = test_addresses();
        let cmd = ProgramAreaWriteCommand::new(dest, src, 0x01, 0x1000, vec![0xAA], true);
        let bytes = cmd.to_bytes();

        assert_eq!(&bytes[18..20], &0x8001u16.to_be_bytes());
    }
}
