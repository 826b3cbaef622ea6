//! FINS client for communicating with Omron PLCs.

use std::fs::File;
use std::io::{Read as IoRead, Write as IoWrite};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use log::{debug, trace, warn};

use crate::address::{self, AddressKind, ParsedAddress};
use crate::codec::{DataType, ReadValue};
use crate::command::{
    ClockReadCommand, CpuIdentityReadCommand, CpuStatusReadCommand, ProgramAreaReadCommand,
    ProgramAreaWriteCommand, ReadBitCommand, ReadWordCommand, RunCommand, StopCommand,
    MAX_WORDS_PER_COMMAND,
};
use crate::command::PlcMode as RunMode;
use crate::envelope::{
    ClockEnvelope, CpuIdentity, CpuStatus, DebugTrace, EnvelopeMeta, IdentityEnvelope,
    ModeEnvelope, ProgramReadEnvelope, ProgramWriteEnvelope, ReadEnvelope, StatusEnvelope,
};
use crate::error::{FinsError, Result};
use crate::header::NodeAddress;
use crate::response::FinsResponse;
use crate::transport::{UdpTransport, DEFAULT_FINS_PORT, DEFAULT_TIMEOUT};

/// Maximum bytes requested per program-area chunk.
const PROGRAM_CHUNK_BYTES: u16 = 2000;
/// Length, in bytes, of the program-area response prefix preceding program data.
const PROGRAM_PREFIX_LEN: usize = 6;

/// Configuration for creating a FINS client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// PLC IP address or hostname.
    pub plc_addr: SocketAddr,
    /// Source node address (this client).
    pub source: NodeAddress,
    /// Destination node address (the PLC).
    pub destination: NodeAddress,
    /// Communication timeout.
    pub timeout: Duration,
    /// When true, every envelope's `debug` section carries hex frame traces.
    pub debug: bool,
}

impl ClientConfig {
    /// Creates a new client configuration with minimal required parameters.
    ///
    /// Uses the default timeout. If `dest_node` is `0`, the destination node
    /// is later auto-filled from the low octet of `plc_ip` (Omron's
    /// autogenerated-node-numbering convention).
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::ClientConfig;
    /// use std::net::Ipv4Addr;
    ///
    /// let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10);
    /// ```
    pub fn new(plc_ip: std::net::Ipv4Addr, source_node: u8, dest_node: u8) -> Self {
        Self {
            plc_addr: SocketAddr::from((plc_ip, DEFAULT_FINS_PORT)),
            source: NodeAddress::new(0, source_node, 0),
            destination: NodeAddress::new(0, dest_node, 0),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Sets a custom PLC port (default is 9600).
    pub fn with_port(mut self, port: u16) -> Self {
        self.plc_addr.set_port(port);
        self
    }

    /// Sets a custom timeout (default is 5 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets custom source network address.
    pub fn with_source_network(mut self, network: u8) -> Self {
        self.source.network = network;
        self
    }

    /// Sets custom source unit address.
    pub fn with_source_unit(mut self, unit: u8) -> Self {
        self.source.unit = unit;
        self
    }

    /// Sets custom destination network address.
    pub fn with_dest_network(mut self, network: u8) -> Self {
        self.destination.network = network;
        self
    }

    /// Sets custom destination unit address.
    pub fn with_dest_unit(mut self, unit: u8) -> Self {
        self.destination.unit = unit;
        self
    }

    /// Enables populating the `debug` section of every returned envelope.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// FINS client for communicating with Omron PLCs.
///
/// Every operation produces exactly one envelope; reads larger than 990
/// words are transparently chunked into multiple request/response pairs.
/// The client is not safe for concurrent use: a single outstanding request
/// is assumed.
pub struct Client {
    transport: UdpTransport,
    source: NodeAddress,
    destination: NodeAddress,
    debug: bool,
    sid_counter: AtomicU8,
}

impl Client {
    /// Creates a new FINS client and opens its transport.
    ///
    /// If `config.destination` is network 0 / node 0, the node byte is
    /// overridden with the low octet of the PLC's IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns an error if the UDP socket cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut destination = config.destination;
        if destination.network == 0 && destination.node == 0 {
            if let SocketAddr::V4(v4) = config.plc_addr {
                destination.node = v4.ip().octets()[3];
            }
        }

        let mut transport = UdpTransport::new(config.plc_addr, config.timeout);
        transport.connect()?;

        Ok(Self {
            transport,
            source: config.source,
            destination,
            debug: config.debug,
            sid_counter: AtomicU8::new(0),
        })
    }

    /// Generates the next Service ID.
    fn next_sid(&self) -> u8 {
        self.sid_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the source node address.
    pub fn source(&self) -> NodeAddress {
        self.source
    }

    /// Returns the destination node address.
    pub fn destination(&self) -> NodeAddress {
        self.destination
    }

    /// Closes and reopens the transport.
    pub fn reconnect(&mut self) -> Result<()> {
        self.transport.disconnect();
        self.transport.connect()
    }

    fn trace_frame(&self, debug: &mut DebugTrace, frame: &[u8]) {
        if self.debug {
            debug.command_frame_hex = Some(to_hex(frame));
        }
    }

    fn trace_response(&self, debug: &mut DebugTrace, raw: &[u8], response: &FinsResponse) {
        if self.debug {
            debug.raw_response_hex = Some(to_hex(raw));
            debug.response_header_hex = Some(to_hex(response.header.to_bytes()));
            debug.response_command_hex = Some(to_hex([response.mrc, response.src]));
            debug.response_end_code_hex = Some(to_hex([response.main_code, response.sub_code]));
        }
    }

    /// Sends a frame and parses+validates the response end-to-end.
    fn roundtrip(&mut self, frame: &[u8], sid: u8, debug: &mut DebugTrace) -> Result<FinsResponse> {
        self.trace_frame(debug, frame);
        trace!("sending {} byte frame (sid=0x{sid:02X})", frame.len());
        let raw = self.transport.execute(frame)?;
        let response = FinsResponse::from_bytes(&raw)?;
        self.trace_response(debug, &raw, &response);
        response.check_sid(sid)?;
        if response.is_service_cancelled() {
            warn!("PLC reported service cancelled for sid 0x{sid:02X}");
        }
        debug!(
            "response end code 0x{:04X} ({:?})",
            response.end_code(),
            response.end_code_class()
        );
        Ok(response)
    }

    /// Reads `address` as `INT16`, service id `0`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use omron_fins::{Client, ClientConfig};
    /// use std::net::Ipv4Addr;
    ///
    /// let mut client = Client::new(ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10)).unwrap();
    /// let envelope = client.read("D100");
    /// println!("{:?}", envelope.data);
    /// ```
    pub fn read(&mut self, address_str: &str) -> ReadEnvelope {
        self.read_as(address_str, DataType::Int16, 0)
    }

    /// Reads `address` as `data_type`, using the given service id.
    ///
    /// Chunks requests larger than [`MAX_WORDS_PER_COMMAND`] words. On a
    /// mid-read failure, the returned envelope carries whatever bytes were
    /// successfully accumulated before the failing chunk, decoded as best
    /// as possible.
    pub fn read_as(&mut self, address_str: &str, data_type: DataType, sid: u8) -> ReadEnvelope {
        let base = match address::parse(address_str, 0) {
            Ok(parsed) => parsed,
            Err(e) => {
                return ReadEnvelope::error(
                    e.to_string(),
                    data_type.empty_value(),
                    format!("{data_type:?}"),
                    EnvelopeMeta {
                        original_address: Some(address_str.to_string()),
                        ..Default::default()
                    },
                    DebugTrace::default(),
                )
            }
        };

        let words = match base.kind {
            AddressKind::Bit => 1,
            AddressKind::Word => data_type.words_per_value(),
        };
        let chunk_size = MAX_WORDS_PER_COMMAND;
        let chunk_count = words.div_ceil(chunk_size).max(1);

        let mut accumulator: Vec<u8> = Vec::with_capacity(words as usize * 2);
        let mut debug = DebugTrace::default();
        let mut last_parsed = base;

        for i in 0..chunk_count {
            let offset = i * chunk_size;
            let parsed = match address::parse(address_str, offset) {
                Ok(p) => p,
                Err(e) => {
                    return self.read_error_envelope(address_str, &base, &accumulator, data_type, e, debug, i)
                }
            };
            last_parsed = parsed;
            let remaining = words - offset;
            let item_count = remaining.min(chunk_size);

            let result = match parsed.kind {
                AddressKind::Bit => self.read_bit_chunk(&parsed, sid, &mut debug),
                AddressKind::Word => self.read_word_chunk(&parsed, item_count, sid, &mut debug),
            };

            match result {
                Ok(bytes) => accumulator.extend_from_slice(&bytes),
                Err(e) => {
                    return self.read_error_envelope(
                        address_str, &base, &accumulator, data_type, e, debug, i + 1,
                    )
                }
            }
        }

        let value = data_type
            .decode(&accumulator)
            .unwrap_or_else(|_| data_type.empty_value());

        ReadEnvelope::success(
            value,
            format!("{data_type:?}"),
            self.read_meta(address_str, &base, &last_parsed, chunk_count),
            debug,
        )
    }

    fn read_meta(
        &self,
        address_str: &str,
        base: &ParsedAddress,
        last: &ParsedAddress,
        chunks: u16,
    ) -> EnvelopeMeta {
        EnvelopeMeta {
            address_type: Some(match base.kind {
                AddressKind::Word => "word".to_string(),
                AddressKind::Bit => "bit".to_string(),
            }),
            original_address: Some(address_str.to_string()),
            memory_area: Some(base.area.to_string()),
            word_address: Some(base.word_address),
            bit_index: base.bit_number,
            read_chunks: Some(chunks),
            offset_bytes: Some(last.word_address.to_be_bytes()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn read_error_envelope(
        &self,
        address_str: &str,
        base: &ParsedAddress,
        accumulator: &[u8],
        data_type: DataType,
        err: FinsError,
        debug: DebugTrace,
        chunks_attempted: u16,
    ) -> ReadEnvelope {
        let partial = data_type
            .decode(accumulator)
            .unwrap_or_else(|_| data_type.empty_value());
        ReadEnvelope::error(
            err.to_string(),
            partial,
            format!("{data_type:?}"),
            EnvelopeMeta {
                address_type: Some(match base.kind {
                    AddressKind::Word => "word".to_string(),
                    AddressKind::Bit => "bit".to_string(),
                }),
                original_address: Some(address_str.to_string()),
                memory_area: Some(base.area.to_string()),
                word_address: Some(base.word_address),
                bit_index: base.bit_number,
                read_chunks: Some(chunks_attempted),
                offset_bytes: None,
            },
            debug,
        )
    }

    fn read_word_chunk(
        &mut self,
        parsed: &ParsedAddress,
        count: u16,
        sid: u8,
        debug: &mut DebugTrace,
    ) -> Result<Vec<u8>> {
        let cmd = ReadWordCommand::new(
            self.destination,
            self.source,
            sid,
            parsed.area,
            parsed.word_address,
            count,
        )?;
        let response = self.roundtrip(&cmd.to_bytes(), sid, debug)?;
        response.check_end_code()?;
        Ok(response.text)
    }

    fn read_bit_chunk(
        &mut self,
        parsed: &ParsedAddress,
        sid: u8,
        debug: &mut DebugTrace,
    ) -> Result<Vec<u8>> {
        let bit = parsed.bit_number.unwrap_or(0);
        let cmd = ReadBitCommand::new(
            self.destination,
            self.source,
            sid,
            parsed.area,
            parsed.word_address,
            bit,
        )?;
        let response = self.roundtrip(&cmd.to_bytes()?, sid, debug)?;
        response.check_end_code()?;
        Ok(response.text)
    }

    /// Reads CPU identity: device name, boot version, model number, OS version.
    pub fn cpu_identity_read(&mut self) -> IdentityEnvelope {
        let sid = self.next_sid();
        let cmd = CpuIdentityReadCommand::new(self.destination, self.source, sid);
        let mut debug = DebugTrace::default();

        let response = match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
            Ok(r) => r,
            Err(e) => {
                return IdentityEnvelope::error(
                    e.to_string(),
                    CpuIdentity::default(),
                    "CpuIdentity",
                    EnvelopeMeta::default(),
                    debug,
                )
            }
        };

        if let Err(e) = response.check_end_code() {
            return IdentityEnvelope::error(
                e.to_string(),
                CpuIdentity::default(),
                "CpuIdentity",
                EnvelopeMeta::default(),
                debug,
            );
        }

        let text = &response.text;
        let slice = |range: std::ops::Range<usize>| -> String {
            text.get(range)
                .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
                .unwrap_or_default()
        };

        let identity = CpuIdentity {
            unit_name: slice(0..20),
            boot_version: slice(20..25),
            model_number: slice(28..32),
            os_version: slice(32..37),
        };

        IdentityEnvelope::success(identity, "CpuIdentity", EnvelopeMeta::default(), debug)
    }

    /// Reads CPU run/stop status and operating mode.
    pub fn cpu_status_read(&mut self) -> StatusEnvelope {
        let sid = self.next_sid();
        let cmd = CpuStatusReadCommand::new(self.destination, self.source, sid);
        let mut debug = DebugTrace::default();

        let response = match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
            Ok(r) => r,
            Err(e) => {
                return StatusEnvelope::error(
                    e.to_string(),
                    CpuStatus::default(),
                    "CpuStatus",
                    EnvelopeMeta::default(),
                    debug,
                )
            }
        };

        if let Err(e) = response.check_end_code() {
            return StatusEnvelope::error(
                e.to_string(),
                CpuStatus::default(),
                "CpuStatus",
                EnvelopeMeta::default(),
                debug,
            );
        }

        let status = match response.text.get(4) {
            Some(0x00) => "Stop",
            Some(0x01) => "Run",
            Some(0x80) => "Standby",
            _ => "unknown status",
        };
        let mode = match response.text.get(5) {
            Some(0x00) => "Program",
            Some(0x02) => "Monitor",
            Some(0x04) => "Run",
            _ => "unknown mode",
        };

        if self.debug {
            if let Some(fatal) = response.text.get(6..8) {
                debug.fatal_error_hex = Some(to_hex(fatal));
            }
            if let Some(non_fatal) = response.text.get(8..10) {
                debug.non_fatal_error_hex = Some(to_hex(non_fatal));
            }
        }

        StatusEnvelope::success(
            CpuStatus {
                status: status.to_string(),
                mode: mode.to_string(),
            },
            "CpuStatus",
            EnvelopeMeta::default(),
            debug,
        )
    }

    /// Reads the PLC's real-time clock as an ISO-8601 local civil date-time.
    pub fn clock_read(&mut self) -> ClockEnvelope {
        let sid = self.next_sid();
        let cmd = ClockReadCommand::new(self.destination, self.source, sid);
        let mut debug = DebugTrace::default();

        let response = match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
            Ok(r) => r,
            Err(e) => {
                return ClockEnvelope::error(e.to_string(), String::new(), "Clock", EnvelopeMeta::default(), debug)
            }
        };

        if let Err(e) = response.check_end_code() {
            return ClockEnvelope::error(e.to_string(), String::new(), "Clock", EnvelopeMeta::default(), debug);
        }

        if response.text.len() < 6 {
            return ClockEnvelope::error(
                "clock response too short",
                String::new(),
                "Clock",
                EnvelopeMeta::default(),
                debug,
            );
        }

        match decode_clock(&response.text[..6]) {
            Ok(iso) => ClockEnvelope::success(iso, "Clock", EnvelopeMeta::default(), debug),
            Err(e) => ClockEnvelope::error(e.to_string(), String::new(), "Clock", EnvelopeMeta::default(), debug),
        }
    }

    /// Switches the PLC to Run mode.
    pub fn mode_run(&mut self) -> ModeEnvelope {
        let sid = self.next_sid();
        let cmd = RunCommand::new(self.destination, self.source, sid, RunMode::Run);
        let mut debug = DebugTrace::default();

        match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
            Ok(r) => match r.check_end_code() {
                Ok(()) => ModeEnvelope::success((), "Mode", EnvelopeMeta::default(), debug),
                Err(e) => ModeEnvelope::error(e.to_string(), (), "Mode", EnvelopeMeta::default(), debug),
            },
            Err(e) => ModeEnvelope::error(e.to_string(), (), "Mode", EnvelopeMeta::default(), debug),
        }
    }

    /// Switches the PLC to Program mode.
    pub fn mode_program(&mut self) -> ModeEnvelope {
        let sid = self.next_sid();
        let cmd = StopCommand::new(self.destination, self.source, sid);
        let mut debug = DebugTrace::default();

        match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
            Ok(r) => match r.check_end_code() {
                Ok(()) => ModeEnvelope::success((), "Mode", EnvelopeMeta::default(), debug),
                Err(e) => ModeEnvelope::error(e.to_string(), (), "Mode", EnvelopeMeta::default(), debug),
            },
            Err(e) => ModeEnvelope::error(e.to_string(), (), "Mode", EnvelopeMeta::default(), debug),
        }
    }

    /// Reads the user program area into `path`, iterating chunked reads
    /// until the PLC signals the last chunk.
    pub fn program_area_read(&mut self, path: impl AsRef<Path>) -> ProgramReadEnvelope {
        let mut debug = DebugTrace::default();
        let mut start_word: u32 = 0;
        let mut total_written = 0usize;

        let mut file = match File::create(path.as_ref()) {
            Ok(f) => f,
            Err(e) => {
                return ProgramReadEnvelope::error(
                    e.to_string(),
                    0,
                    "ProgramArea",
                    EnvelopeMeta::default(),
                    debug,
                )
            }
        };

        loop {
            let sid = self.next_sid();
            let cmd = ProgramAreaReadCommand::new(
                self.destination,
                self.source,
                sid,
                start_word,
                PROGRAM_CHUNK_BYTES,
            );

            let response = match self.roundtrip(&cmd.to_bytes(), sid, &mut debug) {
                Ok(r) => r,
                Err(e) => {
                    return ProgramReadEnvelope::error(
                        e.to_string(),
                        total_written,
                        "ProgramArea",
                        EnvelopeMeta::default(),
                        debug,
                    )
                }
            };
            if let Err(e) = response.check_end_code() {
                return ProgramReadEnvelope::error(
                    e.to_string(),
                    total_written,
                    "ProgramArea",
                    EnvelopeMeta::default(),
                    debug,
                );
            }
            if response.text.len() < PROGRAM_PREFIX_LEN {
                return ProgramReadEnvelope::error(
                    "program area response shorter than prefix",
                    total_written,
                    "ProgramArea",
                    EnvelopeMeta::default(),
                    debug,
                );
            }

            let is_last = response.text[0] & 0x80 != 0;
            let program_bytes = &response.text[PROGRAM_PREFIX_LEN..];
            if let Err(e) = file.write_all(program_bytes) {
                return ProgramReadEnvelope::error(
                    e.to_string(),
                    total_written,
                    "ProgramArea",
                    EnvelopeMeta::default(),
                    debug,
                );
            }
            total_written += program_bytes.len();
            start_word += program_bytes.len() as u32;

            if is_last || program_bytes.is_empty() {
                break;
            }
        }

        ProgramReadEnvelope::success(total_written, "ProgramArea", EnvelopeMeta::default(), debug)
    }

    /// Writes `path`'s contents to the user program area.
    ///
    /// Forces the PLC into Program mode before the sequence and restores Run
    /// mode afterward, on both the success and failure paths.
    pub fn program_area_write(&mut self, path: impl AsRef<Path>) -> ProgramWriteEnvelope {
        let mut debug = DebugTrace::default();
        let mut contents = Vec::new();
        if let Err(e) = File::open(path.as_ref()).and_then(|mut f| f.read_to_end(&mut contents)) {
            return ProgramWriteEnvelope::error(
                e.to_string(),
                (),
                "ProgramArea",
                EnvelopeMeta::default(),
                debug,
            );
        }

        if let Err(e) = self.mode_program().into_result() {
            return ProgramWriteEnvelope::error(
                e.to_string(),
                (),
                "ProgramArea",
                EnvelopeMeta::default(),
                debug,
            );
        }

        let result = self.program_area_write_chunks(&contents, &mut debug);

        // Always attempt to restore Run mode, even if the write failed.
        let restore = self.mode_run().into_result();

        match (result, restore) {
            (Ok(()), Ok(())) => ProgramWriteEnvelope::success((), "ProgramArea", EnvelopeMeta::default(), debug),
            (Err(e), _) => ProgramWriteEnvelope::error(e.to_string(), (), "ProgramArea", EnvelopeMeta::default(), debug),
            (Ok(()), Err(e)) => ProgramWriteEnvelope::error(
                format!("write succeeded but mode restore failed: {e}"),
                (),
                "ProgramArea",
                EnvelopeMeta::default(),
                debug,
            ),
        }
    }

    fn program_area_write_chunks(&mut self, contents: &[u8], debug: &mut DebugTrace) -> Result<()> {
        let mut start_word: u32 = 0;
        let mut offset = 0usize;

        loop {
            let remaining = &contents[offset..];
            let chunk_len = remaining.len().min(PROGRAM_CHUNK_BYTES as usize);
            let is_last = chunk_len == remaining.len();
            let chunk = remaining[..chunk_len].to_vec();

            let sid = self.next_sid();
            let cmd = ProgramAreaWriteCommand::new(
                self.destination,
                self.source,
                sid,
                start_word,
                chunk,
                is_last,
            );
            let response = self.roundtrip(&cmd.to_bytes(), sid, debug)?;
            response.check_end_code()?;

            offset += chunk_len;
            start_word += chunk_len as u32;

            if is_last {
                return Ok(());
            }
        }
    }
}

/// Lower-case hex encoding for debug traces, without pulling in the `hex`
/// crate (kept a dev-dependency for tests and doctests only).
fn to_hex(data: impl AsRef<[u8]>) -> String {
    data.as_ref()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Decodes the six-byte BCD clock body into an ISO-8601 local civil date-time.
fn decode_clock(bytes: &[u8]) -> Result<String> {
    let year_raw = crate::codec::bcd_group_to_decimal([0, bytes[0]])?;
    let year = if year_raw <= 69 {
        2000 + year_raw
    } else {
        1900 + year_raw
    };
    let month = crate::codec::bcd_group_to_decimal([0, bytes[1]])?;
    let day = crate::codec::bcd_group_to_decimal([0, bytes[2]])?;
    let hour = crate::codec::bcd_group_to_decimal([0, bytes[3]])?;
    let minute = crate::codec::bcd_group_to_decimal([0, bytes[4]])?;
    let second = crate::codec::bcd_group_to_decimal([0, bytes[5]])?;

    Ok(format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
    ))
}

impl<T> crate::envelope::FinsEnvelope<T> {
    /// Converts an envelope into a `Result`, discarding the success payload.
    ///
    /// Used internally to compose multi-step operations (e.g. program-area
    /// write's force-mode/restore-mode sequence) with `?`.
    fn into_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(FinsError::decode(self.message))
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10);

        assert_eq!(config.plc_addr.ip(), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(config.plc_addr.port(), DEFAULT_FINS_PORT);
        assert_eq!(config.source.node, 1);
        assert_eq!(config.destination.node, 10);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.debug);
    }

    #[test]
    fn test_client_config_with_port() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10).with_port(9601);
        assert_eq!(config.plc_addr.port(), 9601);
    }

    #[test]
    fn test_client_config_with_timeout() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10)
            .with_timeout(Duration::from_secs(10));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_config_with_network() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10)
            .with_source_network(1)
            .with_dest_network(2);

        assert_eq!(config.source.network, 1);
        assert_eq!(config.destination.network, 2);
    }

    #[test]
    fn test_client_config_with_debug() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 10), 1, 10).with_debug(true);
        assert!(config.debug);
    }

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::new(Ipv4Addr::new(127, 0, 0, 1), 1, 10);
        let client = Client::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_auto_fills_destination_node() {
        let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 42), 1, 0);
        let client = Client::new(config).unwrap();
        assert_eq!(client.destination().node, 42);
    }

    #[test]
    fn test_client_sid_increment() {
        let config = ClientConfig::new(Ipv4Addr::new(127, 0, 0, 1), 1, 10);
        let client = Client::new(config).unwrap();

        assert_eq!(client.next_sid(), 0);
        assert_eq!(client.next_sid(), 1);
        assert_eq!(client.next_sid(), 2);
    }

    #[test]
    fn test_client_debug() {
        let config = ClientConfig::new(Ipv4Addr::new(127, 0, 0, 1), 1, 10);
        let client = Client::new(config).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("Client"));
    }

    #[test]
    fn test_read_invalid_address_short_circuits() {
        let config = ClientConfig::new(Ipv4Addr::new(127, 0, 0, 1), 1, 10)
            .with_timeout(Duration::from_millis(50));
        let mut client = Client::new(config).unwrap();
        let envelope = client.read("Q100");
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_decode_clock_pre_2000() {
        // 1995-06-15 08:30:00
        let bytes = [0x95, 0x06, 0x15, 0x08, 0x30, 0x00];
        assert_eq!(decode_clock(&bytes).unwrap(), "1995-06-15T08:30:00");
    }

    #[test]
    fn test_decode_clock_post_2000() {
        let bytes = [0x25, 0x07, 0x01, 0x10, 0x30, 0x00];
        assert_eq!(decode_clock(&bytes).unwrap(), "2025-07-01T10:30:00");
    }
}
