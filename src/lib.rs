//! # Omron FINS Protocol Library
//!
//! A Rust library for communicating with Omron PLCs using the FINS (Factory
//! Interface Network Service) protocol over UDP.
//!
//! This is a **protocol-only** library — no business logic, polling,
//! schedulers, or application-level features. Each call produces exactly 1
//! request and 1 response per chunk. No automatic retries or reconnection.
//!
//! ## Features
//!
//! - **Protocol-only** — focuses solely on FINS protocol implementation
//! - **Deterministic** — each call produces exactly 1 request/response pair
//!   per chunk, with reads over 990 words transparently chunked
//! - **Type-safe** — memory areas as enums, typed decoders for reads
//! - **No panics** — all errors returned as `Result<T, FinsError>`, and every
//!   client operation returns a structured envelope rather than a bare error
//! - **Focused command set** — memory read (word/bit), run/program mode
//!   control, CPU identity/status, clock, and program-area transfer; it does
//!   not implement the full FINS command set (no memory write, fill,
//!   transfer, or forced set/reset at the client facade)
//!
//! ## Quick Start
//!
//! ```no_run
//! use omron_fins::{Client, ClientConfig};
//! use std::net::Ipv4Addr;
//!
//! fn main() -> omron_fins::Result<()> {
//!     let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0);
//!     let mut client = Client::new(config)?;
//!
//!     let envelope = client.read("D100");
//!     println!("D100 = {:?}", envelope.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Memory Areas
//!
//! | Area | Description | Word Access | Bit Access |
//! |------|-------------|:-----------:|:----------:|
//! | [`MemoryArea::Cio`] | Core I/O - inputs, outputs, internal relays | ✓ | ✓ |
//! | [`MemoryArea::Work`] | Work area - temporary work bits/words | ✓ | ✓ |
//! | [`MemoryArea::Holding`] | Holding area - retentive bits/words | ✓ | ✓ |
//! | [`MemoryArea::DataMemory`] | Data Memory - numeric data storage | ✓ | ✓ |
//! | [`MemoryArea::Auxiliary`] | Auxiliary Relay - system status/control | ✓ | ✗ |
//! | [`MemoryArea::Timer`] | Timer completion flags/present values | ✓ | ✗ |
//! | [`MemoryArea::Counter`] | Counter completion flags/present values | ✓ | ✗ |
//! | [`MemoryArea::ExtendedMemory`] | Banked extended data memory | ✓ | ✓ |
//!
//! ## Address grammar
//!
//! `client.read(...)`/`read_as(...)` accept an address string: a bare number
//! or CIO prefix selects the area, an optional `.<0-15>` suffix switches from
//! word to bit access. See [`address::parse`] for the full grammar.
//!
//! ```no_run
//! # use omron_fins::{Client, ClientConfig, codec::DataType};
//! # use std::net::Ipv4Addr;
//! # let mut client = Client::new(ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0)).unwrap();
//! let word = client.read("D100");
//! let bit = client.read("D100.5");
//! let temperature = client.read_as("D200", DataType::Float, 1);
//! # Ok::<(), omron_fins::FinsError>(())
//! ```
//!
//! ## PLC control and diagnostics
//!
//! ```no_run
//! # use omron_fins::{Client, ClientConfig};
//! # use std::net::Ipv4Addr;
//! # let mut client = Client::new(ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0)).unwrap();
//! let identity = client.cpu_identity_read();
//! let status = client.cpu_status_read();
//! let clock = client.clock_read();
//! client.mode_program();
//! client.mode_run();
//! # Ok::<(), omron_fins::FinsError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every public operation returns a [`FinsEnvelope`] rather than a bare
//! `Result`: success and failure share one shape, distinguished by `status`,
//! so a chunked read that fails partway through still surfaces whatever was
//! successfully decoded. Lower-level building blocks ([`FinsResponse`],
//! [`address::parse`], commands) still use [`Result<T, FinsError>`].
//!
//! ```no_run
//! use omron_fins::{Client, ClientConfig};
//! use std::net::Ipv4Addr;
//!
//! let mut client = Client::new(ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0))?;
//! let envelope = client.read("D100");
//! if !envelope.is_success() {
//!     println!("read failed: {}", envelope.message);
//! }
//! # Ok::<(), omron_fins::FinsError>(())
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use omron_fins::ClientConfig;
//! use std::net::Ipv4Addr;
//! use std::time::Duration;
//!
//! let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0)
//!     .with_port(9601)
//!     .with_timeout(Duration::from_secs(5))
//!     .with_source_network(1)
//!     .with_dest_network(2)
//!     .with_debug(true);
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Each operation does exactly what it says
//! 2. No magic or implicit behavior
//! 3. The application has full control over retry, caching, and reconnection
//! 4. Failures are always explicit, described, and carry partial data

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod address;
mod client;
pub mod codec;
mod command;
pub mod endcode;
mod envelope;
mod error;
mod header;
mod memory;
mod response;
mod transport;

// Public re-exports
pub use address::{parse as parse_address, AddressKind, ParsedAddress};
pub use client::{Client, ClientConfig};
pub use codec::{DataType, ReadValue};
pub use command::{
    Address, ClockReadCommand, CpuIdentityReadCommand, CpuStatusReadCommand, PlcMode,
    ProgramAreaReadCommand, ProgramAreaWriteCommand, ReadBitCommand, ReadWordCommand, RunCommand,
    StopCommand, MAX_WORDS_PER_COMMAND,
};
pub use endcode::{lookup as lookup_end_code, EndCodeClass, EndCodeInfo};
pub use envelope::{
    ClockEnvelope, CpuIdentity, CpuStatus, DebugTrace, EnvelopeMeta, EnvelopeStatus, FinsEnvelope,
    IdentityEnvelope, ModeEnvelope, ProgramReadEnvelope, ProgramWriteEnvelope, ReadEnvelope,
    StatusEnvelope,
};
pub use error::{FinsError, Result};
pub use header::{FinsHeader, NodeAddress, FINS_HEADER_SIZE};
pub use memory::{lookup_area_code, MemoryArea};
pub use response::FinsResponse;
pub use transport::{UdpTransport, DEFAULT_FINS_PORT, DEFAULT_TIMEOUT, MAX_PACKET_SIZE};
