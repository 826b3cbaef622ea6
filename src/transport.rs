//! UDP transport layer for FINS communication.
//!
//! This module provides the [`UdpTransport`] struct which handles low-level
//! UDP communication with Omron PLCs. The transport layer is completely
//! separated from the protocol layer—it only knows about sockets and bytes.
//!
//! # Design
//!
//! The transport layer follows these principles:
//!
//! - **Protocol agnostic** - Handles only byte transmission, no FINS knowledge
//! - **Synchronous** - Blocking send/receive with configurable timeout
//! - **Simple** - One socket, one remote address, no connection pooling
//! - **Explicit lifecycle** - `Closed -> Open -> Closed`; `execute()` only
//!   works while open
//!
//! # Constants
//!
//! - [`DEFAULT_FINS_PORT`] - Default FINS UDP port (9600)
//! - [`DEFAULT_TIMEOUT`] - Default timeout (5 seconds)
//! - [`MAX_PACKET_SIZE`] - Maximum UDP packet size (4096 bytes)
//!
//! # Example
//!
//! The transport is typically used through the [`Client`](crate::Client) struct,
//! but can be used directly for custom implementations:
//!
//! ```no_run
//! use omron_fins::UdpTransport;
//! use std::time::Duration;
//!
//! let mut transport = UdpTransport::new(
//!     "192.168.1.10:9600".parse().unwrap(),
//!     Duration::from_secs(5),
//! );
//! transport.connect().unwrap();
//!
//! let request = vec![0x80, 0x00, 0x02, /* ... rest of FINS frame */];
//! let response = transport.execute(&request);
//! transport.disconnect();
//! ```

use log::{debug, trace, warn};
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use crate::error::{FinsError, Result};

/// Default FINS UDP port.
pub const DEFAULT_FINS_PORT: u16 = 9600;

/// Default timeout for UDP operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum UDP datagram size accepted from a PLC.
pub const MAX_PACKET_SIZE: usize = 4096;

/// UDP transport for FINS communication.
///
/// Holds a bound-but-unconnected socket so inbound datagrams are matched
/// against the configured peer explicitly, rather than relying on the OS to
/// filter by a connected 4-tuple.
pub struct UdpTransport {
    remote_addr: SocketAddr,
    timeout: Duration,
    socket: Option<UdpSocket>,
}

impl UdpTransport {
    /// Creates a new, unopened transport for the given PLC address.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::UdpTransport;
    /// use std::time::Duration;
    ///
    /// let transport = UdpTransport::new(
    ///     "192.168.1.10:9600".parse().unwrap(),
    ///     Duration::from_secs(5),
    /// );
    /// assert!(!transport.is_open());
    /// ```
    pub fn new(remote_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            remote_addr,
            timeout,
            socket: None,
        }
    }

    /// Creates a new transport with the default timeout.
    pub fn with_default_timeout(remote_addr: SocketAddr) -> Self {
        Self::new(remote_addr, DEFAULT_TIMEOUT)
    }

    /// Opens the underlying socket.
    ///
    /// Binds an ephemeral local port and configures the read/write timeout.
    /// Calling `connect` while already open is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the socket cannot be created or configured.
    pub fn connect(&mut self) -> Result<()> {
        if self.socket.is_some() {
            return Ok(());
        }
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_read_timeout(Some(self.timeout))?;
        socket.set_write_timeout(Some(self.timeout))?;
        debug!(
            "transport opened: local {:?}, remote {}",
            socket.local_addr().ok(),
            self.remote_addr
        );
        self.socket = Some(socket);
        Ok(())
    }

    /// Closes the underlying socket. Idempotent.
    pub fn disconnect(&mut self) {
        if self.socket.take().is_some() {
            debug!("transport closed: remote {}", self.remote_addr);
        }
    }

    /// Returns whether the transport currently holds an open socket.
    pub fn is_open(&self) -> bool {
        self.socket.is_some()
    }

    /// Sends a FINS frame and returns the matching response.
    ///
    /// Sends exactly one datagram and blocks for exactly one inbound
    /// datagram. A datagram whose source address is not the configured peer
    /// is rejected with [`FinsError::PeerMismatch`] rather than silently
    /// retried, since a single `execute()` call represents one request.
    ///
    /// # Errors
    ///
    /// - [`FinsError::TransportNotReady`] if the transport has not been
    ///   [`connect`](Self::connect)ed.
    /// - [`FinsError::TransportTimeout`] if no datagram arrives before the
    ///   configured timeout.
    /// - [`FinsError::PeerMismatch`] if a datagram arrives from a different
    ///   address.
    /// - [`FinsError::Io`] for any other I/O failure. A broken-pipe /
    ///   not-connected OS error also closes the transport so a subsequent
    ///   call fails fast with `TransportNotReady`.
    pub fn execute(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let socket = self.socket.as_ref().ok_or(FinsError::TransportNotReady)?;

        trace!("-> {} bytes to {}: {}", data.len(), self.remote_addr, hex_preview(data));
        if let Err(e) = socket.send_to(data, self.remote_addr) {
            if is_broken(&e) {
                self.socket = None;
            }
            return Err(FinsError::Io(e));
        }

        let mut buffer = vec![0u8; MAX_PACKET_SIZE];
        match socket.recv_from(&mut buffer) {
            Ok((size, from)) => {
                buffer.truncate(size);
                if from != self.remote_addr {
                    warn!("datagram from unexpected peer {from}, expected {}", self.remote_addr);
                    return Err(FinsError::peer_mismatch(
                        self.remote_addr.to_string(),
                        from.to_string(),
                    ));
                }
                trace!("<- {} bytes from {}: {}", buffer.len(), from, hex_preview(&buffer));
                Ok(buffer)
            }
            Err(e) if is_timeout(&e) => Err(FinsError::TransportTimeout),
            Err(e) => {
                if is_broken(&e) {
                    self.socket = None;
                }
                Err(FinsError::Io(e))
            }
        }
    }

    /// Returns the remote PLC address.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }
}

fn is_timeout(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}

fn is_broken(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::NotConnected
            | std::io::ErrorKind::BrokenPipe
    )
}

fn hex_preview(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join("")
}

impl std::fmt::Debug for UdpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UdpTransport")
            .field("remote_addr", &self.remote_addr)
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_FINS_PORT, 9600);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(5));
        assert_eq!(MAX_PACKET_SIZE, 4096);
    }

    #[test]
    fn test_transport_starts_closed() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let transport = UdpTransport::new(addr, Duration::from_millis(100));
        assert!(!transport.is_open());
        assert_eq!(transport.remote_addr(), addr);
    }

    #[test]
    fn test_connect_opens_transport() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(100));
        transport.connect().unwrap();
        assert!(transport.is_open());
    }

    #[test]
    fn test_connect_idempotent() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(100));
        transport.connect().unwrap();
        transport.connect().unwrap();
        assert!(transport.is_open());
    }

    #[test]
    fn test_disconnect_closes_transport() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(100));
        transport.connect().unwrap();
        transport.disconnect();
        assert!(!transport.is_open());
    }

    #[test]
    fn test_disconnect_idempotent() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(100));
        transport.disconnect();
        assert!(!transport.is_open());
    }

    #[test]
    fn test_execute_before_connect_fails() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(100));
        let result = transport.execute(&[0x80]);
        assert!(matches!(result, Err(FinsError::TransportNotReady)));
    }

    #[test]
    fn test_execute_times_out_with_no_peer() {
        // Port 1 is reserved and nothing answers; the call must time out
        // rather than hang.
        let addr: SocketAddr = "127.0.0.1:1".parse().unwrap();
        let mut transport = UdpTransport::new(addr, Duration::from_millis(50));
        transport.connect().unwrap();
        let result = transport.execute(&[0x80, 0x00, 0x02]);
        assert!(result.is_err());
    }

    #[test]
    fn test_transport_debug() {
        let addr: SocketAddr = "127.0.0.1:9600".parse().unwrap();
        let transport = UdpTransport::new(addr, Duration::from_millis(100));
        let debug_str = format!("{:?}", transport);
        assert!(debug_str.contains("UdpTransport"));
        assert!(debug_str.contains("127.0.0.1:9600"));
    }
}
