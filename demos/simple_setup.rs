//! Example: client configuration and PLC mode control
//!
//! This example demonstrates:
//! - Client configuration with custom settings
//! - PLC run/program mode control
//! - Network addressing configuration
//! - Reading envelopes instead of matching on a bare error

use omron_fins::{Client, ClientConfig};
use std::net::Ipv4Addr;
use std::time::Duration;

fn main() -> omron_fins::Result<()> {
    // ClientConfig::new(ip, source_node, dest_node) creates a basic
    // configuration. Passing dest_node 0 lets the client auto-fill the
    // destination node from the PLC's IPv4 address.
    let basic_config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0);
    println!("Basic config: {:?}", basic_config);

    // For complex setups: custom port, longer timeout, multi-network
    // addressing, and hex frame tracing in every returned envelope.
    let advanced_config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0)
        .with_port(9600)
        .with_timeout(Duration::from_secs(5))
        .with_source_network(0)
        .with_source_unit(0)
        .with_dest_network(0)
        .with_dest_unit(0)
        .with_debug(true);
    println!("Advanced config: {:?}", advanced_config);

    println!("\nAttempting to connect...");

    match Client::new(basic_config) {
        Ok(mut client) => {
            println!("Client created successfully!");
            println!("  Source: {:?}", client.source());
            println!("  Destination: {:?}", client.destination());

            // Mode changes return an envelope, not a bare Result.
            let status = client.mode_program();
            if status.is_success() {
                println!("PLC switched to Program mode");
            } else {
                println!("mode_program failed: {}", status.message);
            }

            let status = client.mode_run();
            if status.is_success() {
                println!("PLC switched to Run mode");
            } else {
                println!("mode_run failed: {}", status.message);
            }
        }
        Err(e) => {
            println!("Connection error (expected if no PLC is reachable): {e}");
            println!("\nTo test this example, ensure:");
            println!("  1. PLC is powered on and connected to network");
            println!("  2. PLC IP address matches the configuration");
            println!("  3. FINS UDP port (9600) is not blocked");
        }
    }

    println!("\nSee simple_read.rs for data operations.");
    Ok(())
}
