//! Example: reading data and diagnostics from a PLC
//!
//! This example demonstrates:
//! - Reading words and bits through the address-string grammar
//! - Typed reads via `DataType`
//! - CPU identity, status, and clock reads
//! - Inspecting a failed read's partial-data envelope

use omron_fins::codec::DataType;
use omron_fins::{Client, ClientConfig};
use std::net::Ipv4Addr;

fn main() -> omron_fins::Result<()> {
    let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0);
    let mut client = Client::new(config)?;

    println!("=== Reading Words ===\n");

    // Default read is one INT16.
    let dm0 = client.read("D100");
    println!("D100 = {:?} ({})", dm0.data, dm0.message);

    // Read 10 words at once by requesting a wider type or letting the
    // pipeline chunk a larger request transparently.
    let dm100 = client.read_as("D100", DataType::UInt16, 1);
    println!("D100 (u16) = {:?}", dm100.data);

    let cio0 = client.read("0");
    let wr0 = client.read("W0");
    let hr0 = client.read("H0");
    println!("CIO0 = {:?}", cio0.data);
    println!("W0   = {:?}", wr0.data);
    println!("H0   = {:?}", hr0.data);

    println!("\n=== Reading Bits ===\n");

    let bit = client.read("0.05");
    println!("CIO 0.05 = {:?}", bit.data);

    println!("\n=== Typed Reads ===\n");

    let temperature = client.read_as("D200", DataType::Float, 2);
    println!("Temperature (f32 from D200-201): {:?}", temperature.data);

    let precision = client.read_as("D210", DataType::Double, 3);
    println!("Precision value (f64 from D210-213): {:?}", precision.data);

    let counter = client.read_as("D220", DataType::Int32, 4);
    println!("Counter (i32 from D220-221): {:?}", counter.data);

    println!("\n=== CPU Diagnostics ===\n");

    let identity = client.cpu_identity_read();
    println!("Identity: {:?}", identity.data);

    let status = client.cpu_status_read();
    println!("Status: {:?}", status.data);

    let clock = client.clock_read();
    println!("Clock: {}", clock.data);

    println!("\n=== Failure handling ===\n");

    // An unsupported address prefix short-circuits before any I/O and
    // carries an empty typed value rather than panicking.
    let bad = client.read("Q100");
    if !bad.is_success() {
        println!("read(\"Q100\") failed as expected: {}", bad.message);
    }

    println!("\nRead example completed!");
    Ok(())
}
