//! Example: transferring the user program area to and from a file
//!
//! This example demonstrates:
//! - Backing up the PLC's program area to a local file
//! - Restoring a program area from a file (forces Program mode, restores
//!   Run mode afterward regardless of outcome)

use omron_fins::{Client, ClientConfig};
use std::net::Ipv4Addr;

fn main() -> omron_fins::Result<()> {
    let config = ClientConfig::new(Ipv4Addr::new(192, 168, 1, 250), 1, 0);
    let mut client = Client::new(config)?;

    println!("=== Program Area Backup ===\n");

    let backup = client.program_area_read("program_backup.bin");
    if backup.is_success() {
        println!("Backed up {} bytes to program_backup.bin", backup.data);
    } else {
        println!("Backup failed: {}", backup.message);
    }

    println!("\n=== Program Area Restore ===\n");

    // WARNING: overwrites the PLC's running program. The client forces
    // Program mode before writing and restores Run mode afterward, even if
    // the write itself fails partway through.
    let restore = client.program_area_write("program_backup.bin");
    if restore.is_success() {
        println!("Program area restored");
    } else {
        println!("Restore failed: {}", restore.message);
    }

    println!("\nWrite example completed!");
    Ok(())
}
