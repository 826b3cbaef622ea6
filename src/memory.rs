//! Memory area definitions for FINS protocol.
//!
//! Omron PLCs expose several distinct logical memory regions, each reachable
//! through its own word-access and (usually) bit-access byte code. The table
//! here is the full catalogue; [`crate::address`] drives it to resolve the
//! subset of areas reachable through the address-string grammar.

use crate::error::{FinsError, Result};

/// A memory area reachable through the address-string grammar.
///
/// Timer and Counter share a single word-access code on real PLCs and are
/// distinguished only by the numeric offset applied to the address (see
/// [`crate::address`]); neither has a bit-access form in this grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryArea {
    /// CIO (Core I/O) area - general purpose I/O and internal relays.
    Cio,
    /// Work area - work bits/words.
    Work,
    /// Holding area - holding bits/words that retain their value on power loss.
    Holding,
    /// Auxiliary area - system-maintained status bits/words.
    Auxiliary,
    /// Data Memory area - general purpose word (and bit) storage.
    DataMemory,
    /// Timer area - word access only (present value reads).
    Timer,
    /// Counter area - word access only (present value reads); addresses are
    /// offset by `0x0800` relative to the raw counter number.
    Counter,
    /// Extended Memory, one of banks `0`-`F`.
    ExtendedMemory(u8),
}

impl MemoryArea {
    /// Returns the FINS code for word access to this memory area.
    pub(crate) fn word_code(self) -> u8 {
        match self {
            MemoryArea::Cio => 0xB0,
            MemoryArea::Work => 0xB1,
            MemoryArea::Holding => 0xB2,
            MemoryArea::Auxiliary => 0xB3,
            MemoryArea::DataMemory => 0x82,
            MemoryArea::Timer | MemoryArea::Counter => 0x89,
            MemoryArea::ExtendedMemory(bank) => em_word_code(bank),
        }
    }

    /// Returns the FINS code for bit access to this memory area.
    ///
    /// # Errors
    ///
    /// Returns [`FinsError::InvalidAddress`] if the area has no bit-access
    /// form in this grammar (Timer, Counter).
    pub(crate) fn bit_code(self) -> Result<u8> {
        match self {
            MemoryArea::Cio => Ok(0x30),
            MemoryArea::Work => Ok(0x31),
            MemoryArea::Holding => Ok(0x32),
            MemoryArea::Auxiliary => Ok(0x33),
            MemoryArea::DataMemory => Ok(0x02),
            MemoryArea::ExtendedMemory(bank) => Ok(em_bit_code(bank)),
            MemoryArea::Timer | MemoryArea::Counter => Err(FinsError::invalid_address(
                "",
                format!("{self} has no bit-access form"),
            )),
        }
    }

    /// Returns whether this memory area supports bit access in this grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use omron_fins::MemoryArea;
    ///
    /// assert!(MemoryArea::Cio.supports_bit_access());
    /// assert!(!MemoryArea::Timer.supports_bit_access());
    /// ```
    pub fn supports_bit_access(self) -> bool {
        !matches!(self, MemoryArea::Timer | MemoryArea::Counter)
    }
}

impl std::fmt::Display for MemoryArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryArea::Cio => write!(f, "CIO"),
            MemoryArea::Work => write!(f, "Work Area"),
            MemoryArea::Holding => write!(f, "Holding Area"),
            MemoryArea::Auxiliary => write!(f, "Auxiliary Area"),
            MemoryArea::DataMemory => write!(f, "Data Memory"),
            MemoryArea::Timer => write!(f, "Timer"),
            MemoryArea::Counter => write!(f, "Counter"),
            MemoryArea::ExtendedMemory(bank) => write!(f, "Extended Memory EM{bank:X}"),
        }
    }
}

/// Word-access byte code for Extended Memory bank `0`-`F`.
///
/// Banks `0`-`9` and `A`-`F` occupy `0xA0`-`0xAF`; the table also recognises
/// the separate current-bank code `0x98` and banks `EM10`-`EM18` (`0x60`-`0x68`),
/// which this grammar's single-hex-digit bank selector cannot address
/// directly but which [`lookup_area_code`] still resolves by raw byte value.
fn em_word_code(bank: u8) -> u8 {
    debug_assert!(bank <= 0x0F);
    0xA0 + bank
}

/// Bit-access byte code for Extended Memory bank `0`-`F` (`0x20`-`0x2F`).
fn em_bit_code(bank: u8) -> u8 {
    debug_assert!(bank <= 0x0F);
    0x20 + bank
}

/// Access granularity of a memory-area byte code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    /// A word-access code.
    Word,
    /// A bit-access code.
    Bit,
}

/// A named entry in the full memory-area table, independent of whether it is
/// reachable through the address-string grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCodeInfo {
    /// Human-readable name.
    pub name: &'static str,
    /// Access granularity.
    pub kind: AreaKind,
}

/// Looks up a raw memory-area byte code against the full catalogue.
///
/// This covers every code the source defines, including the EM10-EM18
/// banks, current-bank registers, task flags and index/data registers that
/// have no address-string prefix in [`crate::address`]'s grammar. Returns
/// `None` for a code the catalogue does not define.
///
/// # Example
///
/// ```
/// use omron_fins::memory::{lookup_area_code, AreaKind};
///
/// let info = lookup_area_code(0x82).unwrap();
/// assert_eq!(info.name, "Data Memory");
/// assert_eq!(info.kind, AreaKind::Word);
/// ```
pub fn lookup_area_code(code: u8) -> Option<AreaCodeInfo> {
    use AreaKind::{Bit, Word};
    let entry = |name, kind| Some(AreaCodeInfo { name, kind });

    match code {
        0x30 => entry("CIO", Bit),
        0xB0 => entry("CIO", Word),
        0x70 => entry("CIO (forced)", Bit),
        0xF0 => entry("CIO (forced)", Word),
        0x31 => entry("Work Area", Bit),
        0xB1 => entry("Work Area", Word),
        0x71 => entry("Work Area (forced)", Bit),
        0xF1 => entry("Work Area (forced)", Word),
        0x32 => entry("Holding Area", Bit),
        0xB2 => entry("Holding Area", Word),
        0x72 => entry("Holding Area (forced)", Bit),
        0xF2 => entry("Holding Area (forced)", Word),
        0x33 => entry("Auxiliary Area", Bit),
        0xB3 => entry("Auxiliary Area", Word),
        0x02 => entry("Data Memory", Bit),
        0x82 => entry("Data Memory", Word),
        0x09 => entry("Timer/Counter Flag", Bit),
        0x49 => entry("Timer/Counter Flag (forced)", Bit),
        0x89 => entry("Timer/Counter", Word),
        0x20..=0x2F => entry(em_name(code - 0x20), Bit),
        0xA0..=0xAF => entry(em_name(code - 0xA0), Word),
        0xE0..=0xE8 => entry(em10_18_name(code - 0xE0), Bit),
        0x60..=0x68 => entry(em10_18_name(code - 0x60), Word),
        0x0A => entry("Extended Memory (current bank)", Bit),
        0x98 => entry("Extended Memory (current bank)", Word),
        0xBC => entry("Data Register / EM Bank Number", Word),
        0x06 => entry("Task Flag", Bit),
        0x46 => entry("Task Flag Status", Word),
        0xDC => entry("Index Register", Word),
        0x07 => entry("Clock Pulses / Condition Flags", Bit),
        _ => None,
    }
}

fn em_name(bank: u8) -> &'static str {
    const NAMES: [&str; 16] = [
        "Extended Memory EM0",
        "Extended Memory EM1",
        "Extended Memory EM2",
        "Extended Memory EM3",
        "Extended Memory EM4",
        "Extended Memory EM5",
        "Extended Memory EM6",
        "Extended Memory EM7",
        "Extended Memory EM8",
        "Extended Memory EM9",
        "Extended Memory EMA",
        "Extended Memory EMB",
        "Extended Memory EMC",
        "Extended Memory EMD",
        "Extended Memory EME",
        "Extended Memory EMF",
    ];
    NAMES[bank as usize]
}

fn em10_18_name(index: u8) -> &'static str {
    const NAMES: [&str; 9] = [
        "Extended Memory EM10",
        "Extended Memory EM11",
        "Extended Memory EM12",
        "Extended Memory EM13",
        "Extended Memory EM14",
        "Extended Memory EM15",
        "Extended Memory EM16",
        "Extended Memory EM17",
        "Extended Memory EM18",
    ];
    NAMES[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_codes() {
        assert_eq!(MemoryArea::Cio.word_code(), 0xB0);
        assert_eq!(MemoryArea::Work.word_code(), 0xB1);
        assert_eq!(MemoryArea::Holding.word_code(), 0xB2);
        assert_eq!(MemoryArea::Auxiliary.word_code(), 0xB3);
        assert_eq!(MemoryArea::DataMemory.word_code(), 0x82);
        assert_eq!(MemoryArea::Timer.word_code(), 0x89);
        assert_eq!(MemoryArea::Counter.word_code(), 0x89);
    }

    #[test]
    fn bit_codes() {
        assert_eq!(MemoryArea::Cio.bit_code().unwrap(), 0x30);
        assert_eq!(MemoryArea::Work.bit_code().unwrap(), 0x31);
        assert_eq!(MemoryArea::Holding.bit_code().unwrap(), 0x32);
        assert_eq!(MemoryArea::Auxiliary.bit_code().unwrap(), 0x33);
        assert_eq!(MemoryArea::DataMemory.bit_code().unwrap(), 0x02);
        assert!(MemoryArea::Timer.bit_code().is_err());
        assert!(MemoryArea::Counter.bit_code().is_err());
    }

    #[test]
    fn extended_memory_bank_codes() {
        assert_eq!(MemoryArea::ExtendedMemory(0).word_code(), 0xA0);
        assert_eq!(MemoryArea::ExtendedMemory(0xF).word_code(), 0xAF);
        assert_eq!(MemoryArea::ExtendedMemory(0).bit_code().unwrap(), 0x20);
        assert_eq!(MemoryArea::ExtendedMemory(0xF).bit_code().unwrap(), 0x2F);
    }

    #[test]
    fn supports_bit_access() {
        assert!(MemoryArea::Cio.supports_bit_access());
        assert!(MemoryArea::DataMemory.supports_bit_access());
        assert!(!MemoryArea::Timer.supports_bit_access());
        assert!(!MemoryArea::Counter.supports_bit_access());
    }

    #[test]
    fn display() {
        assert_eq!(MemoryArea::Cio.to_string(), "CIO");
        assert_eq!(MemoryArea::DataMemory.to_string(), "Data Memory");
        assert_eq!(MemoryArea::ExtendedMemory(0xA).to_string(), "Extended Memory EMA");
    }

    #[test]
    fn lookup_area_code_known() {
        let info = lookup_area_code(0xB0).unwrap();
        assert_eq!(info.name, "CIO");
        assert_eq!(info.kind, AreaKind::Word);
    }

    #[test]
    fn lookup_area_code_em10_18() {
        let info = lookup_area_code(0x60).unwrap();
        assert_eq!(info.name, "Extended Memory EM10");
        assert_eq!(info.kind, AreaKind::Word);
    }

    #[test]
    fn lookup_area_code_unknown() {
        assert!(lookup_area_code(0xFF).is_none());
    }
}
