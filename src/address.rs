//! Address-string parser.
//!
//! Translates addresses like `D100`, `D100.5`, `W10`, `E1A0`, or a bare `100`
//! into a [`MemoryArea`] plus word offset (and, for bit addresses, a bit
//! number). The grammar is a single letter prefix selecting the area, or no
//! prefix at all for CIO; a trailing `.<0-15>` switches from word to bit
//! access. Timer and Counter accept a prefix but have no bit form.

use crate::error::{FinsError, Result};
use crate::memory::MemoryArea;

/// Access granularity requested by an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// A word address, e.g. `D100`.
    Word,
    /// A bit address, e.g. `D100.5`.
    Bit,
}

/// A fully parsed address: which area, what word offset, and (for bit
/// addresses) which bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress {
    /// The original address string's memory area.
    pub area: MemoryArea,
    /// Whether this is a word or bit address.
    pub kind: AddressKind,
    /// Word offset within the area.
    pub word_address: u16,
    /// Bit number (0-15), present only when `kind` is [`AddressKind::Bit`].
    pub bit_number: Option<u8>,
}

/// Parses an address string, dispatching to word or bit parsing based on the
/// presence of a `.` separator.
///
/// `offset` is added to the numeric portion of the address before range
/// checks; the chunked read pipeline uses this to advance through large
/// reads without re-formatting the address string.
///
/// # Example
///
/// ```
/// use omron_fins::address::{parse, AddressKind};
///
/// let parsed = parse("D100", 0).unwrap();
/// assert_eq!(parsed.word_address, 100);
/// assert_eq!(parsed.kind, AddressKind::Word);
///
/// let parsed = parse("D100.5", 0).unwrap();
/// assert_eq!(parsed.bit_number, Some(5));
/// ```
pub fn parse(address: &str, offset: u16) -> Result<ParsedAddress> {
    if address.is_empty() {
        return Err(FinsError::invalid_address(address, "address cannot be empty"));
    }

    if address.contains('.') {
        parse_bit(address, offset)
    } else {
        parse_word(address, offset)
    }
}

fn numeric_suffix(address: &str, start: usize) -> Result<u32> {
    address[start..]
        .parse::<u32>()
        .map_err(|_| FinsError::invalid_address(address, "expected a numeric address"))
}

fn em_bank(address: &str) -> Result<u8> {
    let bank_char = address
        .chars()
        .nth(1)
        .ok_or_else(|| FinsError::invalid_address(address, "missing extended memory bank digit"))?;
    bank_char
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| FinsError::invalid_address(address, "extended memory bank must be a hex digit 0-F"))
}

fn apply_offset(address: &str, base: u32, offset: u16) -> Result<u16> {
    let total = base + offset as u32;
    u16::try_from(total).map_err(|_| FinsError::invalid_address(address, "word address exceeds u16 range"))
}

fn parse_word(address: &str, offset: u16) -> Result<ParsedAddress> {
    let prefix = address.chars().next().unwrap().to_ascii_uppercase();

    let (area, word_address) = if prefix.is_ascii_digit() {
        let num = numeric_suffix(address, 0)?;
        (MemoryArea::Cio, apply_offset(address, num, offset)?)
    } else {
        match prefix {
            'D' => {
                let num = numeric_suffix(address, 1)?;
                (MemoryArea::DataMemory, apply_offset(address, num, offset)?)
            }
            'W' => {
                let num = numeric_suffix(address, 1)?;
                (MemoryArea::Work, apply_offset(address, num, offset)?)
            }
            'H' => {
                let num = numeric_suffix(address, 1)?;
                (MemoryArea::Holding, apply_offset(address, num, offset)?)
            }
            'A' => {
                let num = numeric_suffix(address, 1)?;
                (MemoryArea::Auxiliary, apply_offset(address, num, offset)?)
            }
            'T' => {
                let num = numeric_suffix(address, 1)?;
                (MemoryArea::Timer, apply_offset(address, num, offset)?)
            }
            'C' => {
                let num = numeric_suffix(address, 1)?;
                let with_offset = num + 0x0800;
                (MemoryArea::Counter, apply_offset(address, with_offset, offset)?)
            }
            'E' => {
                if address.len() < 4 {
                    return Err(FinsError::invalid_address(
                        address,
                        "extended memory address must be at least 4 characters",
                    ));
                }
                let bank = em_bank(address)?;
                let num = numeric_suffix(address, 3)?;
                (MemoryArea::ExtendedMemory(bank), apply_offset(address, num, offset)?)
            }
            other => {
                return Err(FinsError::invalid_address(
                    address,
                    format!("unsupported memory type prefix '{other}'"),
                ))
            }
        }
    };

    Ok(ParsedAddress {
        area,
        kind: AddressKind::Word,
        word_address,
        bit_number: None,
    })
}

fn parse_bit(address: &str, offset: u16) -> Result<ParsedAddress> {
    let (base_addr, bit_str) = address
        .split_once('.')
        .ok_or_else(|| FinsError::invalid_address(address, "expected a '.' separating word and bit"))?;

    let bit_number: u8 = bit_str
        .parse()
        .map_err(|_| FinsError::invalid_address(address, "bit number must be numeric"))?;
    if bit_number > 15 {
        return Err(FinsError::invalid_address(address, "bit number must be 0-15"));
    }

    let prefix = base_addr.chars().next().unwrap_or('\0').to_ascii_uppercase();

    let (area, word_address) = if prefix.is_ascii_digit() {
        let num = numeric_suffix(base_addr, 0)?;
        (MemoryArea::Cio, apply_offset(address, num, offset)?)
    } else {
        match prefix {
            'D' => {
                let num = numeric_suffix(base_addr, 1)?;
                (MemoryArea::DataMemory, apply_offset(address, num, offset)?)
            }
            'W' => {
                let num = numeric_suffix(base_addr, 1)?;
                (MemoryArea::Work, apply_offset(address, num, offset)?)
            }
            'H' => {
                let num = numeric_suffix(base_addr, 1)?;
                (MemoryArea::Holding, apply_offset(address, num, offset)?)
            }
            'A' => {
                let num = numeric_suffix(base_addr, 1)?;
                (MemoryArea::Auxiliary, apply_offset(address, num, offset)?)
            }
            'E' => {
                if base_addr.len() < 4 {
                    return Err(FinsError::invalid_address(
                        address,
                        "extended memory bit address must be at least 4 characters",
                    ));
                }
                let bank = em_bank(base_addr)?;
                let num = numeric_suffix(base_addr, 3)?;
                (MemoryArea::ExtendedMemory(bank), apply_offset(address, num, offset)?)
            }
            'T' | 'C' => {
                return Err(FinsError::invalid_address(
                    address,
                    "Timer/Counter have no bit-access form",
                ))
            }
            other => {
                return Err(FinsError::invalid_address(
                    address,
                    format!("unsupported bit memory type prefix '{other}'"),
                ))
            }
        }
    };

    Ok(ParsedAddress {
        area,
        kind: AddressKind::Bit,
        word_address,
        bit_number: Some(bit_number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cio_word() {
        let p = parse("100", 0).unwrap();
        assert_eq!(p.area, MemoryArea::Cio);
        assert_eq!(p.word_address, 100);
        assert_eq!(p.kind, AddressKind::Word);
    }

    #[test]
    fn parses_cio_bit() {
        let p = parse("100.5", 0).unwrap();
        assert_eq!(p.area, MemoryArea::Cio);
        assert_eq!(p.word_address, 100);
        assert_eq!(p.bit_number, Some(5));
    }

    #[test]
    fn parses_data_memory_word_and_bit() {
        let p = parse("D1000", 0).unwrap();
        assert_eq!(p.area, MemoryArea::DataMemory);
        assert_eq!(p.word_address, 1000);

        let p = parse("D1000.5", 0).unwrap();
        assert_eq!(p.area, MemoryArea::DataMemory);
        assert_eq!(p.bit_number, Some(5));
    }

    #[test]
    fn parses_work_holding_auxiliary() {
        assert_eq!(parse("W200", 0).unwrap().area, MemoryArea::Work);
        assert_eq!(parse("H200", 0).unwrap().area, MemoryArea::Holding);
        assert_eq!(parse("A200", 0).unwrap().area, MemoryArea::Auxiliary);
    }

    #[test]
    fn parses_timer_word_only() {
        let p = parse("T15", 0).unwrap();
        assert_eq!(p.area, MemoryArea::Timer);
        assert_eq!(p.word_address, 15);

        let err = parse("T15.0", 0).unwrap_err();
        assert!(err.to_string().contains("no bit-access form"));
    }

    #[test]
    fn counter_applies_0x0800_offset() {
        let p = parse("C20", 0).unwrap();
        assert_eq!(p.area, MemoryArea::Counter);
        assert_eq!(p.word_address, 20 + 0x0800);
    }

    #[test]
    fn parses_extended_memory_word_and_bit() {
        let p = parse("E1_100", 0).unwrap();
        assert_eq!(p.area, MemoryArea::ExtendedMemory(1));
        assert_eq!(p.word_address, 100);

        let p = parse("EA_50.3", 0).unwrap();
        assert_eq!(p.area, MemoryArea::ExtendedMemory(10));
        assert_eq!(p.bit_number, Some(3));
    }

    #[test]
    fn offset_advances_word_address() {
        let p = parse("D100", 990).unwrap();
        assert_eq!(p.word_address, 1090);
    }

    #[test]
    fn rejects_empty_address() {
        assert!(parse("", 0).is_err());
    }

    #[test]
    fn rejects_unsupported_prefix() {
        assert!(parse("Q100", 0).is_err());
    }

    #[test]
    fn rejects_bit_out_of_range() {
        assert!(parse("D100.16", 0).is_err());
    }
}
