//! FINS end-code catalogue.
//!
//! Every FINS response carries a two-byte end code. `0x0000` means normal
//! completion; `0x0001` means the service was cancelled (a recoverable
//! warning, not a hard failure); everything else names a specific failure
//! drawn from the classes below. The catalogue is a static table, built once
//! and shared across every client and response in the process.

/// Broad category a non-success end code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCodeClass {
    /// Normal completion (`0x0000`).
    Success,
    /// Service cancelled (`0x0001`) — recoverable.
    ServiceCancelled,
    /// Local node errors (`0x01xx`).
    LocalNode,
    /// Destination node errors (`0x02xx`).
    DestinationNode,
    /// Communications controller errors (`0x03xx`).
    Controller,
    /// Command not supported (`0x04xx`).
    CommandUnsupported,
    /// Routing errors (`0x05xx`).
    Routing,
    /// Command format errors (`0x10xx`).
    CommandFormat,
    /// Parameter errors (`0x11xx`).
    Parameter,
    /// Read not possible (`0x20xx`).
    ReadNotPossible,
    /// Write not possible (`0x21xx`).
    WriteNotPossible,
    /// Cannot execute in the PLC's current mode (`0x22xx`).
    CannotExecuteInMode,
    /// No such device (`0x23xx`).
    NoSuchDevice,
    /// Cannot start/stop (`0x24xx`).
    CannotStartStop,
    /// End code not present in the catalogue.
    Unknown,
}

/// A resolved end code: its class, description, and success flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndCodeInfo {
    /// Category this code belongs to.
    pub class: EndCodeClass,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether this end code represents a successful completion.
    pub is_success: bool,
}

/// Looks up a two-byte FINS end code (main code, sub code) in the catalogue.
///
/// Unknown codes resolve to [`EndCodeClass::Unknown`] with a synthetic
/// description and `is_success = false`.
///
/// # Example
///
/// ```
/// use omron_fins::endcode::lookup;
///
/// let info = lookup(0x00, 0x00);
/// assert!(info.is_success);
/// ```
pub fn lookup(main_code: u8, sub_code: u8) -> EndCodeInfo {
    use EndCodeClass::*;

    match (main_code, sub_code) {
        (0x00, 0x00) => EndCodeInfo {
            class: Success,
            description: "Normal completion",
            is_success: true,
        },
        (0x00, 0x01) => EndCodeInfo {
            class: ServiceCancelled,
            description: "Service was cancelled",
            is_success: false,
        },

        // Local node (0x01xx)
        (0x01, 0x01) => info(LocalNode, "Local node not part of the network"),
        (0x01, 0x02) => info(LocalNode, "Token timeout"),
        (0x01, 0x03) => info(LocalNode, "Retries failed"),
        (0x01, 0x04) => info(LocalNode, "Too many send frames"),
        (0x01, 0x05) => info(LocalNode, "Node address range error"),
        (0x01, 0x06) => info(LocalNode, "Node address duplication"),

        // Destination node (0x02xx)
        (0x02, 0x01) => info(DestinationNode, "Destination node not part of the network"),
        (0x02, 0x02) => info(DestinationNode, "Unit missing"),
        (0x02, 0x03) => info(DestinationNode, "Third node missing"),
        (0x02, 0x04) => info(DestinationNode, "Destination node busy"),
        (0x02, 0x05) => info(DestinationNode, "Response timeout"),

        // Controller (0x03xx)
        (0x03, 0x01) => info(Controller, "Communications controller error"),
        (0x03, 0x02) => info(Controller, "CPU unit error"),
        (0x03, 0x03) => info(Controller, "Controller error"),
        (0x03, 0x04) => info(Controller, "Unit number error"),

        // Command unsupported (0x04xx)
        (0x04, 0x01) => info(CommandUnsupported, "Undefined command"),
        (0x04, 0x02) => info(CommandUnsupported, "Not supported by this model/version"),

        // Routing (0x05xx)
        (0x05, 0x01) => info(Routing, "Destination address setting error"),
        (0x05, 0x02) => info(Routing, "No routing tables registered"),
        (0x05, 0x03) => info(Routing, "Routing table error"),
        (0x05, 0x04) => info(Routing, "Too many relays"),

        // Command format (0x10xx)
        (0x10, 0x01) => info(CommandFormat, "Command too long"),
        (0x10, 0x02) => info(CommandFormat, "Command too short"),
        (0x10, 0x03) => info(CommandFormat, "Elements/data count mismatch"),
        (0x10, 0x04) => info(CommandFormat, "Command format error"),
        (0x10, 0x05) => info(CommandFormat, "Header error"),

        // Parameter (0x11xx)
        (0x11, 0x01) => info(Parameter, "Area classification missing"),
        (0x11, 0x02) => info(Parameter, "Access size error"),
        (0x11, 0x03) => info(Parameter, "Address range error"),
        (0x11, 0x04) => info(Parameter, "Address range exceeded"),
        (0x11, 0x06) => info(Parameter, "Program missing"),
        (0x11, 0x09) => info(Parameter, "Relational error"),
        (0x11, 0x0A) => info(Parameter, "Duplicate data access"),
        (0x11, 0x0B) => info(Parameter, "Response too long"),
        (0x11, 0x0C) => info(Parameter, "Parameter error"),

        // Read not possible (0x20xx)
        (0x20, 0x02) => info(ReadNotPossible, "Protected"),
        (0x20, 0x03) => info(ReadNotPossible, "Table missing"),
        (0x20, 0x04) => info(ReadNotPossible, "Data missing"),
        (0x20, 0x05) => info(ReadNotPossible, "Program missing"),
        (0x20, 0x06) => info(ReadNotPossible, "File missing"),
        (0x20, 0x07) => info(ReadNotPossible, "Data mismatch"),

        // Write not possible (0x21xx)
        (0x21, 0x01) => info(WriteNotPossible, "Read-only"),
        (0x21, 0x02) => info(WriteNotPossible, "Protected"),
        (0x21, 0x03) => info(WriteNotPossible, "Cannot register"),
        (0x21, 0x05) => info(WriteNotPossible, "Program missing"),
        (0x21, 0x06) => info(WriteNotPossible, "File missing"),
        (0x21, 0x07) => info(WriteNotPossible, "File name already exists"),
        (0x21, 0x08) => info(WriteNotPossible, "Cannot change"),

        // Cannot execute in mode (0x22xx)
        (0x22, 0x01) => info(CannotExecuteInMode, "Not possible during execution"),
        (0x22, 0x02) => info(CannotExecuteInMode, "Not possible while running"),
        (0x22, 0x03) => info(CannotExecuteInMode, "Wrong PLC mode: Program mode"),
        (0x22, 0x04) => info(CannotExecuteInMode, "Wrong PLC mode: Debug mode"),
        (0x22, 0x05) => info(CannotExecuteInMode, "Wrong PLC mode: Monitor mode"),
        (0x22, 0x06) => info(CannotExecuteInMode, "Wrong PLC mode: Run mode"),
        (0x22, 0x07) => info(CannotExecuteInMode, "Specified node is not the polling node"),
        (0x22, 0x08) => info(CannotExecuteInMode, "Step cannot be executed"),

        // No such device (0x23xx)
        (0x23, 0x01) => info(NoSuchDevice, "File device missing"),
        (0x23, 0x02) => info(NoSuchDevice, "Memory missing"),
        (0x23, 0x03) => info(NoSuchDevice, "Clock missing"),

        // Cannot start/stop (0x24xx)
        (0x24, 0x01) => info(CannotStartStop, "Table missing"),

        _ => EndCodeInfo {
            class: Unknown,
            description: "Unknown FINS error code",
            is_success: false,
        },
    }
}

fn info(class: EndCodeClass, description: &'static str) -> EndCodeInfo {
    EndCodeInfo {
        class,
        description,
        is_success: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_code() {
        let info = lookup(0x00, 0x00);
        assert!(info.is_success);
        assert_eq!(info.class, EndCodeClass::Success);
    }

    #[test]
    fn service_cancelled_is_not_success_but_is_distinct_from_errors() {
        let info = lookup(0x00, 0x01);
        assert!(!info.is_success);
        assert_eq!(info.class, EndCodeClass::ServiceCancelled);
    }

    #[test]
    fn address_range_error() {
        let info = lookup(0x11, 0x03);
        assert_eq!(info.class, EndCodeClass::Parameter);
        assert_eq!(info.description, "Address range error");
        assert!(!info.is_success);
    }

    #[test]
    fn unknown_code() {
        let info = lookup(0xFF, 0xFF);
        assert_eq!(info.class, EndCodeClass::Unknown);
        assert!(!info.is_success);
    }

    #[test]
    fn only_0000_is_success() {
        for main in 0u8..=0xFF {
            for sub in 0u8..=0xFF {
                let info = lookup(main, sub);
                assert_eq!(info.is_success, main == 0x00 && sub == 0x00);
            }
        }
    }

    #[test]
    fn wrong_mode_variants_are_distinct() {
        let program = lookup(0x22, 0x03);
        let run = lookup(0x22, 0x06);
        assert_ne!(program.description, run.description);
        assert_eq!(program.class, EndCodeClass::CannotExecuteInMode);
        assert_eq!(run.class, EndCodeClass::CannotExecuteInMode);
    }
}
