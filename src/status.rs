//! # Processor Status Flags
//!
//! The 6502 status register holds eight one-bit flags. They are stored as named
//! booleans and converted to and from the packed byte explicitly, which is the form
//! PHP/PLP move through the stack.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7 | N (Negative) |
//! | 6 | V (Overflow) |
//! | 5 | unused |
//! | 4 | B (Break) |
//! | 3 | D (Decimal, stored only) |
//! | 2 | I (Interrupt Disable) |
//! | 1 | Z (Zero) |
//! | 0 | C (Carry) |

const CARRY: u8 = 0b0000_0001;
const ZERO: u8 = 0b0000_0010;
const INTERRUPT: u8 = 0b0000_0100;
const DECIMAL: u8 = 0b0000_1000;
const BREAK: u8 = 0b0001_0000;
const UNUSED: u8 = 0b0010_0000;
const OVERFLOW: u8 = 0b0100_0000;
const NEGATIVE: u8 = 0b1000_0000;

/// The eight processor status flags.
///
/// # Examples
///
/// ```
/// use cpu6502::StatusFlags;
///
/// let flags = StatusFlags::from_byte(0b1000_0011);
/// assert!(flags.negative);
/// assert!(flags.zero);
/// assert!(flags.carry);
/// assert_eq!(flags.to_byte(), 0b1000_0011);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    /// Carry flag (set on unsigned overflow, cleared on borrow)
    pub carry: bool,

    /// Zero flag (set if result is zero)
    pub zero: bool,

    /// Interrupt disable flag
    pub interrupt_disable: bool,

    /// Decimal mode flag; stored but BCD arithmetic is not emulated
    pub decimal: bool,

    /// Break flag
    pub break_command: bool,

    /// Bit 5, carried through push/pull unchanged
    pub unused: bool,

    /// Overflow flag (set on signed overflow)
    pub overflow: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub negative: bool,
}

impl StatusFlags {
    /// Unpacks a status byte.
    pub const fn from_byte(value: u8) -> Self {
        Self {
            carry: value & CARRY != 0,
            zero: value & ZERO != 0,
            interrupt_disable: value & INTERRUPT != 0,
            decimal: value & DECIMAL != 0,
            break_command: value & BREAK != 0,
            unused: value & UNUSED != 0,
            overflow: value & OVERFLOW != 0,
            negative: value & NEGATIVE != 0,
        }
    }

    /// Packs the flags into a status byte.
    pub const fn to_byte(self) -> u8 {
        let mut value = 0;

        if self.carry {
            value |= CARRY;
        }
        if self.zero {
            value |= ZERO;
        }
        if self.interrupt_disable {
            value |= INTERRUPT;
        }
        if self.decimal {
            value |= DECIMAL;
        }
        if self.break_command {
            value |= BREAK;
        }
        if self.unused {
            value |= UNUSED;
        }
        if self.overflow {
            value |= OVERFLOW;
        }
        if self.negative {
            value |= NEGATIVE;
        }

        value
    }

    /// Sets Z and N from a result byte.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}

impl From<u8> for StatusFlags {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_clear() {
        assert_eq!(StatusFlags::default().to_byte(), 0x00);
    }

    #[test]
    fn test_pack_unpack_every_byte() {
        for value in 0..=255u8 {
            assert_eq!(StatusFlags::from_byte(value).to_byte(), value);
        }
    }

    #[test]
    fn test_bit_positions() {
        let flags = StatusFlags {
            carry: true,
            overflow: true,
            ..StatusFlags::default()
        };
        assert_eq!(flags.to_byte(), 0b0100_0001);

        let flags = StatusFlags::from_byte(0b0011_1100);
        assert!(flags.interrupt_disable);
        assert!(flags.decimal);
        assert!(flags.break_command);
        assert!(flags.unused);
        assert!(!flags.carry && !flags.zero && !flags.overflow && !flags.negative);
    }

    #[test]
    fn test_set_zero_negative() {
        let mut flags = StatusFlags::default();

        flags.set_zero_negative(0x00);
        assert!(flags.zero);
        assert!(!flags.negative);

        flags.set_zero_negative(0x80);
        assert!(!flags.zero);
        assert!(flags.negative);

        flags.set_zero_negative(0x7F);
        assert!(!flags.zero);
        assert!(!flags.negative);
    }
}
