#![allow(dead_code)]

use bitflags::bitflags;

// NXP SC18IS602B I2C-bus to SPI bridge. Every I2C write to the bridge starts
// with a function ID byte; for the command set, see the SC18IS602B datasheet.

/// I2C address of the bridge on both supported boards.
pub const I2C_ADDR: u16 = 0x2f;

bitflags! {
    /// Slave selects asserted while a payload is shifted out. Function IDs
    /// 0x01 through 0x0F are exactly these masks, so a multi-chip mask
    /// broadcasts one payload to several chips at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SlaveSelect: u8 {
        const SS0 = 1<<0;
        const SS1 = 1<<1;
        const SS2 = 1<<2;
        const SS3 = 1<<3;
    }
}

/// Configure SPI Interface function. Takes one argument byte, see below.
pub const FUNC_CONFIG_SPI: u8 = 0xf0;

/// Clear Interrupt function. Drops the INT line latched after a completed
/// SPI transfer. No argument bytes.
pub const FUNC_CLEAR_INT: u8 = 0xf1;

/// Idle Mode function. Not used by the clock tree, listed for completeness.
pub const FUNC_IDLE: u8 = 0xf2;

// Fields of the FUNC_CONFIG_SPI argument byte. ORDER, CPOL and CPHA left at
// zero mean MSB-first SPI mode 0, which is what all three TI chips speak.
pub const CONFIG_ORDER_LSB_FIRST: u8 = 1<<5;
pub const CONFIG_CPOL: u8 = 1<<3;
pub const CONFIG_CPHA: u8 = 1<<2;

// Bits 1:0 of the argument byte select the SPI clock rate.
pub const CONFIG_CLK_1M8: u8 = 0b00;
pub const CONFIG_CLK_461K: u8 = 0b01;
pub const CONFIG_CLK_115K: u8 = 0b10;
pub const CONFIG_CLK_58K: u8 = 0b11;
