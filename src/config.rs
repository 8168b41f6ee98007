//! Board wiring and the reference-frequency catalog.

use std::fmt;

use crate::regs::lmx2594;
use crate::regs::sc18is602::SlaveSelect;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    /// ZCU111: LMK04208 jitter cleaner, three LMX2594 RF PLLs.
    Zcu111,
    /// XUP RFSoC: LMK04832 jitter cleaner, two LMX2594 RF PLLs.
    XupRfsoc,
}

impl Board {
    /// The I2C bus the SC18IS602B bridge lives on, as numbered by the stock
    /// Linux image for the board.
    pub fn i2c_bus(self) -> u32 {
        match self {
            Board::Zcu111 => 12,
            Board::XupRfsoc => 8,
        }
    }

    pub(crate) fn lmk_select(self) -> SlaveSelect {
        SlaveSelect::SS0
    }

    // The RF PLLs carry identical configuration and are programmed in one
    // broadcast with all of their slave selects asserted.
    pub(crate) fn lmx_select(self) -> SlaveSelect {
        match self {
            Board::Zcu111 => SlaveSelect::SS1 | SlaveSelect::SS2 | SlaveSelect::SS3,
            Board::XupRfsoc => SlaveSelect::SS1 | SlaveSelect::SS2,
        }
    }

    pub fn from_name(name: &str) -> Option<Board> {
        match name.to_ascii_uppercase().as_str() {
            "ZCU111" => Some(Board::Zcu111),
            "XUPRFSOC" => Some(Board::XupRfsoc),
            _ => None
        }
    }

    /// Reads the `BOARD` environment variable set by the board image.
    pub fn from_env() -> Result<Board> {
        match std::env::var("BOARD") {
            Ok(name) => Board::from_name(&name).ok_or(Error::UnsupportedBoard(name)),
            Err(_) => Err(Error::Other("BOARD environment variable is not set".into())),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Board::Zcu111 => write!(f, "ZCU111"),
            Board::XupRfsoc => write!(f, "XUPRFSOC"),
        }
    }
}

/// RF PLL output frequencies with a pre-computed register image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefFrequency {
    MHz102_4,
    MHz204_8,
    MHz409_6,
    MHz737,
}

impl RefFrequency {
    pub const ALL: [RefFrequency; 4] = [
        RefFrequency::MHz102_4,
        RefFrequency::MHz204_8,
        RefFrequency::MHz409_6,
        RefFrequency::MHz737,
    ];

    /// Output frequency in MHz.
    pub fn mhz(self) -> f64 {
        match self {
            RefFrequency::MHz102_4 => 102.4,
            RefFrequency::MHz204_8 => 204.8,
            RefFrequency::MHz409_6 => 409.6,
            RefFrequency::MHz737 => 737.0,
        }
    }

    pub fn from_mhz(mhz: f64) -> Option<RefFrequency> {
        RefFrequency::ALL.iter().find(|&&frequency| frequency.mhz() == mhz).copied()
    }

    pub(crate) fn lmx2594_regs(self) -> &'static [u32; lmx2594::REG_COUNT] {
        match self {
            RefFrequency::MHz102_4 => &lmx2594::CFG_102M4,
            RefFrequency::MHz204_8 => &lmx2594::CFG_204M8,
            RefFrequency::MHz409_6 => &lmx2594::CFG_409M6,
            RefFrequency::MHz737 => &lmx2594::CFG_737M0,
        }
    }
}

impl fmt::Display for RefFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} MHz", self.mhz())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_board_names_round_trip() {
        for board in [Board::Zcu111, Board::XupRfsoc] {
            assert_eq!(Board::from_name(&board.to_string()), Some(board));
        }
        assert_eq!(Board::from_name("zcu111"), Some(Board::Zcu111));
        assert_eq!(Board::from_name("ZCU208"), None);
    }

    #[test]
    fn test_bridge_bus_numbers() {
        assert_eq!(Board::Zcu111.i2c_bus(), 12);
        assert_eq!(Board::XupRfsoc.i2c_bus(), 8);
    }

    #[test]
    fn test_frequency_catalog() {
        assert_eq!(RefFrequency::from_mhz(102.4), Some(RefFrequency::MHz102_4));
        assert_eq!(RefFrequency::from_mhz(737.0), Some(RefFrequency::MHz737));
        assert_eq!(RefFrequency::from_mhz(100.0), None);
        assert_eq!(RefFrequency::MHz409_6.to_string(), "409.6 MHz");
    }

    #[test]
    fn test_register_images_are_distinct() {
        for (index, a) in RefFrequency::ALL.iter().enumerate() {
            for b in &RefFrequency::ALL[index + 1..] {
                assert_ne!(a.lmx2594_regs(), b.lmx2594_regs());
            }
        }
    }
}
