use std::time::Duration;
use std::thread::sleep;

use crate::Result;
use crate::config::{Board, RefFrequency};
use crate::regs::sc18is602::{self, SlaveSelect};
use crate::regs::{lmk04208, lmk04832, lmx2594};
use crate::sys::Bus;

// The bridge starts shifting a payload out over SPI only after the I2C write
// carrying it ends; a 5-byte frame at the 58 kHz SPI clock takes ~690 µs.
// Wait it out before the next command or the shift register gets overrun.
const SPI_DRAIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct Device<B: Bus> {
    bus: B,
    board: Board,
}

impl Device<crate::sys::imp::I2cBusImpl> {
    /// Opens the board's default I2C bus.
    pub fn new(board: Board) -> Result<Device<crate::sys::imp::I2cBusImpl>> {
        Device::open(board, board.i2c_bus())
    }

    /// Opens an explicit I2C bus, for images that renumber the adapters.
    pub fn open(board: Board, i2c_bus: u32) -> Result<Device<crate::sys::imp::I2cBusImpl>> {
        let bus = crate::sys::imp::I2cBusImpl::open(i2c_bus, sc18is602::I2C_ADDR)?;
        Ok(Device { bus, board })
    }
}

impl<B: Bus> Device<B> {
    /// Programs the board's jitter cleaner for 122.88 MHz and then all of its
    /// RF PLLs for `frequency`, which is what the RF data converter tiles
    /// expect as their reference.
    pub fn set_ref_clks(&mut self, frequency: RefFrequency) -> Result<()> {
        log::info!("setting {} reference clocks to {}", self.board, frequency);
        match self.board {
            Board::Zcu111 => self.write_lmk04208_regs(&lmk04208::CFG_122M88)?,
            Board::XupRfsoc => self.write_lmk04832_regs(&lmk04832::CFG_122M88)?,
        }
        self.write_lmx2594_regs(frequency.lmx2594_regs())?;
        Ok(())
    }

    pub fn write_lmk04208_regs(&mut self, regs: &[u32; lmk04208::REG_COUNT]) -> Result<()> {
        log::info!("programming LMK04208 ({} registers)", regs.len());
        self.configure_spi()?;
        let select = self.board.lmk_select();
        for &word in regs {
            // 32-bit program word, register address in the low five bits
            self.write_spi(select, &word.to_be_bytes())?;
        }
        Ok(())
    }

    pub fn write_lmk04832_regs(&mut self, regs: &[u32; lmk04832::REG_COUNT]) -> Result<()> {
        log::info!("programming LMK04832 ({} registers)", regs.len());
        self.configure_spi()?;
        let select = self.board.lmk_select();
        for &word in regs {
            // the part takes 24-bit transfers, only the low three bytes go out
            self.write_spi(select, &word.to_be_bytes()[1..])?;
        }
        Ok(())
    }

    pub fn write_lmx2594_regs(&mut self, regs: &[u32; lmx2594::REG_COUNT]) -> Result<()> {
        log::info!("programming LMX2594 RF PLLs ({} registers)", regs.len());
        self.configure_spi()?;
        // every RF PLL carries the same image; assert all their slave selects
        // and program them in one broadcast
        let select = self.board.lmx_select();
        // reset the part first
        self.write_lmx2594_word(select, lmx2594::R0_RESET)?;
        self.write_lmx2594_word(select, 0)?;
        // the image runs R112 down to R0, the order the datasheet asks for
        for &word in regs {
            self.write_lmx2594_word(select, word)?;
        }
        // FCAL_EN is already set in the image's R0; rewriting it after a
        // 10 ms settle reruns the VCO calibration against the complete
        // register state
        sleep(Duration::from_millis(10));
        self.write_lmx2594_word(select, regs[lmx2594::REG_COUNT - 1])?;
        Ok(())
    }

    fn write_lmx2594_word(&mut self, select: SlaveSelect, word: u32) -> Result<()> {
        self.write_spi(select, &word.to_be_bytes()[1..])
    }

    /// Drops the bridge's INT line, latched after every completed SPI
    /// transfer.
    pub fn clear_interrupt(&mut self) -> Result<()> {
        log::debug!("clear_interrupt()");
        self.bus.write(&[sc18is602::FUNC_CLEAR_INT])
    }

    fn configure_spi(&mut self) -> Result<()> {
        log::debug!("configure_spi()");
        // MSB first, mode 0, 58 kHz
        self.bus.write(&[sc18is602::FUNC_CONFIG_SPI, sc18is602::CONFIG_CLK_58K])?;
        sleep(SPI_DRAIN_DELAY);
        Ok(())
    }

    fn write_spi(&mut self, select: SlaveSelect, payload: &[u8]) -> Result<()> {
        log::debug!("write_spi({:?}, {:02x?})", select, payload);
        let mut packet = Vec::<u8>::new();
        packet.push(select.bits());
        packet.extend_from_slice(payload);
        self.bus.write(packet.as_ref())?;
        sleep(SPI_DRAIN_DELAY);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[derive(Debug, Default)]
    struct RecordingBus {
        writes: Vec<Vec<u8>>,
    }

    impl Bus for RecordingBus {
        fn write(&mut self, data: &[u8]) -> core::result::Result<(), Error> {
            self.writes.push(data.to_vec());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingBus;

    impl Bus for FailingBus {
        fn write(&mut self, _data: &[u8]) -> core::result::Result<(), Error> {
            Err(Error::I2cIo(std::io::Error::from_raw_os_error(libc::EIO)))
        }
    }

    fn device(board: Board) -> Device<RecordingBus> {
        Device { bus: RecordingBus::default(), board }
    }

    #[test]
    fn test_lmk04208_framing() {
        let mut device = device(Board::Zcu111);
        device.write_lmk04208_regs(&lmk04208::CFG_122M88).unwrap();
        let writes = &device.bus.writes;
        assert_eq!(writes.len(), 1 + lmk04208::REG_COUNT);
        assert_eq!(writes[0], vec![0xf0, 0x03]);
        assert_eq!(writes[1], vec![0x01, 0x00, 0x16, 0x00, 0x40]);
        assert_eq!(writes[26], vec![0x01, 0x00, 0x3f, 0x00, 0x1f]);
        assert!(writes[1..].iter().all(|frame| frame.len() == 5 && frame[0] == 0x01));
    }

    #[test]
    fn test_lmk04832_framing() {
        let mut device = device(Board::XupRfsoc);
        device.write_lmk04832_regs(&lmk04832::CFG_122M88).unwrap();
        let writes = &device.bus.writes;
        assert_eq!(writes.len(), 1 + lmk04832::REG_COUNT);
        assert_eq!(writes[0], vec![0xf0, 0x03]);
        assert_eq!(writes[1], vec![0x01, 0x00, 0x00, 0x90]);
        assert_eq!(writes[125], vec![0x01, 0x05, 0x55, 0x00]);
        assert!(writes[1..].iter().all(|frame| frame.len() == 4 && frame[0] == 0x01));
    }

    #[test]
    fn test_lmx2594_sequence() {
        let mut device = device(Board::Zcu111);
        device.write_lmx2594_regs(&lmx2594::CFG_204M8).unwrap();
        let writes = &device.bus.writes;
        // config, reset assert and release, 113 registers, calibration rewrite
        assert_eq!(writes.len(), 1 + 2 + lmx2594::REG_COUNT + 1);
        assert_eq!(writes[0], vec![0xf0, 0x03]);
        assert_eq!(writes[1], vec![0x0e, 0x00, 0x00, 0x02]);
        assert_eq!(writes[2], vec![0x0e, 0x00, 0x00, 0x00]);
        assert_eq!(writes[3], vec![0x0e, 0x70, 0x00, 0x00]);
        let r0 = &writes[3 + lmx2594::REG_COUNT - 1];
        assert_eq!(*r0, vec![0x0e, 0x00, 0x24, 0x9c]);
        assert_eq!(writes.last().unwrap(), r0);
    }

    #[test]
    fn test_lmx2594_broadcast_matches_board() {
        let mut device = device(Board::XupRfsoc);
        device.write_lmx2594_regs(&lmx2594::CFG_102M4).unwrap();
        assert!(device.bus.writes[1..].iter().all(|frame| frame[0] == 0x06));
    }

    #[test]
    fn test_clear_interrupt() {
        let mut device = device(Board::Zcu111);
        device.clear_interrupt().unwrap();
        assert_eq!(device.bus.writes, vec![vec![0xf1]]);
    }

    #[test]
    fn test_set_ref_clks_orders_chips() {
        let mut device = device(Board::Zcu111);
        device.set_ref_clks(RefFrequency::MHz409_6).unwrap();
        let writes = &device.bus.writes;
        assert_eq!(writes.len(), (1 + lmk04208::REG_COUNT) + (1 + 2 + lmx2594::REG_COUNT + 1));
        // jitter cleaner first, RF PLLs after
        assert_eq!(writes[1][0], 0x01);
        assert_eq!(writes.last().unwrap()[0], 0x0e);
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut device = Device { bus: FailingBus, board: Board::Zcu111 };
        match device.write_lmk04208_regs(&lmk04208::CFG_122M88) {
            Err(Error::I2cIo(_)) => (),
            result => panic!("expected an I2C I/O error, got {:?}", result),
        }
    }
}
