#![allow(dead_code)]

// TI LMK04208 dual-loop jitter cleaner, programmed with 32-bit words carrying
// the register address in their low five bits. The device address space is
// R0..R16 plus R24..R31; the table below touches R0 twice because the first
// word asserts the reset bit.

pub const REG_COUNT: usize = 26;

/// Register image for 122.88 MHz outputs, as shipped with the board support
/// package.
pub const CFG_122M88: [u32; REG_COUNT] = [
    0x00160040, 0x00143200, 0x00143201, 0x00140322,
    0xC0140023, 0x40140024, 0x80141E05, 0x01100006,
    0x01100007, 0x06010008, 0x55555549, 0x9102410A,
    0x0401100B, 0x1B0C006C, 0x2302886D, 0x0200000E,
    0x8000800F, 0xC1550410, 0x00000058, 0x02C9C419,
    0x8FA8001A, 0x10001E1B, 0x0021201C, 0x0180033D,
    0x0200033E, 0x003F001F,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_image_brackets_address_space() {
        // reset word first, readback/lock word last
        assert_eq!(CFG_122M88[0] & 0x1f, 0);
        assert_eq!(CFG_122M88[REG_COUNT - 1] & 0x1f, 0x1f);
    }
}
