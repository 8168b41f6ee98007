#![allow(dead_code)]

// TI LMK04832 JESD204B jitter cleaner, programmed with 24-bit transfers:
// R/W flag and 13-bit register address in the top two bytes, one data byte.
// Only the low 24 bits of each table word are shifted out.

pub const REG_COUNT: usize = 125;

/// SPI lock register, the last one every image writes.
pub const ADDR_SPI_LOCK: u32 = 0x0555;

/// Register image for 122.88 MHz outputs, as shipped with the board support
/// package.
pub const CFG_122M88: [u32; REG_COUNT] = [
    0x000090, 0x000010, 0x000200, 0x000306, 0x0004D1, 0x000563, 0x000650, 0x000C51,
    0x000D04, 0x010090, 0x01010A, 0x010201, 0x010340, 0x010410, 0x010512, 0x010604,
    0x010710, 0x010890, 0x01090A, 0x010A01, 0x010B40, 0x010C10, 0x010D12, 0x010E04,
    0x010F01, 0x011008, 0x01110A, 0x011280, 0x011350, 0x011410, 0x011512, 0x011604,
    0x011700, 0x011819, 0x01190A, 0x011A80, 0x011B50, 0x011C10, 0x011D12, 0x011E04,
    0x011F33, 0x012019, 0x01210A, 0x012200, 0x012340, 0x012410, 0x012512, 0x012604,
    0x012701, 0x012819, 0x01290A, 0x012A00, 0x012B40, 0x012C10, 0x012D12, 0x012E04,
    0x012F11, 0x013002, 0x01310A, 0x013280, 0x013350, 0x013410, 0x013512, 0x013604,
    0x013700, 0x013801, 0x013900, 0x013A0C, 0x013B00, 0x013C00, 0x013D08, 0x013E03,
    0x013F00, 0x01400F, 0x014100, 0x014200, 0x014311, 0x014400, 0x014500, 0x014618,
    0x01470A, 0x014803, 0x014943, 0x014A03, 0x014B06, 0x014C00, 0x014D00, 0x014EC0,
    0x014F7F, 0x015001, 0x015102, 0x015200, 0x015300, 0x015478, 0x015500, 0x015678,
    0x015700, 0x015896, 0x015904, 0x015AB0, 0x015BD4, 0x015C20, 0x015D00, 0x015E1E,
    0x015F3B, 0x016000, 0x016102, 0x01624C, 0x016300, 0x016400, 0x016519, 0x016958,
    0x016A20, 0x016B00, 0x016C00, 0x016D00, 0x016E04, 0x017310, 0x017700, 0x018200,
    0x018300, 0x016600, 0x016700, 0x016819, 0x055500,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_words_fit_24_bits() {
        for &word in CFG_122M88.iter() {
            assert_eq!(word >> 24, 0);
        }
    }

    #[test]
    fn test_image_ends_at_spi_lock() {
        assert_eq!(CFG_122M88[REG_COUNT - 1] >> 8, ADDR_SPI_LOCK);
    }
}
