#![allow(dead_code)]

// TI LMX2594 wideband RF PLL, programmed with 24-bit transfers: R/W flag and
// 7-bit register address in the top byte, 16 data bits. Register images are
// streamed R112 down to R0, the order TICS Pro exports and the order the
// datasheet requires for bring-up.

pub const REG_COUNT: usize = 113;

// R0 data bits used by the bring-up sequence.
pub const R0_POWERDOWN: u32 = 1<<0;
pub const R0_RESET: u32 = 1<<1;
pub const R0_FCAL_EN: u32 = 1<<3;

// All four images run the PLL from the LMK's 122.88 MHz output and differ
// only in PLL_N (R36) and the channel divider (R75): a 9830.4 MHz VCO divided
// by 96, 48 or 24, and an 8847.36 MHz VCO divided by 12 for the "737" entry
// (737.28 MHz exactly).

/// Register image for 102.4 MHz RF PLL output.
pub const CFG_102M4: [u32; REG_COUNT] = [
    0x700000, 0x6F0000, 0x6E0000, 0x6D0000, 0x6C0000, 0x6B0000, 0x6A0000, 0x690021,
    0x680000, 0x670000, 0x663F80, 0x650011, 0x640000, 0x630000, 0x620200, 0x610888,
    0x600000, 0x5F0000, 0x5E0000, 0x5D0000, 0x5C0000, 0x5B0000, 0x5A0000, 0x590000,
    0x580000, 0x570000, 0x560000, 0x55D300, 0x540001, 0x530000, 0x521E00, 0x510000,
    0x506666, 0x4F0026, 0x4E0003, 0x4D0000, 0x4C000C, 0x4B0AC0, 0x4A0000, 0x49003F,
    0x480001, 0x470081, 0x46C350, 0x450000, 0x4403E8, 0x430000, 0x4201F4, 0x410000,
    0x401388, 0x3F0000, 0x3E0322, 0x3D00A8, 0x3C0000, 0x3B0001, 0x3A8001, 0x390020,
    0x380000, 0x370000, 0x360000, 0x350000, 0x340820, 0x330080, 0x320000, 0x314180,
    0x300300, 0x2F0300, 0x2E07FC, 0x2DC0CC, 0x2C0C23, 0x2B0000, 0x2A0000, 0x290000,
    0x280000, 0x270001, 0x260000, 0x250304, 0x240050, 0x230004, 0x220000, 0x211E21,
    0x200393, 0x1F43EC, 0x1E318C, 0x1D318C, 0x1C0488, 0x1B0002, 0x1A0DB0, 0x190624,
    0x18071A, 0x17007C, 0x160001, 0x150401, 0x14E048, 0x1327B7, 0x120064, 0x11012C,
    0x100080, 0x0F064F, 0x0E1E70, 0x0D4000, 0x0C5001, 0x0B0018, 0x0A10D8, 0x090604,
    0x082000, 0x0740B2, 0x06C802, 0x0500C8, 0x040A43, 0x030642, 0x020500, 0x010808,
    0x00249C,
];

/// Register image for 204.8 MHz RF PLL output.
pub const CFG_204M8: [u32; REG_COUNT] = [
    0x700000, 0x6F0000, 0x6E0000, 0x6D0000, 0x6C0000, 0x6B0000, 0x6A0000, 0x690021,
    0x680000, 0x670000, 0x663F80, 0x650011, 0x640000, 0x630000, 0x620200, 0x610888,
    0x600000, 0x5F0000, 0x5E0000, 0x5D0000, 0x5C0000, 0x5B0000, 0x5A0000, 0x590000,
    0x580000, 0x570000, 0x560000, 0x55D300, 0x540001, 0x530000, 0x521E00, 0x510000,
    0x506666, 0x4F0026, 0x4E0003, 0x4D0000, 0x4C000C, 0x4B0A00, 0x4A0000, 0x49003F,
    0x480001, 0x470081, 0x46C350, 0x450000, 0x4403E8, 0x430000, 0x4201F4, 0x410000,
    0x401388, 0x3F0000, 0x3E0322, 0x3D00A8, 0x3C0000, 0x3B0001, 0x3A8001, 0x390020,
    0x380000, 0x370000, 0x360000, 0x350000, 0x340820, 0x330080, 0x320000, 0x314180,
    0x300300, 0x2F0300, 0x2E07FC, 0x2DC0CC, 0x2C0C23, 0x2B0000, 0x2A0000, 0x290000,
    0x280000, 0x270001, 0x260000, 0x250304, 0x240050, 0x230004, 0x220000, 0x211E21,
    0x200393, 0x1F43EC, 0x1E318C, 0x1D318C, 0x1C0488, 0x1B0002, 0x1A0DB0, 0x190624,
    0x18071A, 0x17007C, 0x160001, 0x150401, 0x14E048, 0x1327B7, 0x120064, 0x11012C,
    0x100080, 0x0F064F, 0x0E1E70, 0x0D4000, 0x0C5001, 0x0B0018, 0x0A10D8, 0x090604,
    0x082000, 0x0740B2, 0x06C802, 0x0500C8, 0x040A43, 0x030642, 0x020500, 0x010808,
    0x00249C,
];

/// Register image for 409.6 MHz RF PLL output.
pub const CFG_409M6: [u32; REG_COUNT] = [
    0x700000, 0x6F0000, 0x6E0000, 0x6D0000, 0x6C0000, 0x6B0000, 0x6A0000, 0x690021,
    0x680000, 0x670000, 0x663F80, 0x650011, 0x640000, 0x630000, 0x620200, 0x610888,
    0x600000, 0x5F0000, 0x5E0000, 0x5D0000, 0x5C0000, 0x5B0000, 0x5A0000, 0x590000,
    0x580000, 0x570000, 0x560000, 0x55D300, 0x540001, 0x530000, 0x521E00, 0x510000,
    0x506666, 0x4F0026, 0x4E0003, 0x4D0000, 0x4C000C, 0x4B0980, 0x4A0000, 0x49003F,
    0x480001, 0x470081, 0x46C350, 0x450000, 0x4403E8, 0x430000, 0x4201F4, 0x410000,
    0x401388, 0x3F0000, 0x3E0322, 0x3D00A8, 0x3C0000, 0x3B0001, 0x3A8001, 0x390020,
    0x380000, 0x370000, 0x360000, 0x350000, 0x340820, 0x330080, 0x320000, 0x314180,
    0x300300, 0x2F0300, 0x2E07FC, 0x2DC0CC, 0x2C0C23, 0x2B0000, 0x2A0000, 0x290000,
    0x280000, 0x270001, 0x260000, 0x250304, 0x240050, 0x230004, 0x220000, 0x211E21,
    0x200393, 0x1F43EC, 0x1E318C, 0x1D318C, 0x1C0488, 0x1B0002, 0x1A0DB0, 0x190624,
    0x18071A, 0x17007C, 0x160001, 0x150401, 0x14E048, 0x1327B7, 0x120064, 0x11012C,
    0x100080, 0x0F064F, 0x0E1E70, 0x0D4000, 0x0C5001, 0x0B0018, 0x0A10D8, 0x090604,
    0x082000, 0x0740B2, 0x06C802, 0x0500C8, 0x040A43, 0x030642, 0x020500, 0x010808,
    0x00249C,
];

/// Register image for the 737 MHz catalog entry (737.28 MHz).
pub const CFG_737M0: [u32; REG_COUNT] = [
    0x700000, 0x6F0000, 0x6E0000, 0x6D0000, 0x6C0000, 0x6B0000, 0x6A0000, 0x690021,
    0x680000, 0x670000, 0x663F80, 0x650011, 0x640000, 0x630000, 0x620200, 0x610888,
    0x600000, 0x5F0000, 0x5E0000, 0x5D0000, 0x5C0000, 0x5B0000, 0x5A0000, 0x590000,
    0x580000, 0x570000, 0x560000, 0x55D300, 0x540001, 0x530000, 0x521E00, 0x510000,
    0x506666, 0x4F0026, 0x4E0003, 0x4D0000, 0x4C000C, 0x4B0900, 0x4A0000, 0x49003F,
    0x480001, 0x470081, 0x46C350, 0x450000, 0x4403E8, 0x430000, 0x4201F4, 0x410000,
    0x401388, 0x3F0000, 0x3E0322, 0x3D00A8, 0x3C0000, 0x3B0001, 0x3A8001, 0x390020,
    0x380000, 0x370000, 0x360000, 0x350000, 0x340820, 0x330080, 0x320000, 0x314180,
    0x300300, 0x2F0300, 0x2E07FC, 0x2DC0CC, 0x2C0C23, 0x2B0000, 0x2A0000, 0x290000,
    0x280000, 0x270001, 0x260000, 0x250304, 0x240048, 0x230004, 0x220000, 0x211E21,
    0x200393, 0x1F43EC, 0x1E318C, 0x1D318C, 0x1C0488, 0x1B0002, 0x1A0DB0, 0x190624,
    0x18071A, 0x17007C, 0x160001, 0x150401, 0x14E048, 0x1327B7, 0x120064, 0x11012C,
    0x100080, 0x0F064F, 0x0E1E70, 0x0D4000, 0x0C5001, 0x0B0018, 0x0A10D8, 0x090604,
    0x082000, 0x0740B2, 0x06C802, 0x0500C8, 0x040A43, 0x030642, 0x020500, 0x010808,
    0x00249C,
];

#[cfg(test)]
mod test {
    use super::*;

    const ALL_IMAGES: [&[u32; REG_COUNT]; 4] =
        [&CFG_102M4, &CFG_204M8, &CFG_409M6, &CFG_737M0];

    #[test]
    fn test_images_cover_every_register_descending() {
        for image in ALL_IMAGES {
            for (index, word) in image.iter().enumerate() {
                assert_eq!(word >> 16, (REG_COUNT - 1 - index) as u32);
            }
        }
    }

    #[test]
    fn test_final_word_recalibrates() {
        for image in ALL_IMAGES {
            let r0 = image[REG_COUNT - 1];
            assert_ne!(r0 & R0_FCAL_EN, 0);
            assert_eq!(r0 & (R0_RESET | R0_POWERDOWN), 0);
        }
    }
}
