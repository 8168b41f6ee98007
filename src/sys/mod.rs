use crate::Error;

pub trait Bus {
    /// Transfers `data` to the bound slave in a single I2C write transaction.
    fn write(&mut self, data: &[u8]) -> Result<(), Error>;
}

#[cfg(any(target_os = "linux"))]
#[path = "linux.rs"]
pub mod imp;
