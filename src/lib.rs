mod sys;
mod regs;
mod config;
mod device;

use std::io;

#[derive(Debug)]
pub enum Error {
    NotFound,
    I2cIo(std::io::Error),
    UnsupportedBoard(String),
    UnsupportedFrequency(f64),
    Other(Box<dyn std::error::Error + Sync + Send + 'static>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound =>
                write!(f, "I2C bus not present"),
            Self::I2cIo(io_error) =>
                write!(f, "I2C I/O error: {}", io_error),
            Self::UnsupportedBoard(name) =>
                write!(f, "board {:?} is not supported", name),
            Self::UnsupportedFrequency(mhz) =>
                write!(f, "reference frequency of {} MHz is not supported", mhz),
            Self::Other(error) =>
                write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            &Self::I2cIo(ref io_error) => Some(io_error),
            _ => None
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound =>
                Self::new(io::ErrorKind::NotFound, error),
            Error::I2cIo(io_error) =>
                io_error,
            Error::UnsupportedBoard(_) | Error::UnsupportedFrequency(_) =>
                Self::new(io::ErrorKind::InvalidInput, error),
            Error::Other(error) => {
                match error.downcast::<std::io::Error>() {
                    Ok(error) => *error,
                    Err(error) => std::io::Error::new(io::ErrorKind::Other, error)
                }
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        match error.downcast::<Self>() {
            Ok(error) => error,
            Err(error) => Error::Other(error.into()),
        }
    }
}

pub type Result<T> =
    core::result::Result<T, Error>;

pub use config::{
    Board,
    RefFrequency,
};

pub type Device =
    device::Device<crate::sys::imp::I2cBusImpl>;

/// Programs every reference clock chip on `board` for `frequency`, using
/// the board's default I2C bus. The bus is released again on return.
pub fn set_all_ref_clks(board: Board, frequency: RefFrequency) -> Result<()> {
    Device::new(board)?.set_ref_clks(frequency)
}
