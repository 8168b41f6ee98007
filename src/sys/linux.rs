use std::ffi::{CStr, CString};
use std::io;
use libc::{c_int, c_ulong, c_void};
use crate::{Error, Result};

// From <linux/i2c-dev.h>; the libc crate does not export the I2C ioctls.
const I2C_SLAVE_FORCE: c_ulong = 0x0706;

#[derive(Debug)]
struct Fd(c_int);

impl Fd {
    fn open(path: &CStr) -> io::Result<Fd> {
        unsafe {
            let bus_fd = libc::open(path.as_ptr(), libc::O_RDWR);
            if bus_fd == -1 {
                Err(io::Error::last_os_error())
            } else {
                Ok(Fd(bus_fd))
            }
        }
    }

    fn ioctl(&self, request: c_ulong, argument: c_ulong) -> io::Result<()> {
        unsafe {
            if libc::ioctl(self.0, request, argument) == -1 {
                Err(io::Error::last_os_error())
            } else {
                Ok(())
            }
        }
    }

    fn write(&self, data: &[u8]) -> io::Result<()> {
        unsafe {
            let bytes_written = libc::write(self.0, data.as_ptr() as *const c_void, data.len()) as usize;
            if bytes_written != data.len() {
                Err(io::Error::last_os_error())
            } else {
                Ok(())
            }
        }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        unsafe {
            if libc::close(self.0) == -1 {
                panic!("error closing fd: {}", io::Error::last_os_error())
            }
        }
    }
}

#[derive(Debug)]
pub struct I2cBusImpl {
    fd: Fd,
}

impl I2cBusImpl {
    /// Opens `/dev/i2c-{i2c_bus}` and binds the descriptor to `address`.
    /// Every subsequent write addresses that slave.
    pub fn open(i2c_bus: u32, address: u16) -> Result<I2cBusImpl> {
        let path = CString::new(format!("/dev/i2c-{}", i2c_bus)).unwrap();
        let fd = Fd::open(path.as_ref()).map_err(|error|
            if error.kind() == io::ErrorKind::NotFound {
                Error::NotFound
            } else {
                Error::I2cIo(error)
            })?;
        // I2C_SLAVE would refuse the address while a kernel driver holds it
        fd.ioctl(I2C_SLAVE_FORCE, address as c_ulong).map_err(Error::I2cIo)?;
        log::trace!("opened {:?} with slave address {:#04x}", path, address);
        Ok(I2cBusImpl { fd })
    }
}

impl super::Bus for I2cBusImpl {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.fd.write(data).map_err(Error::I2cIo)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_open_missing_bus() {
        // no Linux system numbers its I2C adapters this high
        match I2cBusImpl::open(u32::MAX, 0x2f) {
            Err(Error::NotFound) => (),
            result => panic!("expected Error::NotFound, got {:?}", result),
        }
    }
}
