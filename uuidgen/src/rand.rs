use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Number of random bytes needed to build a UUID
pub const RANDOM_BYTES: usize = 16;

const RANDOM_DEVICE: &str = "/dev/urandom";

#[derive(Error, Debug)]
pub enum Error {
    #[error("random device unavailable: {0}")]
    Unavailable(io::Error),
    #[error("random read failed: {0}")]
    Read(io::Error),
}

/// Source of random bytes suitable for security sensitive use. A buffer
/// gets filled completely or not at all, a partial fill surfaces as an
/// [Error] and the buffer content must not be used.
pub trait RandomSource {
    fn fill(&mut self, buf: &mut [u8; RANDOM_BYTES]) -> Result<(), Error>;
}

/// Handle on the system's non-blocking cryptographic random device. The
/// underlying file is closed when the handle goes out of scope.
pub struct RandomDevice {
    f: File,
}

impl RandomDevice {
    pub fn open() -> Result<Self, Error> {
        Self::from_path(RANDOM_DEVICE)
    }

    pub fn from_path<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let p = p.as_ref();
        let f = File::open(p).map_err(Error::Unavailable)?;
        debug!("opened random device: {}", p.to_string_lossy());
        Ok(Self { f })
    }
}

impl RandomSource for RandomDevice {
    fn fill(&mut self, buf: &mut [u8; RANDOM_BYTES]) -> Result<(), Error> {
        // read_exact maps a short read to UnexpectedEof so a partially
        // randomized buffer never reaches the caller
        self.f.read_exact(&mut buf[..]).map_err(Error::Read)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fill_from_device() {
        let mut dev = RandomDevice::open().unwrap();
        let mut buf = [0u8; RANDOM_BYTES];
        dev.fill(&mut buf).unwrap();
        // 16 zero bytes out of urandom would be a once in 2^128 event
        assert_ne!(buf, [0u8; RANDOM_BYTES]);
    }

    #[test]
    fn test_missing_device() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("urandom");
        assert!(matches!(
            RandomDevice::from_path(&missing),
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn test_short_read() {
        let tmp = tempfile::tempdir().unwrap();
        let short = tmp.path().join("short");
        std::fs::write(&short, [0x42u8; 10]).unwrap();
        let mut dev = RandomDevice::from_path(&short).unwrap();
        let mut buf = [0u8; RANDOM_BYTES];
        assert!(matches!(dev.fill(&mut buf), Err(Error::Read(_))));
    }
}
