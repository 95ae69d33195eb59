//! Capture input: the camera side of code entry.
//!
//! Decoding is the device's business; the gate only asks for "a string or
//! nothing". A device is held through [`CaptureSession`], which releases it on
//! every exit path, including early returns and panics.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// How a code reached the verifier. Recorded for logs only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeSource {
    Camera,
    Manual,
}

impl fmt::Display for CodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera available")]
    NoDevice,

    #[error("{0}")]
    Other(String),
}

/// A code-producing device such as a camera with a QR decoder.
pub trait CaptureDevice {
    /// Start the device stream.
    fn acquire(&mut self) -> Result<(), CaptureError>;

    /// The next decoded code, if any.
    fn next_code(&mut self) -> Option<String>;

    /// Stop the device stream.
    fn release(&mut self);
}

/// A live capture. Dropping it releases the device.
pub struct CaptureSession<'a, D: CaptureDevice + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: CaptureDevice + ?Sized> CaptureSession<'a, D> {
    /// Acquire `device`. Nothing needs releasing when acquisition fails.
    pub fn open(device: &'a mut D) -> Result<Self, CaptureError> {
        device.acquire()?;
        debug!("capture started");
        Ok(Self { device })
    }

    pub fn next_code(&mut self) -> Option<String> {
        self.device.next_code()
    }
}

impl<D: CaptureDevice + ?Sized> Drop for CaptureSession<'_, D> {
    fn drop(&mut self) {
        self.device.release();
        debug!("capture stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        acquired: u32,
        released: u32,
        fail: bool,
        code: Option<String>,
    }

    impl CaptureDevice for Counting {
        fn acquire(&mut self) -> Result<(), CaptureError> {
            if self.fail {
                return Err(CaptureError::PermissionDenied);
            }
            self.acquired += 1;
            Ok(())
        }

        fn next_code(&mut self) -> Option<String> {
            self.code.take()
        }

        fn release(&mut self) {
            self.released += 1;
        }
    }

    #[test]
    fn session_releases_on_drop() {
        let mut dev = Counting {
            code: Some("VP-1".into()),
            ..Default::default()
        };
        {
            let mut session = CaptureSession::open(&mut dev).unwrap();
            assert_eq!(session.next_code().as_deref(), Some("VP-1"));
            assert_eq!(session.next_code(), None);
        }
        assert_eq!((dev.acquired, dev.released), (1, 1));
    }

    #[test]
    fn failed_acquire_releases_nothing() {
        let mut dev = Counting {
            fail: true,
            ..Default::default()
        };
        assert!(matches!(
            CaptureSession::open(&mut dev),
            Err(CaptureError::PermissionDenied)
        ));
        assert_eq!(dev.released, 0);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut dev = Counting::default();
        let dyn_dev: &mut dyn CaptureDevice = &mut dev;
        drop(CaptureSession::open(dyn_dev).unwrap());
        assert_eq!(dev.released, 1);
    }
}
