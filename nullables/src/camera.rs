//! Nullable camera: a capture device that decodes scripted codes.

use society_verification::{CaptureDevice, CaptureError};
use std::collections::VecDeque;

/// A test capture device.
///
/// Yields queued codes in order, one per capture, and counts how often the
/// stream was started and stopped.
#[derive(Debug, Default)]
pub struct NullCamera {
    codes: VecDeque<String>,
    unavailable: bool,
    live: bool,
    acquired: u32,
    released: u32,
}

impl NullCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera that refuses to start, as when permission is denied.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Queue a code for the next capture.
    pub fn enqueue(&mut self, code: impl Into<String>) {
        self.codes.push_back(code.into());
    }

    /// Make the camera start (or stop) refusing acquisition.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Whether the stream is currently running.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn acquired(&self) -> u32 {
        self.acquired
    }

    pub fn released(&self) -> u32 {
        self.released
    }
}

impl CaptureDevice for NullCamera {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        if self.unavailable {
            return Err(CaptureError::PermissionDenied);
        }
        self.live = true;
        self.acquired += 1;
        Ok(())
    }

    fn next_code(&mut self) -> Option<String> {
        if !self.live {
            return None;
        }
        self.codes.pop_front()
    }

    fn release(&mut self) {
        self.live = false;
        self.released += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use society_verification::CaptureSession;

    #[test]
    fn yields_queued_codes_in_order() {
        let mut cam = NullCamera::new();
        cam.enqueue("A");
        cam.enqueue("B");
        {
            let mut session = CaptureSession::open(&mut cam).unwrap();
            assert_eq!(session.next_code().as_deref(), Some("A"));
        }
        assert!(!cam.is_live());
        {
            let mut session = CaptureSession::open(&mut cam).unwrap();
            assert_eq!(session.next_code().as_deref(), Some("B"));
            assert_eq!(session.next_code(), None);
        }
        assert_eq!((cam.acquired(), cam.released()), (2, 2));
    }

    #[test]
    fn closed_camera_decodes_nothing() {
        let mut cam = NullCamera::new();
        cam.enqueue("A");
        assert_eq!(cam.next_code(), None);
    }

    #[test]
    fn unavailable_camera_refuses() {
        let mut cam = NullCamera::unavailable();
        assert!(CaptureSession::open(&mut cam).is_err());
        assert_eq!(cam.released(), 0);
        cam.set_unavailable(false);
        assert!(CaptureSession::open(&mut cam).is_ok());
    }
}
