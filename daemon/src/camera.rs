//! Simulated gate camera.
//!
//! There is no QR decoder; "detecting" yields the configured demo code.

use society_verification::{CaptureDevice, CaptureError};
use tracing::debug;

pub struct SimulatedCamera {
    available: bool,
    detect: Option<String>,
    live: bool,
}

impl SimulatedCamera {
    pub fn new(available: bool, detect: impl Into<String>) -> Self {
        let detect = detect.into();
        Self {
            available,
            detect: (!detect.trim().is_empty()).then_some(detect),
            live: false,
        }
    }
}

impl CaptureDevice for SimulatedCamera {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        if !self.available {
            return Err(CaptureError::Other(
                "please ensure camera permissions are granted".into(),
            ));
        }
        self.live = true;
        debug!("camera stream started");
        Ok(())
    }

    fn next_code(&mut self) -> Option<String> {
        self.live.then(|| self.detect.clone()).flatten()
    }

    fn release(&mut self) {
        if self.live {
            debug!("camera stream stopped");
        }
        self.live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use society_verification::CaptureSession;

    #[test]
    fn detects_demo_code_while_live() {
        let mut cam = SimulatedCamera::new(true, "VP-2024-001");
        assert_eq!(cam.next_code(), None);
        {
            let mut session = CaptureSession::open(&mut cam).unwrap();
            assert_eq!(session.next_code().as_deref(), Some("VP-2024-001"));
        }
        assert!(!cam.live);
        assert_eq!(cam.next_code(), None);
    }

    #[test]
    fn unavailable_camera_fails_to_start() {
        let mut cam = SimulatedCamera::new(false, "VP-2024-001");
        assert!(CaptureSession::open(&mut cam).is_err());
    }

    #[test]
    fn blank_demo_code_detects_nothing() {
        let mut cam = SimulatedCamera::new(true, "  ");
        let mut session = CaptureSession::open(&mut cam).unwrap();
        assert_eq!(session.next_code(), None);
    }
}
