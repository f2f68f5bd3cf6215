//! USB error types.

use thiserror::Error;

/// USB error type.
#[derive(Debug, Error)]
pub enum UsbError {
    #[error("USB initialization failed: {0}")]
    Init(#[source] rusb::Error),

    #[error("Notepad-12FX not found (vendor 05fc, product 0032)")]
    DeviceNotFound,

    #[error("Permission denied opening the mixer - run as root or install a udev rule")]
    PermissionDenied,

    #[error("Failed to open the mixer: {0}")]
    Open(#[source] rusb::Error),

    #[error("Control transfer failed: {0}")]
    Transfer(#[source] rusb::Error),

    #[error("Short control transfer: wrote {written} of {expected} bytes")]
    ShortTransfer { written: usize, expected: usize },
}

/// Result type for USB operations.
pub type UsbResult<T> = Result<T, UsbError>;
