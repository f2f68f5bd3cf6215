//! Notepad USB - Notepad-12FX hardware integration.
//!
//! This crate owns the libusb side of the tool: finding and opening the
//! mixer, and sending the single source-select control transfer. The
//! [`MixerTransport`] trait is the seam between the orchestration logic
//! and the real device, so the transfer path is testable without hardware.

pub mod device;
pub mod error;
pub mod transport;

pub use device::NotepadDevice;
pub use error::{UsbError, UsbResult};
pub use transport::{MixerTransport, set_source};
