//! Notepad-12FX device detection and access.

use std::time::Duration;

use rusb::{Context, DeviceHandle, UsbContext};
use tracing::{debug, info};

use notepad_core::{PRODUCT_ID, SourceRequest, VENDOR_ID};

use crate::error::{UsbError, UsbResult};
use crate::transport::MixerTransport;

/// An opened Notepad-12FX mixer.
///
/// Holds the device handle (which keeps the libusb context alive); both are
/// released on drop, on every exit path.
#[derive(Debug)]
pub struct NotepadDevice {
    handle: DeviceHandle<Context>,
}

impl NotepadDevice {
    /// Open the first Notepad-12FX on the bus.
    ///
    /// # Errors
    /// Returns an error if libusb cannot be initialized, no mixer is
    /// connected, or the device cannot be opened (typically a permission
    /// problem under default USB access policy).
    pub fn open() -> UsbResult<Self> {
        let context = Context::new().map_err(UsbError::Init)?;
        Self::open_with(&context)
    }

    /// Open the first Notepad-12FX visible through `context`.
    pub fn open_with(context: &Context) -> UsbResult<Self> {
        let devices = context.devices().map_err(UsbError::Init)?;

        for device in devices.iter() {
            let Ok(desc) = device.device_descriptor() else {
                continue;
            };

            if desc.vendor_id() != VENDOR_ID || desc.product_id() != PRODUCT_ID {
                continue;
            }

            info!(bus = device.bus_number(), address = device.address(), "Notepad-12FX found");

            let handle = match device.open() {
                Ok(handle) => handle,
                Err(rusb::Error::Access) => return Err(UsbError::PermissionDenied),
                Err(e) => return Err(UsbError::Open(e)),
            };

            return Ok(Self { handle });
        }

        Err(UsbError::DeviceNotFound)
    }
}

impl MixerTransport for NotepadDevice {
    fn send_control(&mut self, request: &SourceRequest, timeout: Duration) -> UsbResult<usize> {
        debug!(
            request_type = format_args!("{:#04x}", request.request_type),
            request = request.request,
            len = request.payload.len(),
            "write_control"
        );
        self.handle
            .write_control(
                request.request_type,
                request.request,
                request.value,
                request.index,
                &request.payload,
                timeout,
            )
            .map_err(UsbError::Transfer)
    }
}
