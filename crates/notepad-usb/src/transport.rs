//! Transport seam and the source-select operation.

use std::time::Duration;

use tracing::debug;

use notepad_core::{Source, SourceRequest};

use crate::error::{UsbError, UsbResult};

/// Something that can carry a control request to the mixer.
///
/// Implemented by [`crate::NotepadDevice`] for real hardware and by mocks
/// in tests. `send_control` returns the number of payload bytes accepted.
pub trait MixerTransport {
    fn send_control(&mut self, request: &SourceRequest, timeout: Duration) -> UsbResult<usize>;
}

/// Select `source` as the input for channels 3/4.
///
/// Sends exactly one control transfer and requires the full payload to be
/// accepted. A `timeout` of zero waits forever (libusb semantics).
///
/// # Errors
/// Returns an error if the transfer fails or completes short.
pub fn set_source<T: MixerTransport>(
    transport: &mut T,
    source: Source,
    timeout: Duration,
) -> UsbResult<()> {
    let request = SourceRequest::new(source);
    debug!(source = %source, code = source.code(), "selecting channel 3/4 source");

    let written = transport.send_control(&request, timeout)?;
    if written != request.payload.len() {
        return Err(UsbError::ShortTransfer { written, expected: request.payload.len() });
    }

    Ok(())
}
