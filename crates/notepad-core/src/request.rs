//! Layout of the vendor control request that switches the source.
//!
//! The wire contract must stay bit-exact: the mixer accepts a single
//! host-to-device vendor request with an 8-byte payload where only byte 4
//! varies (the source code).

use crate::source::Source;

/// USB Vendor ID of the Soundcraft Notepad-12FX.
pub const VENDOR_ID: u16 = 0x05fc;
/// USB Product ID of the Soundcraft Notepad-12FX.
pub const PRODUCT_ID: u16 = 0x0032;

/// bmRequestType: host-to-device, vendor-specific, device recipient.
pub const REQUEST_TYPE_OUT_VENDOR_DEVICE: u8 = 0x40;
/// bRequest for the source-select command.
pub const REQUEST_SET_SOURCE: u8 = 16;

/// A fully-formed source-select control request.
///
/// Immutable after construction; the transport sends it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRequest {
    /// bmRequestType field
    pub request_type: u8,
    /// bRequest field
    pub request: u8,
    /// wValue field
    pub value: u16,
    /// wIndex field
    pub index: u16,
    /// 8-byte data stage, source code at offset 4
    pub payload: [u8; 8],
}

impl SourceRequest {
    /// Build the request selecting `source` for channels 3/4.
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            request_type: REQUEST_TYPE_OUT_VENDOR_DEVICE,
            request: REQUEST_SET_SOURCE,
            value: 0,
            index: 0,
            payload: [0x00, 0x00, 0x04, 0x00, source.code(), 0x00, 0x00, 0x00],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fields() {
        let req = SourceRequest::new(Source::Mic34);
        assert_eq!(req.request_type, 0x40);
        assert_eq!(req.request, 16);
        assert_eq!(req.value, 0);
        assert_eq!(req.index, 0);
        assert_eq!(req.payload.len(), 8);
    }

    #[test]
    fn test_payload_template() {
        let req = SourceRequest::new(Source::MainLR);
        assert_eq!(req.payload, [0x00, 0x00, 0x04, 0x00, 0x03, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_only_byte_four_varies() {
        for source in Source::ALL {
            let req = SourceRequest::new(source);
            assert_eq!(req.payload[4], source.code());

            let mut rest = req.payload;
            rest[4] = 0;
            assert_eq!(rest, [0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00]);
        }
    }
}
