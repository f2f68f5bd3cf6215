//! Notepad core - domain model for the Notepad-12FX source selector.
//!
//! This crate contains the hardware-independent parts: the channel 3/4
//! source enumeration and the layout of the vendor control request that
//! selects it. Actual USB access lives in `notepad-usb`.

pub mod error;
pub mod request;
pub mod source;

pub use error::{Error, Result};
pub use request::{PRODUCT_ID, SourceRequest, VENDOR_ID};
pub use source::Source;
