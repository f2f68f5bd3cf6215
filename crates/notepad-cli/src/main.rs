//! notepad-source - set the channel 3/4 input source on a Soundcraft
//! Notepad-12FX mixer.
//!
//! The mixer exposes MIC 1/2 as USB channels 1 and 2; channels 3 and 4 are
//! switchable between MIC 3/4, STEREO 5/6, STEREO 7/8 and MAIN L/R. This
//! tool sends the one vendor control transfer that flips the switch.
//!
//! Opening the device usually needs root (or a udev rule) under default
//! USB permissions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use notepad_core::{Source, SourceRequest};
use notepad_usb::{MixerTransport, NotepadDevice, UsbResult, set_source};

#[derive(Debug, Parser)]
#[command(name = "notepad-source", version, about = "Select the input source for channels 3/4 of a Soundcraft Notepad-12FX")]
struct Args {
    /// Input source: 34 (MIC 3/4), 56 (STEREO 5/6), 78 (STEREO 7/8) or LR (MAIN L/R)
    #[arg(value_name = "SOURCE", default_value_t = Source::default())]
    source: Source,

    /// Control transfer timeout in milliseconds; 0 waits forever
    #[arg(long, value_name = "MS", default_value_t = 0)]
    timeout_ms: u64,

    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; the success path stays silent on stdout.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args, NotepadDevice::open)
}

/// The mixer is opened through `open_mixer` so the transfer path can be
/// exercised against a fake transport in tests.
fn run<T, F>(args: &Args, open_mixer: F) -> Result<()>
where
    T: MixerTransport,
    F: FnOnce() -> UsbResult<T>,
{
    if args.dry_run {
        let request = SourceRequest::new(args.source);
        println!(
            "would send bmRequestType={:#04x} bRequest={} wValue={} wIndex={} data={:02x?}",
            request.request_type, request.request, request.value, request.index, request.payload
        );
        return Ok(());
    }

    debug!(source = %args.source, timeout_ms = args.timeout_ms, "opening mixer");
    let mut device = open_mixer().context("Failed to open the Notepad-12FX")?;

    set_source(&mut device, args.source, Duration::from_millis(args.timeout_ms))
        .context("Failed to set the channel 3/4 source")?;

    info!(source = %args.source, "channel 3/4 source selected");
    Ok(())
}
