//! Clipboard export of estimate summaries.
//!
//! The [`ClipboardController`] writes to a [`ClipboardSink`] and exposes a
//! transient "copied" flag that resets on a timer. A failed copy is reported
//! through the status and never touches the displayed estimate.

mod feedback;
mod sink;

pub use feedback::{ClipboardController, CopyStatus, DEFAULT_RESET_DELAY};
pub use sink::{ClipboardSink, CommandClipboard, MemoryClipboard};
