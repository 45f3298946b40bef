//! Observability for sigma-codec
//!
//! Structured JSON log lines for codec lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on decoding or encoding
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use sigma_codec::observability::{Logger, Event, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! Logger::warn(Event::DecodeRejected.as_str(), &[("path", "$.args[0]")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
