//! Observable codec events

use std::fmt;

/// Observable events in sigma-codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Decode of a wire payload begins
    DecodeStart,
    /// Payload decoded into a tree
    DecodeComplete,
    /// Payload rejected
    DecodeRejected,
    /// Tree encoded to wire JSON
    EncodeComplete,
    /// Codec configuration loaded
    ConfigLoaded,
    /// CLI command failed
    CommandFailed,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DecodeStart => "DECODE_START",
            Event::DecodeComplete => "DECODE_COMPLETE",
            Event::DecodeRejected => "DECODE_REJECTED",
            Event::EncodeComplete => "ENCODE_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::DecodeRejected.as_str(), "DECODE_REJECTED");
        assert_eq!(Event::ConfigLoaded.to_string(), "CONFIG_LOADED");
    }
}
