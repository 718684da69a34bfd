//! Watchface event log.
//!
//! Ring buffer of short messages about lifecycle and service events (load, unload,
//! battery text changes, connection changes, vibration). The host can read it back for
//! display or diagnostics. With the `defmt` feature every message is also sent to the
//! defmt logger.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("loaded");
//! log.push("bt connected");
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 16;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 32;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of watchface events.
///
/// Keeps the last `LOG_BUFFER_SIZE` lines; the oldest line is dropped when full.
pub struct EventLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
    total: u32,
}

impl EventLog {
    /// Create a new empty log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Push a message, truncated to `LOG_LINE_LENGTH - 1` characters.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            line.push(c).ok();
        }
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        #[cfg(feature = "defmt")]
        defmt::info!("watchface: {=str}", line.as_str());

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Number of lines currently held.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether the log holds no lines.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Lines pushed since creation, including those already dropped.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("loaded");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("loaded"));

        log.push("bt disconnected");
        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 2);
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();
        for i in 0..LOG_BUFFER_SIZE as u32 {
            log.push(&i.to_string());
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // One more drops the oldest
        log.push("new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.total(), LOG_BUFFER_SIZE as u32 + 1);
    }

    #[test]
    fn test_event_log_truncation() {
        let mut log = EventLog::new();
        log.push("a message that is far longer than one log line can hold");
        let stored = log.last().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH - 1);
    }
}
