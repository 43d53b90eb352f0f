//! Debug log ring buffer.
//!
//! Engine events (settings loaded or defaulted, configuration accepted or
//! rejected, failed saves, hand moves) are kept in a small fixed-capacity
//! ring buffer that a host can show on screen. Nothing here allocates.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Settings loaded");
//! log.push_fmt(format_args!("n={} shift={}", 12, 3));
//!
//! for line in log.iter() {
//!     // draw line
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

/// Number of lines kept.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per line; fits a 144 px wide screen in a 6 px font.
pub const LOG_LINE_LENGTH: usize = 24;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

/// Writer that drops whatever does not fit instead of failing.
struct Truncating<'a>(&'a mut LogLine);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Ring buffer of the most recent log lines.
pub struct DebugLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
    /// Lines pushed since creation, including dropped ones.
    total: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Push a message, truncated to [`LOG_LINE_LENGTH`]. The oldest line is
    /// dropped when the buffer is full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        self.push_fmt(format_args!("{msg}"));
    }

    /// Push a formatted message without allocating.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = LogLine::new();
        Truncating(&mut line).write_fmt(args).ok();

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Lines pushed since creation.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Append a decimal `u32` to a heapless string. Digits that do not fit are dropped.
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }
    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

/// Append a decimal `i32` to a heapless string.
pub fn push_i32<const N: usize>(
    s: &mut String<N>,
    val: i32,
) {
    if val < 0 {
        s.push('-').ok();
    }
    push_u32(s, val.unsigned_abs());
}
