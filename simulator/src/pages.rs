//! Page navigation for the simulator.
//!
//! Press `Y` to toggle between the watchface and the debug page.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The watchface itself.
    #[default]
    Face,

    /// Frame timing, render counters and the debug log.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }
}
