//! Overlay widgets for the simulator display.

mod popups;

pub use popups::draw_popup;
