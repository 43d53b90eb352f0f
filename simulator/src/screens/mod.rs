//! Full-screen pages other than the face.

mod debug;

pub use debug::draw_debug_page;
