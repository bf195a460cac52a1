//! Page effects outside the two canvases.

pub mod ambient;
pub mod konami;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod stats;
pub mod tilt;
pub mod typing;
pub mod viewport;
