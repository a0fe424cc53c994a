//! Frame drawing and presentation backends
//!
//! Every backend draws through the same logical [`canvas::Canvas`], so the
//! window, headless and recording paths produce identical frames.

/// Logical frame buffer and bar drawing
pub mod canvas;
/// The rendering capability and a call-recording implementation
pub mod frame;
/// Display-free renderer with progress feedback
pub mod headless;
/// Animated GIF capture of rendered frames
pub mod recorder;
/// Native window renderer and quit handling
pub mod window;
