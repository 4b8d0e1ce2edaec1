//! Runtime module - winit/softbuffer integration for the demo
//!
//! - `app` - ApplicationHandler, window management, frame scheduling
//! - `mouse` - winit pointer events to dock messages
//! - `paint` - software painting of a `DockFrame`

pub mod app;
pub mod mouse;
pub mod paint;

pub use app::App;
