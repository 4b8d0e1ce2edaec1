//! magdock - proximity-magnifying, drag-to-reorder item dock
//!
//! This crate provides the core types and logic for a single-row dock whose
//! items grow as the pointer approaches during a drag, and which can be
//! reordered by dragging an item across the row. It follows the Elm
//! Architecture: messages go through `update`, which mutates the model and
//! returns a command; `view::render_frame` is a pure read of the model.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dock;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use dock::Dock;
pub use error::DockError;
pub use messages::Msg;
pub use model::DockModel;
