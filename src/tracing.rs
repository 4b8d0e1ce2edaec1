//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag and
//! reorder state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=order=debug` - only order/drag diffs
//! - `RUST_LOG=magdock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/magdock/logs/magdock.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DockModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "magdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(err) => {
            // The subscriber is not installed yet, so stderr is the only sink
            eprintln!("magdock: file logging disabled: {}", err);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of order and drag state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSnapshot {
    /// Item keys in display order
    pub keys: Vec<usize>,
    pub dragged: Option<usize>,
    pub animating: bool,
}

impl OrderSnapshot {
    pub fn from_model<T>(model: &DockModel<T>) -> Self {
        Self {
            keys: model.sequence.keys().map(|k| k.0).collect(),
            dragged: model.drag.dragged.map(|k| k.0),
            animating: model.is_animating(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &OrderSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.keys != other.keys {
            changes.push(format!("order: {:?} → {:?}", self.keys, other.keys));
        }
        if self.dragged != other.dragged {
            changes.push(match (self.dragged, other.dragged) {
                (None, Some(k)) => format!("drag start #{}", k),
                (Some(k), None) => format!("drag end #{}", k),
                (before, after) => format!("dragged: {:?} → {:?}", before, after),
            });
        }
        if self.animating != other.animating {
            let status = if other.animating { "started" } else { "settled" };
            changes.push(format!("animation {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(keys: &[usize], dragged: Option<usize>, animating: bool) -> OrderSnapshot {
        OrderSnapshot {
            keys: keys.to_vec(),
            dragged,
            animating,
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let a = snapshot(&[0, 1, 2], Some(1), true);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_order_change() {
        let before = snapshot(&[0, 1, 2], Some(0), false);
        let after = snapshot(&[1, 0, 2], Some(0), false);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("order: [0, 1, 2] → [1, 0, 2]")
        );
    }

    #[test]
    fn test_drag_start_and_end() {
        let idle = snapshot(&[0, 1], None, false);
        let dragging = snapshot(&[0, 1], Some(1), false);
        assert_eq!(idle.diff(&dragging).as_deref(), Some("drag start #1"));
        assert_eq!(dragging.diff(&idle).as_deref(), Some("drag end #1"));

        let other = snapshot(&[0, 1], Some(0), false);
        assert_eq!(
            dragging.diff(&other).as_deref(),
            Some("dragged: Some(1) → Some(0)")
        );
    }

    #[test]
    fn test_animation_started_and_settled() {
        let rest = snapshot(&[0], None, false);
        let running = snapshot(&[0], None, true);
        assert_eq!(rest.diff(&running).as_deref(), Some("animation started"));
        assert_eq!(running.diff(&rest).as_deref(), Some("animation settled"));
    }

    #[test]
    fn test_changes_are_joined() {
        let before = snapshot(&[0, 1], Some(0), false);
        let after = snapshot(&[1, 0], Some(0), true);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("order: [0, 1] → [1, 0]; animation started")
        );
    }
}
