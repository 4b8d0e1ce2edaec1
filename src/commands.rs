//! Command types for the Elm-style architecture
//!
//! Commands are the explicit "needs redraw" signal returned by update
//! functions. The host decides when to actually paint.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Redraw once
    Redraw,
    /// Redraw and keep ticking every frame while the animation runs
    AnimationFrame,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::AnimationFrame => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if the host should schedule frame ticks
    pub fn wants_frames(&self) -> bool {
        match self {
            Cmd::AnimationFrame => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.wants_frames()),
            Cmd::None | Cmd::Redraw => false,
        }
    }
}
