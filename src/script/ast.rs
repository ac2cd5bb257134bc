use crate::export::Dialect;
use crate::ir::{GateId, GateKind};

/// Raw command as read from a script line, before gate names are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommand {
    SetLanes(usize),
    AddLane,
    RemoveLane,
    Place(String, usize, usize), // Gate, Qubit, Step
    Drag(String),
    Drop(usize, usize), // Qubit, Step
    Quick(String),
    Select(String),
    Erase(Option<String>),
    Clear,
    Export(Option<Dialect>),
}

/// A designer interaction, replayable against a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the lane count (clamped).
    SetLanes(usize),
    /// Palette "+" button.
    AddLane,
    /// Palette "-" button.
    RemoveLane,
    /// Drag-and-drop in one step.
    Place {
        kind: GateKind,
        qubit: usize,
        step: usize,
    },
    /// Pick a gate up from the palette.
    Drag(GateKind),
    /// Release the dragged gate on a cell.
    Drop { qubit: usize, step: usize },
    /// Quick-add button.
    QuickAdd(GateKind),
    Select(GateId),
    /// Double-click erase; `None` erases the current selection.
    Erase(Option<GateId>),
    Clear,
    /// Copy the export to the clipboard, optionally switching dialect.
    Export(Option<Dialect>),
}

/// A command with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}
