//! Designer command scripts.
//!
//! A script replays designer interactions, one command per line:
//!
//! ```text
//! # two bonded pairs, then a measurement
//! lanes 4
//! place helix 0 0
//! drag bond
//! drop 0 1
//! quick measure
//! export bare
//! ```

pub mod ast;
pub mod rules;

use self::ast::ParsedCommand;
use self::rules::{command, comment};
use crate::error::{ScriptError, SessionError};
use crate::ir::{GateId, GateKind};
use crate::session::{DesignerSession, Outcome};
use nom::{
    character::complete::space0,
    combinator::{all_consuming, opt},
    sequence::{pair, terminated},
};
use tracing::debug;

pub use self::ast::{Command, Statement};

// --- Resolution ---

fn resolve_gate(name: &str, line: usize) -> Result<GateKind, ScriptError> {
    name.parse().map_err(|_| ScriptError::UnknownGate {
        line,
        name: name.to_string(),
    })
}

fn resolve(parsed: ParsedCommand, line: usize) -> Result<Command, ScriptError> {
    let command = match parsed {
        ParsedCommand::SetLanes(n) => Command::SetLanes(n),
        ParsedCommand::AddLane => Command::AddLane,
        ParsedCommand::RemoveLane => Command::RemoveLane,
        ParsedCommand::Place(gate, qubit, step) => Command::Place {
            kind: resolve_gate(&gate, line)?,
            qubit,
            step,
        },
        ParsedCommand::Drag(gate) => Command::Drag(resolve_gate(&gate, line)?),
        ParsedCommand::Drop(qubit, step) => Command::Drop { qubit, step },
        ParsedCommand::Quick(gate) => Command::QuickAdd(resolve_gate(&gate, line)?),
        ParsedCommand::Select(id) => Command::Select(GateId::from(id)),
        ParsedCommand::Erase(id) => Command::Erase(id.map(GateId::from)),
        ParsedCommand::Clear => Command::Clear,
        ParsedCommand::Export(dialect) => Command::Export(dialect),
    };
    Ok(command)
}

/// Parses a script into statements, skipping blank and comment lines.
pub fn parse_script(input: &str) -> Result<Vec<Statement>, ScriptError> {
    let mut statements = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || comment(text).is_ok() {
            continue;
        }

        let (_, parsed) = all_consuming(terminated(command, pair(space0, opt(comment))))(text)
            .map_err(|_| ScriptError::Syntax {
                line,
                text: text.to_string(),
            })?;

        statements.push(Statement {
            line,
            command: resolve(parsed, line)?,
        });
    }

    Ok(statements)
}

/// Parses a script and applies it to a session, stopping at the first
/// failing command.
pub fn run_script(session: &mut DesignerSession, input: &str) -> Result<Vec<Outcome>, SessionError> {
    let statements = parse_script(input)?;
    debug!(count = statements.len(), "replaying script");

    let mut outcomes = Vec::with_capacity(statements.len());
    for Statement { line, command } in &statements {
        let outcome = session
            .apply(command)
            .map_err(|source| SessionError::Command {
                line: *line,
                source,
            })?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Dialect;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let script = "\n# header\n  // another\nclear\n\nquick x  # trailing\n";
        let statements = parse_script(script).unwrap();
        assert_eq!(
            statements,
            vec![
                Statement {
                    line: 4,
                    command: Command::Clear
                },
                Statement {
                    line: 6,
                    command: Command::QuickAdd(GateKind::PauliX)
                },
            ]
        );
    }

    #[test]
    fn test_parse_resolves_gates() {
        let statements = parse_script("place bond 1 3\ndrag measure\nexport indexed").unwrap();
        let commands: Vec<_> = statements.into_iter().map(|s| s.command).collect();
        assert_eq!(
            commands,
            vec![
                Command::Place {
                    kind: GateKind::Entangle,
                    qubit: 1,
                    step: 3
                },
                Command::Drag(GateKind::Measure),
                Command::Export(Some(Dialect::Indexed)),
            ]
        );
    }

    #[test]
    fn test_syntax_error_line() {
        let err = parse_script("clear\nplace helix zero 0\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::Syntax {
                line: 2,
                text: "place helix zero 0".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(matches!(
            parse_script("clearall"),
            Err(ScriptError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_gate() {
        let err = parse_script("quick toffoli").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownGate {
                line: 1,
                name: "toffoli".to_string()
            }
        );
    }
}
