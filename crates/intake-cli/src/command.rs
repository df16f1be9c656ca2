//! Desk command parsing.
//!
//! One command per line. Keywords are case-sensitive and must stand alone as the first
//! whitespace-separated token.

use intake_core::Discipline;

pub const ADMIT_KEYWORD: &str = "IN";
pub const DISPATCH_KEYWORD: &str = "OUT";
pub const ALTERNATING_KEYWORD: &str = "ROUNDROBIN";
pub const FIFO_KEYWORD: &str = "DEFAULT";
pub const EXIT_KEYWORD: &str = "EXIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Admit { mr_number: String, gender: String },
    Dispatch,
    SetDiscipline(Discipline),
    Exit,
    /// `IN` without exactly two arguments.
    InvalidInput,
    /// Anything that is not a known command.
    InvalidCommand,
}

/// Parses a single input line. Never fails; unrecognised input maps to
/// [`Command::InvalidCommand`].
pub fn parse_line(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Command::InvalidCommand;
    };

    if keyword == ADMIT_KEYWORD {
        return match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(mr_number), Some(gender), None) => Command::Admit {
                mr_number: mr_number.to_string(),
                gender: gender.to_string(),
            },
            _ => Command::InvalidInput,
        };
    }

    // bare keywords take no arguments
    if tokens.next().is_some() {
        return Command::InvalidCommand;
    }

    match keyword {
        DISPATCH_KEYWORD => Command::Dispatch,
        ALTERNATING_KEYWORD => Command::SetDiscipline(Discipline::Alternating),
        FIFO_KEYWORD => Command::SetDiscipline(Discipline::Fifo),
        EXIT_KEYWORD => Command::Exit,
        _ => Command::InvalidCommand,
    }
}
