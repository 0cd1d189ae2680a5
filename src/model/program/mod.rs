use crate::{Command, Diagnostic};
use std::fmt;

mod parser;

pub use parser::parse_program;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statement {
    /// 1-based source line, if the command came from program text.
    pub line: Option<usize>,
    pub command: Command,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self::new(
            commands
                .into_iter()
                .map(|command| Statement {
                    line: None,
                    command,
                })
                .collect(),
        )
    }

    pub fn parse(text: &str) -> (Self, Vec<Diagnostic>) {
        parse_program(text)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.statements.iter().map(|statement| &statement.command)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Canonical text: one command per line, re-parseable by [`parse_program`].
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in self.commands() {
            writeln!(f, "{}", command)?;
        }

        Ok(())
    }
}
