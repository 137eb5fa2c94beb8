//! Shared types and enums used across romanwords.
//! Includes the evaluation `Mode`, the arithmetic `Operator`, and the
//! `BatchState` a run moves through.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How degraded input is treated.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Unknown characters, unknown operators, division by zero and overflow
    /// all quietly evaluate to 0.
    #[default]
    Lenient,
    /// Every degraded case is reported as an error and the line is skipped.
    Strict,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Lenient => write!(f, "Lenient"),
            Mode::Strict => write!(f, "Strict"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Lifecycle of one batch run. `Done` and `Failed` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BatchState {
    Start,
    ResourcesOpening,
    ResourcesReady,
    ProcessingLines,
    Draining,
    Done,
    Failed,
}

impl BatchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BatchState::Done | BatchState::Failed)
    }
}

impl std::fmt::Display for BatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BatchState::Start => "Start",
            BatchState::ResourcesOpening => "ResourcesOpening",
            BatchState::ResourcesReady => "ResourcesReady",
            BatchState::ProcessingLines => "ProcessingLines",
            BatchState::Draining => "Draining",
            BatchState::Done => "Done",
            BatchState::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}
