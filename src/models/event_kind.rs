use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    #[value(name = "in")]
    ClockIn,
    #[value(name = "out")]
    ClockOut,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "in",
            EventKind::ClockOut => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventKind::ClockIn),
            "out" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    /// Upper-cased label used by exports (`IN` / `OUT`).
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "IN",
            EventKind::ClockOut => "OUT",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "Clock In",
            EventKind::ClockOut => "Clock Out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::ClockOut)
    }
}
