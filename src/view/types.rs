use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    Pending,
    ConfirmedHeader,
    Address(String),
    NoneConfirmed,
    TotalTested(u64),
    CatchAllWarning,
    Error(String),
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Validating, please wait..."),
            Self::ConfirmedHeader => f.write_str("Confirmed emails:"),
            Self::Address(address) => write!(f, "- {address}"),
            Self::NoneConfirmed => f.write_str("No confirmed email."),
            Self::TotalTested(total) => write!(f, "Total tested: {total}"),
            Self::CatchAllWarning => {
                f.write_str("Warning: catch-all domain, confirmations are unreliable.")
            }
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Full content of the results area. Replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    phase: Phase,
    lines: Vec<ResultLine>,
}

impl ResultsView {
    pub(crate) fn new(phase: Phase, lines: Vec<ResultLine>) -> Self {
        Self { phase, lines }
    }

    pub fn idle() -> Self {
        Self::new(Phase::Idle, Vec::new())
    }

    pub fn pending() -> Self {
        Self::new(Phase::Pending, vec![ResultLine::Pending])
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lines(&self) -> &[ResultLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::idle()
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
