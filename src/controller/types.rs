use crate::client::{ClientError, ValidationResponse};
use crate::view::ResultsView;

/// Value carried by the display channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    /// Generation of the submission that produced `view`; `0` before the
    /// first submission.
    pub generation: u64,
    pub view: ResultsView,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Rendered(ValidationResponse),
    Errored(ClientError),
    /// A newer submission started before this one resolved; its result was
    /// dropped without touching the display.
    Superseded,
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
