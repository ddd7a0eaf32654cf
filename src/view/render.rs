use crate::client::{ClientError, ValidationResponse};

use super::{Phase, ResultLine, ResultsView};

/// Build the results area for a decoded response.
pub fn render(response: &ValidationResponse) -> ResultsView {
    let mut lines = Vec::with_capacity(response.confirmed.len() + 3);

    if response.confirmed.is_empty() {
        lines.push(ResultLine::NoneConfirmed);
    } else {
        lines.push(ResultLine::ConfirmedHeader);
        lines.extend(response.confirmed.iter().cloned().map(ResultLine::Address));
    }

    lines.push(ResultLine::TotalTested(response.total_tested));

    if response.catch_all {
        lines.push(ResultLine::CatchAllWarning);
    }

    ResultsView::new(Phase::Rendered, lines)
}

/// A failed exchange shows a single error line.
pub fn render_error(error: &ClientError) -> ResultsView {
    ResultsView::new(Phase::Errored, vec![ResultLine::Error(error.to_string())])
}
