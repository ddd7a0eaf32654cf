//! Submit cycle of the form: `Idle -> Pending -> (Rendered | Errored)`.
//!
//! The results area is published on a [`tokio::sync::watch`] channel. Each
//! submission takes a new generation number; a response is only committed
//! if no newer submission started in the meantime, so overlapping requests
//! cannot overwrite the latest result.

mod types;

pub use types::{ResultsPanel, SubmitOutcome};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::{Transport, ValidationClient};
use crate::form::FormState;
use crate::view::{ResultsView, render, render_error};

pub struct FormController<T> {
    client: ValidationClient<T>,
    panel: watch::Sender<ResultsPanel>,
}

impl<T: Transport> FormController<T> {
    pub fn new(client: ValidationClient<T>) -> Self {
        let (panel, _) = watch::channel(ResultsPanel::default());
        Self { client, panel }
    }

    pub fn client(&self) -> &ValidationClient<T> {
        &self.client
    }

    /// Receiver for every update of the results area.
    pub fn subscribe(&self) -> watch::Receiver<ResultsPanel> {
        self.panel.subscribe()
    }

    pub fn current_view(&self) -> ResultsView {
        self.panel.borrow().view.clone()
    }

    /// Run one submission.
    ///
    /// The pending view is published before the request is sent. Failures
    /// are rendered as an error line and returned in the outcome, never
    /// propagated.
    pub async fn submit(&self, form: &FormState) -> SubmitOutcome {
        let generation = self.begin();
        let request = form.to_request();
        debug!(generation, "submission started");

        match self.client.validate(&request).await {
            Ok(response) => {
                if self.commit(generation, render(&response)) {
                    info!(
                        generation,
                        confirmed = response.confirmed.len(),
                        total_tested = response.total_tested,
                        "results rendered"
                    );
                    SubmitOutcome::Rendered(response)
                } else {
                    SubmitOutcome::Superseded
                }
            }
            Err(err) => {
                if self.commit(generation, render_error(&err)) {
                    warn!(generation, error = %err, "validation request failed");
                    SubmitOutcome::Errored(err)
                } else {
                    SubmitOutcome::Superseded
                }
            }
        }
    }

    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.panel.send_modify(|panel| {
            panel.generation += 1;
            panel.view = ResultsView::pending();
            generation = panel.generation;
        });
        generation
    }

    fn commit(&self, generation: u64, view: ResultsView) -> bool {
        let committed = self.panel.send_if_modified(|panel| {
            if panel.generation != generation {
                return false;
            }
            panel.view = view;
            true
        });
        if !committed {
            debug!(generation, "stale response discarded");
        }
        committed
    }
}
