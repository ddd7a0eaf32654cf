//! View-model of the results area.
//!
//! The results area is a list of [`ResultLine`]s tagged with a [`Phase`].
//! Every function here is pure: the view is a function of the last
//! response (or error) only, so rendering twice gives the same lines.

mod render;
mod types;

pub use render::{render, render_error};
pub use types::{Phase, ResultLine, ResultsView};
