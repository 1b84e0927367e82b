pub mod commands;
pub mod filter;
pub mod page;
pub mod presenter;

pub use commands::{
    CommandOutcome, DisplaySurface, FormControls, InputControls, Presenter, ResultsPane,
};
pub use filter::{filter, matches, pick_random, pick_random_with};
pub use presenter::{escape_html, render_card, render_results, EMPTY_STATE_MESSAGE};
