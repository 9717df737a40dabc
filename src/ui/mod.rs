//! User interface and presentation
//!
//! Presenters format board snapshots, scores and overlays. [`TerminalView`]
//! adapts them to engine callbacks.

pub mod presenters;
pub mod view;

pub use view::TerminalView;
