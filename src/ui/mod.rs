//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, view switching and
//!   the wall clock that drives playback
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   graph, towers, live structure, info, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a
//! [`Config`](crate::config::Config) and call [`App::run`] to start the event
//! loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
