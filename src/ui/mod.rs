//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, input editor, persisted
//!   preference changes
//! - **[`panes`]**: stateless render functions for each visible pane (code, input,
//!   map, narration, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Player`] and a
//! settings store, then call [`App::run`] to start the event loop.
//!
//! [`Player`]: crate::playback::Player
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
