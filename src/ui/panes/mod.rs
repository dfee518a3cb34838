//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`code`]: Algorithm source in the active language with the current line and
//!   variable readout
//! - [`input`]: The input strings with the one being processed marked
//! - [`groups`]: The grouping map snapshot, current key emphasized
//! - [`status`]: Narration line and status bar with keybindings and playback state
//!
//! Each pane is a stateless `render_*` function over a [`Step`](crate::snapshot::Step);
//! only scroll offsets are carried between frames.

pub mod code;
pub mod groups;
pub mod input;
pub mod status;

pub use code::{render_code_pane, CodeScrollState};
pub use groups::render_groups_pane;
pub use input::render_input_pane;
pub use status::{render_narration, render_status_bar, StatusRenderData};
