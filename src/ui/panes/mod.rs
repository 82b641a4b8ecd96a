//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`source`]: Source listing with syntax highlighting and the synchronized line
//! - [`array`]: Input values with cursor and marked cells
//! - [`state`]: Variables, working structure snapshot and result
//! - [`description`]: Sentence describing the current step
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared styling and formatting helpers
//!
//! # Architecture
//!
//! Each pane module exports a `render_*` function taking the frame, its area
//! and the data it shows. Panes never touch the engine; they only read the
//! current [`Step`](crate::trace::Step) and listing handed to them.

mod utils;

pub mod array;
pub mod description;
pub mod source;
pub mod state;
pub mod status;

// Re-export render functions for convenience
pub use array::{render_array_pane, ArrayRenderData};
pub use description::render_description_pane;
pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use state::render_state_pane;
pub use status::{render_status_bar, StatusRenderData};
