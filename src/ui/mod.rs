//! Pure rendering: application state in, a [`Frame`] of styled lines out.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → Frame
//! ```
//!
//! Nothing here touches the terminal. The runtime diffs frames and writes
//! them, and image previews are drawn over the preview pane separately.
//!
//! # Modules
//!
//! - [`viewmodel`]: what a frame shows, without styling
//! - [`renderer`]: layout selection and frame assembly
//! - [`components`]: header, list, preview, prompt and footer
//! - [`helpers`]: display width, clipping and match highlighting
//! - [`theme`]: palettes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, Frame};
pub use theme::Theme;
pub use viewmodel::{Body, DisplayItem, FooterInfo, HeaderInfo, ListInfo, UIViewModel};
