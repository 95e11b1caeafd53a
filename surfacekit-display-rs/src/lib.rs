//! Virtual display compositor for control-surface modes.
//!
//! Modes describe one display frame as a [`GridModel`]: an ordered row of
//! [`GridElement`] snapshots, one per display column. The [`Renderer`] walks
//! the grid and draws every element into a [`Bitmap`] with
//! `embedded-graphics` primitives; a [`Compositor`] hands finished frames to
//! whatever [`DisplayOutput`] carries them to the hardware.
//!
//! ```text
//! Mode ──update_display──▶ GridModel ──notify──▶ Compositor
//!                                                 │ Renderer::render
//!                                                 ▼
//!                                              Bitmap ──▶ DisplayOutput
//! ```
//!
//! # Quick Start
//!
//! ```
//! use surfacekit_display::{DisplayConfig, GridElement, GridModel, Renderer};
//! use surfacekit_display::grid::{label, OptionsElement};
//!
//! let config = DisplayConfig::default();
//! let mut grid = GridModel::new(config.columns);
//! grid.set_element(0, GridElement::Options(OptionsElement {
//!     header: label("Volume"),
//!     ..OptionsElement::default()
//! }));
//!
//! let mut renderer = Renderer::new(config).unwrap();
//! let bitmap = renderer.render(grid.elements());
//! assert_eq!(bitmap.width(), 960);
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: [`display_update_task`], a periodic async refresh loop
//!   built on Embassy.

#![no_std]

extern crate alloc;

pub mod bitmap;
#[cfg(feature = "task")]
pub mod display_task;
pub mod error;
pub mod grid;
pub mod layout;
pub mod model;
pub mod renderer;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bitmap::Bitmap;
#[cfg(feature = "task")]
pub use display_task::{display_update_task, FrameSink, GridSource};
pub use error::DisplayError;
pub use grid::GridElement;
pub use layout::{DisplayConfig, Layout, RenderConfiguration};
pub use model::{GridChangeListener, GridModel};
pub use renderer::{Compositor, DisplayOutput, Renderer};
