//! Host-facing data types for the surfacekit control-surface crates.
//!
//! - [`bank`]: paginated windows over host collections ([`bank::Bank`]) and
//!   the opaque [`bank::Item`] handle trait.
//! - [`values`]: the narrow value interface ([`values::Value`]), an
//!   in-memory [`values::Parameter`], and knob decoding
//!   ([`values::ValueChanger`]).
//! - [`model`]: the [`model::SurfaceModel`] the modes navigate.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and [`defmt::Format`] derives.

#![no_std]

extern crate alloc;

pub mod bank;
pub mod model;
pub mod values;
