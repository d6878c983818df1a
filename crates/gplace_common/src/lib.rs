//! Shared foundational types used across the gplace toolchain.
//!
//! This crate provides the opaque arena IDs for gates and wires, and the
//! integer grid geometry (points and half-open rectangles) that every
//! placement stage works in.

#![warn(missing_docs)]

pub mod geom;
pub mod ids;

pub use geom::{Point, Rect};
pub use ids::{GateId, WireId};
