//! Netlist input and layout output for the gplace toolchain.
//!
//! Reads the line-oriented netlist format into a [`gplace_place::Board`],
//! writes placement results as text or JSON [`Layout`] reports, reads those
//! reports back, and verifies a report against its netlist.

#![warn(missing_docs)]

pub mod error;
pub mod layout;
pub mod parse;
pub mod verify;

pub use error::NetlistError;
pub use layout::{parse_layout, read_layout, write_layout, GatePosition, Layout};
pub use parse::{parse_netlist, read_netlist};
pub use verify::{apply_layout, verify_layout};
