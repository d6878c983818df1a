//! Board-local handles for gates and wires.
//!
//! A board stores gates and wires in insertion order, and an ID is simply a
//! position in that order. IDs are only meaningful for the board that issued
//! them; names are the stable identity across files.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw value, as stored in serialized boards.
            pub fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Builds the handle for the `index`-th entry of a board vector.
            ///
            /// Boards never hold more than `u32::MAX` entries, so the value is
            /// truncated rather than checked.
            pub fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            /// The raw value.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Position in the board vector this handle points into.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Position of a gate in `Board::gates`.
    GateId
);

define_id!(
    /// Position of a wire in `Board::wires`.
    WireId
);
