//! Error types for board construction and placement.

/// The result type for fallible board and placement operations.
pub type PlaceResult<T> = Result<T, PlaceError>;

/// Errors raised while building a board or running placement.
///
/// Every variant is a precondition violation attributable to the input or the
/// caller; placement itself never fails once a well-formed board is handed in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceError {
    /// Placement was requested on a board without gates.
    #[error("board has no gates")]
    EmptyBoard,

    /// Two gates share a name.
    #[error("duplicate gate '{0}'")]
    DuplicateGate(String),

    /// A gate declares the same pin twice.
    #[error("duplicate pin '{pin}' on gate '{gate}'")]
    DuplicatePin {
        /// Gate name.
        gate: String,
        /// Pin name.
        pin: String,
    },

    /// A wire references a gate that does not exist.
    #[error("unknown gate '{0}'")]
    UnknownGate(String),

    /// A wire references a pin that the gate does not declare.
    #[error("gate '{gate}' has no pin '{pin}'")]
    UnknownPin {
        /// Gate name.
        gate: String,
        /// Pin name.
        pin: String,
    },

    /// A gate was declared with a zero or negative size.
    #[error("gate '{gate}' has invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Gate name.
        gate: String,
        /// Declared width.
        width: i64,
        /// Declared height.
        height: i64,
    },

    /// The cooling multiplier is outside the open interval (0, 1).
    #[error("cooling rate {0} must lie strictly between 0 and 1")]
    InvalidCoolingRate(f64),

    /// A placer configuration value is out of range.
    #[error("invalid placer configuration: {0}")]
    InvalidConfig(String),

    /// The restart schedule produced no attempts.
    #[error("restart schedule has no tiers")]
    EmptySchedule,
}
