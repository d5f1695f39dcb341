//! Error types for lookout.
//!
//! Editor errors never leave the controller half-updated: an operation that
//! returns one of them has not touched any state.

use thiserror::Error;

use crate::zone::ZoneType;

/// The main error type for lookout operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Editor Errors ===
    /// A radius outside the configured bounds was rejected.
    #[error("radius {value}m is outside the allowed range {min}-{max}m")]
    OutOfRangeRadius {
        /// The rejected value.
        value: i64,
        /// Lower bound (inclusive).
        min: u32,
        /// Upper bound (inclusive).
        max: u32,
    },

    /// The draft has no name.
    #[error("zone name must not be empty")]
    EmptyName,

    /// A draft operation was issued while the editor is idle.
    #[error("no zone is being added or edited")]
    NoActiveDraft,

    /// An add was requested while another add is still open.
    #[error("a new {0} zone is already being added")]
    DraftInProgress(ZoneType),

    /// The referenced zone does not exist.
    #[error("no {zone_type} zone with id '{id}'")]
    ZoneNotFound {
        /// Which list was searched.
        zone_type: ZoneType,
        /// The id that was not found.
        id: String,
    },

    /// The type tag of an existing zone cannot change.
    #[error("the type of an existing zone cannot be changed")]
    ImmutableKind,

    /// A field that only applies to the other zone type was set.
    #[error("field does not apply to a {zone_type} zone")]
    KindMismatch {
        /// Type of the draft that received the field.
        zone_type: ZoneType,
    },

    /// A schedule time is not a valid `HH:MM` value.
    #[error("invalid schedule time '{value}', expected HH:MM")]
    InvalidTime {
        /// The text that failed to parse.
        value: String,
    },

    /// A schedule was partially filled in.
    #[error("schedule needs at least one day plus a start and end time")]
    IncompleteSchedule,

    /// Confirm or dismiss was called with no deletion pending.
    #[error("no deletion is awaiting confirmation")]
    NoPendingDelete,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lookout operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a zone-not-found error.
    #[must_use]
    pub fn zone_not_found(zone_type: ZoneType, id: impl Into<String>) -> Self {
        Self::ZoneNotFound {
            zone_type,
            id: id.into(),
        }
    }

    /// Create an invalid-time error.
    #[must_use]
    pub fn invalid_time(value: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.into(),
        }
    }

    /// Check if this error is a form validation block.
    ///
    /// These are shown next to the form field, or simply ignored, by the
    /// rendering layer. They never indicate a fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::OutOfRangeRadius { .. }
                | Self::EmptyName
                | Self::InvalidTime { .. }
                | Self::IncompleteSchedule
                | Self::ImmutableKind
                | Self::KindMismatch { .. }
        )
    }

    /// Check if this error came from a call the UI should have guarded.
    ///
    /// Idle-mode draft edits and double adds are silent no-ops for the user.
    #[must_use]
    pub fn is_guarded_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoActiveDraft | Self::DraftInProgress(_) | Self::NoPendingDelete
        )
    }
}
