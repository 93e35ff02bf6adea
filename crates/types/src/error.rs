//! Parse failures for stored enum strings.

use thiserror::Error;

/// Error returned when a stored string does not map to a known enum value.
///
/// The platform persists enums as their display strings; parsing them back
/// is the one fallible operation in this crate. Each variant keeps the
/// rejected input so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseEnumError {
    /// Input did not name a study level.
    #[error("unknown study level: {value:?}")]
    StudyLevel {
        /// The rejected input.
        value: String,
    },

    /// Input did not name a skill proficiency level.
    #[error("unknown skill level: {value:?}")]
    SkillLevel {
        /// The rejected input.
        value: String,
    },

    /// Input did not name a skill category.
    #[error("unknown skill category: {value:?}")]
    SkillCategory {
        /// The rejected input.
        value: String,
    },

    /// Input did not name a language proficiency level.
    #[error("unknown language level: {value:?}")]
    LanguageLevel {
        /// The rejected input.
        value: String,
    },

    /// Input did not name an offer status.
    #[error("unknown offer status: {value:?}")]
    OfferStatus {
        /// The rejected input.
        value: String,
    },
}
