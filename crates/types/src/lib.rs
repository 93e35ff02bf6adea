//! Domain and wire types shared across the stagematch workspace.
//!
//! This crate defines the records the matching engine reads and the enums
//! they carry, together with their platform wire strings:
//! - Student profiles: skills, spoken languages, CV document, availability.
//! - Internship offers: required skills, targeting, lifecycle status.
//! - Study-level / proficiency / category enums with `FromStr`/`Display`
//!   round-tripping of the stored string values.
//!
//! The types are storage-agnostic: the embedding application owns loading
//! and persisting them; the engine crate only reads them. Absent JSON
//! collections deserialize to empty collections so downstream code never
//! distinguishes "missing" from "none".

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod offer;
mod student;

pub use error::ParseEnumError;
pub use offer::{
    Company, Compensation, Location, Offer, OfferDuration, OfferStatus, RequiredSkill,
};
pub use student::{
    Availability, CvDocument, LanguageLevel, Skill, SkillCategory, SkillLevel, SpokenLanguage,
    StudentProfile, StudyLevel,
};
