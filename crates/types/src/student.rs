//! Student-side records: profile, skills, languages, CV, availability.

use crate::error::ParseEnumError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic level of a student, using the platform's study-track labels.
///
/// Stored as the display string (`"L1"` .. `"M2"`, `"Ingénieur 1"` ..
/// `"Ingénieur 3"`); offers target a set of these levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyLevel {
    /// First year of a licence degree.
    L1,
    /// Second year of a licence degree.
    L2,
    /// Third year of a licence degree.
    L3,
    /// First year of a master's degree.
    M1,
    /// Second year of a master's degree.
    M2,
    /// First year of an engineering cycle.
    #[serde(rename = "Ingénieur 1")]
    Engineering1,
    /// Second year of an engineering cycle.
    #[serde(rename = "Ingénieur 2")]
    Engineering2,
    /// Third year of an engineering cycle.
    #[serde(rename = "Ingénieur 3")]
    Engineering3,
}

impl StudyLevel {
    /// Wire string as stored by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::Engineering1 => "Ingénieur 1",
            Self::Engineering2 => "Ingénieur 2",
            Self::Engineering3 => "Ingénieur 3",
        }
    }
}

impl fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            "L3" => Ok(Self::L3),
            "M1" => Ok(Self::M1),
            "M2" => Ok(Self::M2),
            "Ingénieur 1" => Ok(Self::Engineering1),
            "Ingénieur 2" => Ok(Self::Engineering2),
            "Ingénieur 3" => Ok(Self::Engineering3),
            other => Err(ParseEnumError::StudyLevel {
                value: other.to_string(),
            }),
        }
    }
}

/// Proficiency attached to a held or required skill.
///
/// Ordered from least to most proficient, so `Beginner < Expert` holds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillLevel {
    /// Just getting started.
    #[serde(rename = "débutant")]
    Beginner,
    /// Comfortable with day-to-day use. Platform default for new skills.
    #[default]
    #[serde(rename = "intermédiaire")]
    Intermediate,
    /// Autonomous, can mentor others.
    #[serde(rename = "avancé")]
    Advanced,
    /// Deep expertise.
    #[serde(rename = "expert")]
    Expert,
}

impl SkillLevel {
    /// Wire string as stored by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "débutant",
            Self::Intermediate => "intermédiaire",
            Self::Advanced => "avancé",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "débutant" => Ok(Self::Beginner),
            "intermédiaire" => Ok(Self::Intermediate),
            "avancé" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            other => Err(ParseEnumError::SkillLevel {
                value: other.to_string(),
            }),
        }
    }
}

/// Coarse grouping of a skill, used by profile filters and display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Programming, tooling, frameworks. Platform default.
    #[default]
    #[serde(rename = "technique")]
    Technical,
    /// Spoken or written language listed as a skill.
    #[serde(rename = "langue")]
    Language,
    /// Communication, teamwork, and similar.
    #[serde(rename = "soft-skill")]
    SoftSkill,
    /// Anything else.
    #[serde(rename = "autre")]
    Other,
}

impl SkillCategory {
    /// Wire string as stored by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technique",
            Self::Language => "langue",
            Self::SoftSkill => "soft-skill",
            Self::Other => "autre",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "technique" => Ok(Self::Technical),
            "langue" => Ok(Self::Language),
            "soft-skill" => Ok(Self::SoftSkill),
            "autre" => Ok(Self::Other),
            other => Err(ParseEnumError::SkillCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// CEFR proficiency for a spoken language, plus native.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LanguageLevel {
    /// CEFR A1.
    A1,
    /// CEFR A2.
    A2,
    /// CEFR B1.
    B1,
    /// CEFR B2.
    B2,
    /// CEFR C1.
    C1,
    /// CEFR C2.
    C2,
    /// Native speaker.
    #[serde(rename = "natif")]
    Native,
}

impl LanguageLevel {
    /// Wire string as stored by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::Native => "natif",
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            "natif" => Ok(Self::Native),
            other => Err(ParseEnumError::LanguageLevel {
                value: other.to_string(),
            }),
        }
    }
}

/// A named competency held by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name as entered by the student ("React", "Node.js", ...).
    /// The engine normalizes it at match time; it is stored verbatim.
    pub name: String,
    /// Self-assessed proficiency.
    #[serde(default)]
    pub level: SkillLevel,
    /// Coarse grouping.
    #[serde(default)]
    pub category: SkillCategory,
}

impl Skill {
    /// Create a skill with the default proficiency and category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::default(),
            category: SkillCategory::default(),
        }
    }

    /// Create a skill with an explicit proficiency.
    pub fn with_level(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
            category: SkillCategory::default(),
        }
    }
}

/// A spoken language on a student profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    /// Language name ("Français", "English", ...).
    pub name: String,
    /// CEFR level, when the student declared one.
    #[serde(default)]
    pub level: Option<LanguageLevel>,
}

/// Metadata for an uploaded CV file. The file itself lives in storage
/// owned by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvDocument {
    /// Stored filename, set once an upload succeeded.
    pub filename: Option<String>,
    /// Name of the file as the student uploaded it.
    pub original_name: Option<String>,
    /// Upload timestamp.
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Public URL, when the storage backend exposes one.
    pub url: Option<String>,
}

impl CvDocument {
    /// True when at least one field is populated.
    ///
    /// An all-empty document is what a never-touched CV record looks like
    /// after deserialization; completeness scoring treats it as absent.
    pub fn has_content(&self) -> bool {
        self.filename.is_some()
            || self.original_name.is_some()
            || self.uploaded_at.is_some()
            || self.url.is_some()
    }
}

/// When a student is available for an internship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Availability {
    /// Earliest start date.
    pub start_date: Option<NaiveDate>,
    /// Latest end date.
    pub end_date: Option<NaiveDate>,
    /// Full-time availability. Platform default is true.
    pub full_time: bool,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            full_time: true,
        }
    }
}

/// A student's profile as the matching engine consumes it.
///
/// Owned and mutated by the embedding application; the engine only reads
/// it. Optional fields stay optional instead of defaulting to sentinel
/// values, and absent collections deserialize to empty ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    /// University the student is enrolled at.
    pub university: Option<String>,
    /// Department or faculty within the university.
    pub department: Option<String>,
    /// Current study level; feeds the level-fit bonus when offers target it.
    pub level: Option<StudyLevel>,
    /// Declared skills, in the order the student listed them.
    pub skills: Vec<Skill>,
    /// Spoken languages.
    pub languages: Vec<SpokenLanguage>,
    /// Uploaded CV metadata.
    pub cv: Option<CvDocument>,
    /// Free-form personal summary.
    pub bio: Option<String>,
    /// LinkedIn profile URL.
    pub linked_in: Option<String>,
    /// GitHub profile URL.
    pub github: Option<String>,
    /// Personal portfolio URL.
    pub portfolio: Option<String>,
    /// Availability window.
    pub availability: Option<Availability>,
    /// Domains the student wants to work in ("Développement Web", ...).
    pub desired_domain: Vec<String>,
    /// Grade point average on the 0-20 scale.
    pub gpa: Option<f64>,
}
