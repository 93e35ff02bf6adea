//! Offer-side records: internship offers, required skills, lifecycle status.

use crate::error::ParseEnumError;
use crate::student::{SkillLevel, StudyLevel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an offer. Stored lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    /// Being written by the company; not visible to students.
    #[default]
    Draft,
    /// Live and open to applications.
    Published,
    /// No longer accepting applications.
    Closed,
    /// Taken out of circulation but kept for record keeping.
    Archived,
}

impl OfferStatus {
    /// Wire string as stored by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }

    /// True when students can see and apply to the offer.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "closed" => Ok(Self::Closed),
            "archived" => Ok(Self::Archived),
            other => Err(ParseEnumError::OfferStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// One skill requirement on an offer.
///
/// The `required` flag splits requirements into the mandatory bucket
/// (drives the main score component) and the nice-to-have bucket (small
/// bonus, and gaps there are never reported back to the student).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    /// Skill name as entered by the company.
    pub name: String,
    /// Minimum proficiency the company expects.
    #[serde(default)]
    pub level: SkillLevel,
    /// Whether the skill is mandatory. Platform default is true.
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl RequiredSkill {
    /// Create a mandatory requirement with the default expected level.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::default(),
            required: true,
        }
    }

    /// Create a nice-to-have requirement with the default expected level.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: SkillLevel::default(),
            required: false,
        }
    }
}

/// The company publishing an offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Company display name.
    pub name: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// Business sector ("Technologie", "Finance", ...).
    pub sector: Option<String>,
}

/// Where the internship takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// City, when on-site work is involved.
    pub city: Option<String>,
    /// Country. Platform default is "Tunisie".
    pub country: String,
    /// Whether remote work is possible.
    pub remote: bool,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            city: None,
            country: "Tunisie".to_string(),
            remote: false,
        }
    }
}

/// Duration and calendar bounds of the internship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferDuration {
    /// Length in months (1 to 12 on the platform).
    pub months: Option<u32>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
}

/// Compensation terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compensation {
    /// Whether the internship is paid.
    pub paid: bool,
    /// Monthly amount, when paid.
    pub amount: Option<f64>,
    /// Currency code. Platform default is "TND".
    pub currency: String,
}

impl Default for Compensation {
    fn default() -> Self {
        Self {
            paid: false,
            amount: None,
            currency: "TND".to_string(),
        }
    }
}

/// An internship offer as the matching engine consumes it.
///
/// Identity fields (database ids, author references, persistence
/// timestamps) are deliberately absent: callers correlate results through
/// the offer value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    /// Offer title.
    pub title: String,
    /// Publishing company.
    pub company: Company,
    /// Long-form description.
    pub description: String,
    /// Mission statement for the intern.
    pub mission: Option<String>,
    /// Skill requirements, in the order the company listed them.
    pub required_skills: Vec<RequiredSkill>,
    /// Domain the offer belongs to ("Développement Web", ...).
    pub domain: String,
    /// Work location.
    pub location: Location,
    /// Duration and calendar bounds.
    pub duration: OfferDuration,
    /// Compensation terms.
    pub compensation: Compensation,
    /// Study levels the offer targets. Empty means no targeting, which
    /// also means no student earns the level-fit bonus.
    pub target_level: Vec<StudyLevel>,
    /// Lifecycle status.
    pub status: OfferStatus,
    /// Application cap. Platform default is 10.
    pub max_candidates: u32,
    /// Applications received so far.
    pub current_candidates: u32,
    /// Application deadline, when the company set one.
    pub deadline: Option<DateTime<Utc>>,
    /// View counter maintained by the application.
    pub views: u64,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Default for Offer {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: Company::default(),
            description: String::new(),
            mission: None,
            required_skills: Vec::new(),
            domain: String::new(),
            location: Location::default(),
            duration: OfferDuration::default(),
            compensation: Compensation::default(),
            target_level: Vec::new(),
            status: OfferStatus::default(),
            max_candidates: 10,
            current_candidates: 0,
            deadline: None,
            views: 0,
            tags: Vec::new(),
        }
    }
}

impl Offer {
    /// True when the deadline is set and strictly in the past.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| deadline < now)
    }

    /// True when the offer is published, not expired, and under its
    /// application cap.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status.is_visible()
            && !self.is_expired(now)
            && self.current_candidates < self.max_candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_wire_strings_round_trip() {
        for status in [
            OfferStatus::Draft,
            OfferStatus::Published,
            OfferStatus::Closed,
            OfferStatus::Archived,
        ] {
            let parsed: OfferStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status, "round trip failed for {status}");
        }
        assert!("expired".parse::<OfferStatus>().is_err());
    }

    #[test]
    fn test_only_published_is_visible() {
        assert!(OfferStatus::Published.is_visible());
        assert!(!OfferStatus::Draft.is_visible());
        assert!(!OfferStatus::Closed.is_visible());
        assert!(!OfferStatus::Archived.is_visible());
    }

    #[test]
    fn test_required_skill_defaults_to_mandatory() {
        let skill: RequiredSkill = serde_json::from_str(r#"{"name":"React"}"#).unwrap();
        assert!(skill.required, "required flag must default to true");
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_offer_platform_defaults() {
        let offer: Offer = serde_json::from_str("{}").unwrap();
        assert_eq!(offer.status, OfferStatus::Draft);
        assert_eq!(offer.max_candidates, 10);
        assert_eq!(offer.current_candidates, 0);
        assert_eq!(offer.location.country, "Tunisie");
        assert_eq!(offer.compensation.currency, "TND");
        assert!(offer.required_skills.is_empty());
    }

    #[test]
    fn test_expiry_requires_a_past_deadline() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let mut offer = Offer::default();
        assert!(!offer.is_expired(now), "no deadline means never expired");

        offer.deadline = Some(now);
        assert!(!offer.is_expired(now), "expiry is strictly past");

        offer.deadline = Some(now - chrono::Duration::seconds(1));
        assert!(offer.is_expired(now));
    }

    #[test]
    fn test_open_offers_are_published_unexpired_and_under_cap() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let mut offer = Offer {
            status: OfferStatus::Published,
            ..Offer::default()
        };
        assert!(offer.is_open(now));

        offer.current_candidates = offer.max_candidates;
        assert!(!offer.is_open(now), "full offers are closed to applications");

        offer.current_candidates = 0;
        offer.status = OfferStatus::Closed;
        assert!(!offer.is_open(now));
    }

    #[test]
    fn test_offer_serializes_camel_case() {
        let offer = Offer {
            title: "Stage développement web".to_string(),
            target_level: vec![StudyLevel::L3, StudyLevel::M1],
            required_skills: vec![RequiredSkill::new("Angular")],
            ..Offer::default()
        };
        let value = serde_json::to_value(&offer).unwrap();
        assert!(value.get("requiredSkills").is_some());
        assert!(value.get("targetLevel").is_some());
        assert!(value.get("maxCandidates").is_some());
        assert_eq!(value["targetLevel"][0], "L3");
    }
}
