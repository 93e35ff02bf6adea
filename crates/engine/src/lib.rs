//! Deterministic matching engine for the stagematch internship platform.
//!
//! Scores student profiles against internship offers and explains the
//! result: which required skills matched, which are missing, and what a
//! student should work on next. Four operations sit on one primitive:
//! - Bigram string similarity and tolerant skill-name matching.
//! - Compatibility scoring for one (student, offer) pair.
//! - Ranked recommendations across an offer catalog.
//! - Profile analysis: skill-gap demand, completeness, CV tips.
//!
//! Catalog-level demand statistics for the platform dashboards round out
//! the crate. Everything is pure and synchronous: no I/O, no shared
//! state, nothing to configure. Callers load the records, the engine
//! computes, callers serialize.
//!
//! # Examples
//!
//! ```
//! use stagematch_engine::recommend;
//! use stagematch_types::{Offer, OfferStatus, RequiredSkill, Skill, StudentProfile};
//!
//! let student = StudentProfile {
//!     skills: vec![Skill::new("JavaScript"), Skill::new("React")],
//!     ..StudentProfile::default()
//! };
//! let offer = Offer {
//!     title: "Stage frontend".to_string(),
//!     required_skills: vec![RequiredSkill::new("react")],
//!     status: OfferStatus::Published,
//!     ..Offer::default()
//! };
//!
//! let ranked = recommend(&student, &[offer]);
//! assert_eq!(ranked[0].score, 90);
//! assert_eq!(ranked[0].matched, vec!["react"]);
//! ```

mod catalog;
mod profile;
mod recommend;
mod scorer;
mod similarity;

pub use catalog::{
    domain_distribution, skill_demand, summarize_catalog, CatalogSummary, DomainDemand,
};
pub use profile::{
    analyze_profile, cv_tips, profile_completeness, CvTip, ProfileAnalysis, SkillDemand,
    TipSeverity,
};
pub use recommend::{
    min_score_from_env, recommend, recommend_with_min_score, Recommendation, DEFAULT_MIN_SCORE,
    MAX_RECOMMENDATIONS,
};
pub use scorer::{compute_compatibility, MatchResult};
pub use similarity::{fuzzy_match, normalize, similarity, SIMILARITY_THRESHOLD};
