//! Ranked recommendation retrieval across an offer catalog.

use crate::scorer::compute_compatibility;
use serde::{Deserialize, Serialize};
use stagematch_types::{Offer, StudentProfile};
use tracing::debug;

/// Score an offer must reach to be recommended, unless overridden.
pub const DEFAULT_MIN_SCORE: u8 = 30;

/// Recommendations returned per call, after filtering and sorting.
pub const MAX_RECOMMENDATIONS: usize = 20;

/// One ranked offer for a student.
///
/// Serializes with the platform's response field names
/// (`compatibilityScore`, `matchedSkills`, `missingSkills`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The offer itself, embedded so callers need no second lookup.
    pub offer: Offer,
    /// Compatibility score, 0 to 100.
    #[serde(rename = "compatibilityScore")]
    pub score: u8,
    /// Requirement names the student satisfies.
    #[serde(rename = "matchedSkills")]
    pub matched: Vec<String>,
    /// Mandatory requirement names the student lacks.
    #[serde(rename = "missingSkills")]
    pub missing: Vec<String>,
}

/// Rank `offers` for `student` with the default minimum score.
///
/// Shorthand for [`recommend_with_min_score`] at [`DEFAULT_MIN_SCORE`].
pub fn recommend(student: &StudentProfile, offers: &[Offer]) -> Vec<Recommendation> {
    recommend_with_min_score(student, offers, DEFAULT_MIN_SCORE)
}

/// Rank `offers` for `student`, keeping scores of at least `min_score`.
///
/// Every supplied offer is scored: callers pass the offers the student is
/// allowed to see (typically the published ones), and no status filtering
/// happens here. Results are sorted by descending score - ties keep the
/// input order - and truncated to [`MAX_RECOMMENDATIONS`].
pub fn recommend_with_min_score(
    student: &StudentProfile,
    offers: &[Offer],
    min_score: u8,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = offers
        .iter()
        .filter_map(|offer| {
            let result = compute_compatibility(student, offer);
            if result.score >= min_score {
                Some(Recommendation {
                    offer: offer.clone(),
                    score: result.score,
                    matched: result.matched,
                    missing: result.missing,
                })
            } else {
                None
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    debug!(
        target: "stagematch::recommend",
        offers = offers.len(),
        kept = recommendations.len(),
        min_score,
        "ranked offers for student"
    );

    recommendations
}

/// Minimum score from the `STAGEMATCH_MIN_SCORE` environment variable,
/// falling back to [`DEFAULT_MIN_SCORE`] when unset or unparseable.
///
/// Meant for the embedding application to resolve once per request
/// context; the ranking functions themselves never read the environment.
pub fn min_score_from_env() -> u8 {
    std::env::var("STAGEMATCH_MIN_SCORE")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_MIN_SCORE)
}
