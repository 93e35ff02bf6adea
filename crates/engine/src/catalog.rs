//! Catalog-level demand statistics.
//!
//! Student-independent aggregations over the offer catalog, feeding the
//! platform's dashboards: which domains are hiring, which skills the
//! market asks for, and how much of the catalog is live.

use crate::profile::SkillDemand;
use crate::similarity::normalize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stagematch_types::Offer;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Domains reported by [`domain_distribution`].
const MAX_DOMAINS: usize = 8;
/// Skills reported by [`skill_demand`].
const MAX_SKILLS: usize = 10;

/// Number of published offers in one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDemand {
    /// Domain name as the offers carry it.
    pub domain: String,
    /// Published offers in the domain.
    pub count: u32,
}

/// Headline counters for an offer catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// All offers, whatever their status.
    pub total: u32,
    /// Offers students can currently see.
    pub published: u32,
    /// Offers whose deadline has passed, whatever their status.
    pub expired: u32,
}

/// Published offers per domain, busiest domain first.
///
/// Ties are ordered alphabetically; at most eight domains are returned,
/// matching what the dashboard chart displays.
pub fn domain_distribution(offers: &[Offer]) -> Vec<DomainDemand> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for offer in offers.iter().filter(|offer| offer.status.is_visible()) {
        *counts.entry(offer.domain.as_str()).or_insert(0) += 1;
    }

    let mut distribution: Vec<DomainDemand> = counts
        .into_iter()
        .map(|(domain, count)| DomainDemand {
            domain: domain.to_string(),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
    distribution.truncate(MAX_DOMAINS);
    distribution
}

/// Skill demand across published offers, most requested first.
///
/// Requirement names are normalized and counted once per offer, however
/// many times an offer repeats them; mandatory and nice-to-have
/// requirements count alike. This is the student-independent counterpart
/// of the analyzer's missing-skill suggestions: same tally, no profile
/// subtracted. Ties are ordered alphabetically; at most ten skills are
/// returned.
pub fn skill_demand(offers: &[Offer]) -> Vec<SkillDemand> {
    let mut demand: HashMap<String, u32> = HashMap::new();
    for offer in offers.iter().filter(|offer| offer.status.is_visible()) {
        let names: HashSet<String> = offer
            .required_skills
            .iter()
            .map(|skill| normalize(&skill.name))
            .collect();
        for name in names {
            *demand.entry(name).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<SkillDemand> = demand
        .into_iter()
        .map(|(skill, demand_count)| SkillDemand {
            skill,
            demand_count,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.demand_count
            .cmp(&a.demand_count)
            .then_with(|| a.skill.cmp(&b.skill))
    });
    ranking.truncate(MAX_SKILLS);
    ranking
}

/// Count catalog totals as of `now`.
pub fn summarize_catalog(offers: &[Offer], now: DateTime<Utc>) -> CatalogSummary {
    let mut summary = CatalogSummary {
        total: offers.len() as u32,
        published: 0,
        expired: 0,
    };
    for offer in offers {
        if offer.status.is_visible() {
            summary.published += 1;
        }
        if offer.is_expired(now) {
            summary.expired += 1;
        }
    }

    debug!(
        target: "stagematch::catalog",
        total = summary.total,
        published = summary.published,
        expired = summary.expired,
        "summarized catalog"
    );

    summary
}
