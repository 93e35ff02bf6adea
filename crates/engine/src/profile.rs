//! Profile analysis: market demand for missing skills, completeness, CV tips.

use crate::scorer::compute_compatibility;
use serde::{Deserialize, Serialize};
use stagematch_types::{Offer, StudentProfile};
use std::collections::HashMap;
use tracing::debug;

/// Skill suggestions returned per analysis.
const MAX_SUGGESTIONS: usize = 10;

/// Completeness weight per profile field. The weights sum to exactly 100.
const BIO_WEIGHT: u8 = 10;
const SKILLS_WEIGHT: u8 = 25;
const CV_WEIGHT: u8 = 20;
const LANGUAGES_WEIGHT: u8 = 10;
const LINKEDIN_WEIGHT: u8 = 5;
const AVAILABILITY_WEIGHT: u8 = 10;
const DESIRED_DOMAIN_WEIGHT: u8 = 10;
const UNIVERSITY_WEIGHT: u8 = 5;
const LEVEL_WEIGHT: u8 = 5;

/// Demand for one skill, counted in offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDemand {
    /// Normalized skill name.
    pub skill: String,
    /// Number of offers asking for it.
    pub demand_count: u32,
}

/// Severity of a profile improvement tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipSeverity {
    /// Blocks applications outright; fix first.
    Error,
    /// Hurts the profile's chances.
    Warning,
    /// Worth doing when time allows.
    Info,
}

/// One improvement tip for a student's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvTip {
    /// How urgent the tip is. Serialized as `type`.
    #[serde(rename = "type")]
    pub severity: TipSeverity,
    /// Human-readable advice.
    pub message: String,
}

impl CvTip {
    fn new(severity: TipSeverity, message: &str) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }
}

/// Complete analysis of one student profile against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    /// Most demanded skills among published offers that the student lacks.
    pub suggestions: Vec<SkillDemand>,
    /// Completeness of the profile, 0 to 100.
    pub profile_completeness: u8,
    /// Ordered improvement tips.
    pub cv_tips: Vec<CvTip>,
}

/// Analyze a student profile against an offer catalog.
///
/// Unlike the ranker, this filters to published offers itself: the
/// analysis always describes the live market, whatever the caller hands
/// in. Each published offer is scored and its missing mandatory skills
/// are tallied; the most demanded gaps become suggestions, capped at ten.
/// Ties are broken alphabetically so the output is deterministic.
pub fn analyze_profile(student: &StudentProfile, offers: &[Offer]) -> ProfileAnalysis {
    let mut demand: HashMap<String, u32> = HashMap::new();

    let mut published = 0usize;
    for offer in offers.iter().filter(|offer| offer.status.is_visible()) {
        published += 1;
        let result = compute_compatibility(student, offer);
        for skill in result.missing {
            *demand.entry(skill).or_insert(0) += 1;
        }
    }

    let mut suggestions: Vec<SkillDemand> = demand
        .into_iter()
        .map(|(skill, demand_count)| SkillDemand {
            skill,
            demand_count,
        })
        .collect();
    suggestions.sort_by(|a, b| {
        b.demand_count
            .cmp(&a.demand_count)
            .then_with(|| a.skill.cmp(&b.skill))
    });
    suggestions.truncate(MAX_SUGGESTIONS);

    let analysis = ProfileAnalysis {
        suggestions,
        profile_completeness: profile_completeness(student),
        cv_tips: cv_tips(student),
    };

    debug!(
        target: "stagematch::profile",
        published,
        suggestions = analysis.suggestions.len(),
        completeness = analysis.profile_completeness,
        "analyzed student profile"
    );

    analysis
}

/// Weighted presence check over the profile's fields, 0 to 100.
///
/// Each field contributes its fixed weight when populated: a non-empty
/// string, a non-empty collection, an availability window, or a CV record
/// with at least one field set. Populating a field never lowers the
/// score.
pub fn profile_completeness(student: &StudentProfile) -> u8 {
    let mut score = 0u8;

    if has_text(&student.bio) {
        score += BIO_WEIGHT;
    }
    if !student.skills.is_empty() {
        score += SKILLS_WEIGHT;
    }
    if student.cv.as_ref().is_some_and(|cv| cv.has_content()) {
        score += CV_WEIGHT;
    }
    if !student.languages.is_empty() {
        score += LANGUAGES_WEIGHT;
    }
    if has_text(&student.linked_in) {
        score += LINKEDIN_WEIGHT;
    }
    if student.availability.is_some() {
        score += AVAILABILITY_WEIGHT;
    }
    if !student.desired_domain.is_empty() {
        score += DESIRED_DOMAIN_WEIGHT;
    }
    if has_text(&student.university) {
        score += UNIVERSITY_WEIGHT;
    }
    if student.level.is_some() {
        score += LEVEL_WEIGHT;
    }

    score
}

/// Fixed advice checklist for making a profile application-ready.
///
/// Rules run in a fixed order and several can fire at once. An empty
/// skill list triggers both the "none listed" and the "fewer than five"
/// tips; the platform has always reported that pair together.
pub fn cv_tips(student: &StudentProfile) -> Vec<CvTip> {
    let mut tips = Vec::new();

    let has_cv_file = student
        .cv
        .as_ref()
        .and_then(|cv| cv.filename.as_deref())
        .is_some_and(|filename| !filename.is_empty());
    if !has_cv_file {
        tips.push(CvTip::new(
            TipSeverity::Error,
            "CV not uploaded - top priority!",
        ));
    }

    if !has_text(&student.bio) {
        tips.push(CvTip::new(TipSeverity::Warning, "Add a personal summary."));
    }

    if student.skills.is_empty() {
        tips.push(CvTip::new(TipSeverity::Error, "No skills listed."));
    }

    if student.skills.len() < 5 {
        tips.push(CvTip::new(
            TipSeverity::Info,
            "Add more skills (5+ recommended).",
        ));
    }

    if student.languages.is_empty() {
        tips.push(CvTip::new(TipSeverity::Warning, "List your languages."));
    }

    if !has_text(&student.linked_in) {
        tips.push(CvTip::new(TipSeverity::Info, "Add your LinkedIn profile."));
    }

    tips
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagematch_types::{
        Availability, CvDocument, OfferStatus, RequiredSkill, Skill, SpokenLanguage, StudyLevel,
    };

    fn published(required: &[&str]) -> Offer {
        Offer {
            required_skills: required.iter().copied().map(RequiredSkill::new).collect(),
            status: OfferStatus::Published,
            ..Offer::default()
        }
    }

    fn uploaded_cv() -> CvDocument {
        CvDocument {
            filename: Some("cv_8f41.pdf".to_string()),
            original_name: Some("cv-amira.pdf".to_string()),
            ..CvDocument::default()
        }
    }

    // ----- Suggestions -----

    #[test]
    fn test_suggestions_count_demand_across_published_offers() {
        let student = StudentProfile {
            skills: vec![Skill::new("JavaScript")],
            ..StudentProfile::default()
        };
        let offers = vec![
            published(&["javascript", "docker"]),
            published(&["docker", "kubernetes"]),
            published(&["docker"]),
        ];

        let analysis = analyze_profile(&student, &offers);
        assert_eq!(
            analysis.suggestions[0],
            SkillDemand {
                skill: "docker".to_string(),
                demand_count: 3
            }
        );
        assert_eq!(
            analysis.suggestions[1],
            SkillDemand {
                skill: "kubernetes".to_string(),
                demand_count: 1
            }
        );
    }

    #[test]
    fn test_suggestions_ignore_unpublished_offers() {
        let student = StudentProfile::default();
        let mut draft = published(&["rust"]);
        draft.status = OfferStatus::Draft;
        let mut archived = published(&["rust"]);
        archived.status = OfferStatus::Archived;

        let analysis = analyze_profile(&student, &[draft, archived, published(&["go"])]);
        assert_eq!(analysis.suggestions.len(), 1);
        assert_eq!(analysis.suggestions[0].skill, "go");
    }

    #[test]
    fn test_suggestions_skip_optional_gaps() {
        let student = StudentProfile::default();
        let offer = Offer {
            required_skills: vec![
                RequiredSkill::new("python"),
                RequiredSkill::optional("airflow"),
            ],
            status: OfferStatus::Published,
            ..Offer::default()
        };

        let analysis = analyze_profile(&student, &[offer]);
        let skills: Vec<&str> = analysis
            .suggestions
            .iter()
            .map(|s| s.skill.as_str())
            .collect();
        assert_eq!(skills, vec!["python"], "optional gaps carry no demand");
    }

    #[test]
    fn test_suggestions_capped_at_ten_with_alphabetical_ties() {
        let student = StudentProfile::default();
        let names = [
            "ansible", "bash", "cassandra", "dart", "elixir", "fortran", "groovy", "haskell",
            "io", "julia", "kotlin", "lua",
        ];
        let offers: Vec<Offer> = names.iter().map(|name| published(&[name])).collect();

        let analysis = analyze_profile(&student, &offers);
        assert_eq!(analysis.suggestions.len(), MAX_SUGGESTIONS);
        // Every skill is missing exactly once; ties resolve alphabetically.
        assert_eq!(analysis.suggestions[0].skill, "ansible");
        assert_eq!(analysis.suggestions[9].skill, "julia");
    }

    #[test]
    fn test_empty_catalog_still_reports_on_the_profile() {
        let student = StudentProfile {
            bio: Some("Final-year CS student.".to_string()),
            skills: vec![Skill::new("Python")],
            ..StudentProfile::default()
        };

        let analysis = analyze_profile(&student, &[]);
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.profile_completeness, 35);
        assert!(!analysis.cv_tips.is_empty());
    }

    // ----- Completeness -----

    #[test]
    fn test_completeness_of_empty_profile_is_zero() {
        assert_eq!(profile_completeness(&StudentProfile::default()), 0);
    }

    #[test]
    fn test_completeness_bio_and_skills_only() {
        let student = StudentProfile {
            bio: Some("Je suis étudiante en informatique.".to_string()),
            skills: vec![Skill::new("Java")],
            ..StudentProfile::default()
        };
        assert_eq!(profile_completeness(&student), 35, "10 bio + 25 skills");
    }

    #[test]
    fn test_completeness_full_profile_is_100() {
        let student = StudentProfile {
            university: Some("ENSI".to_string()),
            level: Some(StudyLevel::Engineering2),
            skills: vec![Skill::new("Python")],
            languages: vec![SpokenLanguage {
                name: "Français".to_string(),
                level: None,
            }],
            cv: Some(uploaded_cv()),
            bio: Some("Étudiante en génie logiciel.".to_string()),
            linked_in: Some("https://linkedin.com/in/amira".to_string()),
            availability: Some(Availability::default()),
            desired_domain: vec!["Développement Web".to_string()],
            ..StudentProfile::default()
        };
        assert_eq!(profile_completeness(&student), 100);
    }

    #[test]
    fn test_completeness_ignores_empty_strings_and_blank_cv() {
        let student = StudentProfile {
            bio: Some(String::new()),
            university: Some(String::new()),
            cv: Some(CvDocument::default()),
            ..StudentProfile::default()
        };
        assert_eq!(
            profile_completeness(&student),
            0,
            "empty strings and an untouched CV record count as absent"
        );
    }

    #[test]
    fn test_completeness_never_decreases_as_fields_fill_in() {
        let mut student = StudentProfile::default();
        let mut previous = profile_completeness(&student);

        student.bio = Some("Étudiant en réseaux.".to_string());
        let after_bio = profile_completeness(&student);
        assert!(after_bio >= previous);
        previous = after_bio;

        student.skills.push(Skill::new("C"));
        let after_skills = profile_completeness(&student);
        assert!(after_skills >= previous);
        previous = after_skills;

        student.cv = Some(uploaded_cv());
        student.languages.push(SpokenLanguage {
            name: "Arabe".to_string(),
            level: None,
        });
        student.level = Some(StudyLevel::L3);
        let after_more = profile_completeness(&student);
        assert!(after_more >= previous);
    }

    // ----- CV tips -----

    #[test]
    fn test_empty_profile_fires_all_six_tips_in_order() {
        let tips = cv_tips(&StudentProfile::default());

        let severities: Vec<TipSeverity> = tips.iter().map(|tip| tip.severity).collect();
        assert_eq!(
            severities,
            vec![
                TipSeverity::Error,   // CV not uploaded
                TipSeverity::Warning, // no bio
                TipSeverity::Error,   // no skills
                TipSeverity::Info,    // fewer than five skills
                TipSeverity::Warning, // no languages
                TipSeverity::Info,    // no LinkedIn
            ]
        );
        assert_eq!(tips[0].message, "CV not uploaded - top priority!");
    }

    #[test]
    fn test_empty_skill_list_fires_both_skill_tips() {
        let tips = cv_tips(&StudentProfile::default());
        let messages: Vec<&str> = tips.iter().map(|tip| tip.message.as_str()).collect();
        assert!(messages.contains(&"No skills listed."));
        assert!(messages.contains(&"Add more skills (5+ recommended)."));
    }

    #[test]
    fn test_few_skills_only_fires_the_count_tip() {
        let student = StudentProfile {
            skills: vec![Skill::new("HTML"), Skill::new("CSS"), Skill::new("PHP")],
            ..StudentProfile::default()
        };

        let tips = cv_tips(&student);
        let messages: Vec<&str> = tips.iter().map(|tip| tip.message.as_str()).collect();
        assert!(!messages.contains(&"No skills listed."));
        assert!(messages.contains(&"Add more skills (5+ recommended)."));
    }

    #[test]
    fn test_cv_record_without_stored_file_still_asks_for_upload() {
        let student = StudentProfile {
            cv: Some(CvDocument {
                url: Some("https://cdn.example.com/pending".to_string()),
                ..CvDocument::default()
            }),
            ..StudentProfile::default()
        };

        let tips = cv_tips(&student);
        assert_eq!(tips[0].message, "CV not uploaded - top priority!");
    }

    #[test]
    fn test_complete_profile_gets_no_tips() {
        let student = StudentProfile {
            bio: Some("Développeuse full-stack en formation.".to_string()),
            linked_in: Some("https://linkedin.com/in/salma".to_string()),
            cv: Some(uploaded_cv()),
            skills: vec![
                Skill::new("JavaScript"),
                Skill::new("TypeScript"),
                Skill::new("React"),
                Skill::new("Node.js"),
                Skill::new("MongoDB"),
            ],
            languages: vec![SpokenLanguage {
                name: "Anglais".to_string(),
                level: None,
            }],
            ..StudentProfile::default()
        };

        assert!(cv_tips(&student).is_empty());
    }

    #[test]
    fn test_tip_serializes_severity_as_type() {
        let tip = CvTip::new(TipSeverity::Warning, "Add a personal summary.");
        let value = serde_json::to_value(&tip).unwrap();
        assert_eq!(value["type"], "warning");
        assert_eq!(value["message"], "Add a personal summary.");
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = analyze_profile(&StudentProfile::default(), &[]);
        let value = serde_json::to_value(&analysis).unwrap();
        assert!(value.get("profileCompleteness").is_some());
        assert!(value.get("cvTips").is_some());
        assert!(value.get("suggestions").is_some());
    }
}
