//! Shared test fixtures for stagematch crates.
//!
//! Realistic students and offer catalogs for exercising the matching
//! engine, plus guards for tests that touch process-global state.

use chrono::{TimeZone, Utc};
use stagematch_types::{
    Availability, CvDocument, Offer, OfferStatus, RequiredSkill, Skill, SpokenLanguage,
    StudentProfile, StudyLevel,
};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = stagematch_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A student holding exactly the given skill names, everything else empty.
pub fn student_with_skills(names: &[&str]) -> StudentProfile {
    StudentProfile {
        skills: names.iter().copied().map(Skill::new).collect(),
        ..StudentProfile::default()
    }
}

/// A fully filled-in profile: every completeness rubric field populated.
pub fn complete_student() -> StudentProfile {
    StudentProfile {
        university: Some("ENSI".to_string()),
        department: Some("Génie Logiciel".to_string()),
        level: Some(StudyLevel::Engineering2),
        skills: vec![
            Skill::new("JavaScript"),
            Skill::new("TypeScript"),
            Skill::new("React"),
            Skill::new("Node.js"),
            Skill::new("MongoDB"),
            Skill::new("Git"),
        ],
        languages: vec![
            SpokenLanguage {
                name: "Arabe".to_string(),
                level: None,
            },
            SpokenLanguage {
                name: "Français".to_string(),
                level: None,
            },
        ],
        cv: Some(CvDocument {
            filename: Some("cv_3f61b2.pdf".to_string()),
            original_name: Some("cv-amira-ben-salah.pdf".to_string()),
            uploaded_at: Some(Utc.with_ymd_and_hms(2025, 2, 14, 9, 30, 0).unwrap()),
            url: None,
        }),
        bio: Some("Étudiante en génie logiciel, passionnée par le web.".to_string()),
        linked_in: Some("https://linkedin.com/in/amira-ben-salah".to_string()),
        github: Some("https://github.com/amirabs".to_string()),
        portfolio: None,
        availability: Some(Availability::default()),
        desired_domain: vec!["Développement Web".to_string()],
        gpa: Some(14.5),
    }
}

/// A published offer in `domain` with the given skill requirements.
pub fn published_offer(
    title: &str,
    domain: &str,
    required: &[&str],
    optional: &[&str],
) -> Offer {
    let mut skills: Vec<RequiredSkill> =
        required.iter().copied().map(RequiredSkill::new).collect();
    skills.extend(optional.iter().copied().map(RequiredSkill::optional));
    Offer {
        title: title.to_string(),
        description: format!("Stage {domain}."),
        required_skills: skills,
        domain: domain.to_string(),
        status: OfferStatus::Published,
        ..Offer::default()
    }
}

/// A small but varied catalog: live offers across several domains, one
/// draft, and one published offer whose deadline passed in January 2025.
pub fn sample_catalog() -> Vec<Offer> {
    let mut frontend = published_offer(
        "Stage développement frontend",
        "Développement Web",
        &["JavaScript", "React"],
        &["TypeScript"],
    );
    frontend.target_level = vec![StudyLevel::L3, StudyLevel::Engineering2];

    let backend = published_offer(
        "Stage développement backend",
        "Développement Web",
        &["Node.js", "MongoDB"],
        &["Docker"],
    );

    let data = published_offer(
        "Stage data science",
        "Data Science",
        &["Python", "SQL"],
        &["TensorFlow"],
    );

    let devops = published_offer(
        "Stage DevOps",
        "DevOps",
        &["Docker", "Kubernetes", "CI/CD"],
        &[],
    );

    let mobile = published_offer(
        "Stage développement mobile",
        "Développement Mobile",
        &["Flutter"],
        &["Firebase"],
    );

    let mut draft = published_offer(
        "Stage cybersécurité",
        "Cybersécurité",
        &["Linux", "Python"],
        &[],
    );
    draft.status = OfferStatus::Draft;

    let mut expired = published_offer(
        "Stage cloud",
        "Cloud Computing",
        &["AWS"],
        &["Terraform"],
    );
    expired.deadline = Some(Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap());

    vec![frontend, backend, data, devops, mobile, draft, expired]
}
