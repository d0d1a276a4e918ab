//! Dashboard summary normalization
//!
//! The external summary endpoint is loosely typed and has shipped the same
//! counters under several field names over time. All of the guessing lives
//! here, in one function with a fixed first-match-wins fallback order, so
//! the precedence rules stay testable as a unit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub projects: u64,
    pub skills: u64,
    pub certificates: u64,
    pub experiences: u64,
    /// Site visit counter; the API may not report one at all
    pub visits: Option<u64>,
}

// Fallback orders, most recent API shape first.
const PROJECT_KEYS: &[&str] = &["totalProjects", "projects_count", "projectCount", "projects"];
const SKILL_KEYS: &[&str] = &["totalSkills", "skills_count", "skillCount", "skills"];
const CERTIFICATE_KEYS: &[&str] = &[
    "totalCertificates",
    "certificates_count",
    "certificateCount",
    "certificates",
];
const EXPERIENCE_KEYS: &[&str] = &[
    "totalExperiences",
    "experiences_count",
    "experienceCount",
    "experiences",
];
const VISIT_KEYS: &[&str] = &["totalVisits", "visits_count", "visitCount", "visits"];

/// Normalize a raw summary payload. Unknown or missing counters read as
/// zero; an absent visit counter stays `None`.
pub fn normalize(raw: &Value) -> Summary {
    Summary {
        projects: first_count(raw, PROJECT_KEYS).unwrap_or(0),
        skills: first_count(raw, SKILL_KEYS).unwrap_or(0),
        certificates: first_count(raw, CERTIFICATE_KEYS).unwrap_or(0),
        experiences: first_count(raw, EXPERIENCE_KEYS).unwrap_or(0),
        visits: first_count(raw, VISIT_KEYS),
    }
}

/// First key that yields a usable count wins. A count may arrive as a JSON
/// number, a numeric string, or an array whose length is the count.
fn first_count(raw: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| count_from(raw.get(*key)?))
}

fn count_from(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(items) => Some(items.len() as u64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_earliest_key() {
        let raw = json!({"totalProjects": 7, "projects": 99});
        assert_eq!(normalize(&raw).projects, 7);
    }

    #[test]
    fn test_falls_through_unusable_values() {
        // totalSkills exists but is unusable, so the next key wins
        let raw = json!({"totalSkills": null, "skills_count": "12"});
        assert_eq!(normalize(&raw).skills, 12);
    }

    #[test]
    fn test_array_length_counts() {
        let raw = json!({"certificates": [{}, {}, {}]});
        assert_eq!(normalize(&raw).certificates, 3);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let summary = normalize(&json!({}));
        assert_eq!(summary.projects, 0);
        assert_eq!(summary.visits, None);
    }

    #[test]
    fn test_visits_survive_when_present() {
        let raw = json!({"visits": 1042});
        assert_eq!(normalize(&raw).visits, Some(1042));
    }
}
