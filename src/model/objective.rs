//! Job plan objectives.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A personal or service objective attached to a job plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Target or measure of success (e.g. "95% satisfaction rate")
    #[serde(default)]
    pub target: String,
}

impl Objective {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            target: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_objective_gets_unique_id() {
        let a = Objective::new("Improve clinic throughput");
        let b = Objective::new("Improve clinic throughput");
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "Improve clinic throughput");
    }

    #[test]
    fn test_objective_serializes_camel_case() {
        let obj = Objective::new("Audit");
        let json = serde_json::to_value(&obj).unwrap();
        assert!(json.get("title").is_some());
        assert!(json.get("target").is_some());
    }
}
