//! Resources required to deliver a job plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resource requirement (room, equipment, staff time) for a job plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,
    pub name: String,
    /// Free-text kind, e.g. "Physical space", "Equipment", "Staff"
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub description: String,
    /// Quantity or allocation, e.g. "1 room", "2 hours per week"
    #[serde(default)]
    pub quantity: String,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            resource_type: String::new(),
            description: String::new(),
            quantity: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource_gets_unique_id() {
        let a = Resource::new("Clinic room");
        let b = Resource::new("Clinic room");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_resource_type_serializes_as_type() {
        let mut res = Resource::new("Ultrasound scanner");
        res.resource_type = "Equipment".to_string();
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["type"], "Equipment");
    }
}
