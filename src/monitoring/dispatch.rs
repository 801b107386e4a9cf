use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Ambulance,
    Fire,
    Police,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnitType::Ambulance => write!(f, "Ambulance"),
            UnitType::Fire => write!(f, "Fire"),
            UnitType::Police => write!(f, "Police"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A dispatched responder listed on the emergency response panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchedUnit {
    pub id: String,
    pub unit: UnitType,
    pub location: String,
    pub priority: Priority,
    pub eta_minutes: u32,
    pub route: String,
}

impl DispatchedUnit {
    fn new(
        id: &str,
        unit: UnitType,
        location: &str,
        priority: Priority,
        eta_minutes: u32,
        route: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            unit,
            location: location.to_string(),
            priority,
            eta_minutes,
            route: route.to_string(),
        }
    }
}

pub fn create_dispatch_roster() -> Vec<DispatchedUnit> {
    vec![
        DispatchedUnit::new(
            "amb-001",
            UnitType::Ambulance,
            "Main St & 3rd Ave",
            Priority::High,
            2,
            "Route to General Hospital",
        ),
        DispatchedUnit::new(
            "fire-002",
            UnitType::Fire,
            "Central Blvd & Oak",
            Priority::High,
            4,
            "Route to 1st Ave Emergency",
        ),
        DispatchedUnit::new(
            "pol-003",
            UnitType::Police,
            "Park Ave & Elm",
            Priority::Medium,
            6,
            "Patrol Route Alpha",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_ordered_by_dispatch() {
        let ids: Vec<_> = create_dispatch_roster()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["amb-001", "fire-002", "pol-003"]);
    }

    #[test]
    fn unit_types_serialize_lowercase() {
        let json = serde_json::to_string(&UnitType::Ambulance).unwrap();
        assert_eq!(json, "\"ambulance\"");
    }
}
