use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Emergency,
    Congestion,
    Signal,
}

/// An operator-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub category: AlertCategory,
    pub message: String,
    pub location: String,
    /// Seconds since the UNIX epoch.
    pub created_at: u64,
}

/// Append-only list of alerts, kept in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notices every session opens with, stamped with `created_at`.
    pub fn seeded(created_at: u64) -> Self {
        let mut feed = Self::new();
        feed.push(
            AlertCategory::Emergency,
            "Emergency vehicle approaching Main St & 5th Ave",
            "Main St & 5th Ave",
            created_at,
        );
        feed.push(
            AlertCategory::Congestion,
            "Heavy traffic detected on Central Blvd",
            "Central Blvd",
            created_at,
        );
        feed
    }

    /// Appends an alert; ids count up from "1".
    pub fn push(
        &mut self,
        category: AlertCategory,
        message: &str,
        location: &str,
        created_at: u64,
    ) -> &Alert {
        let id = (self.alerts.len() + 1).to_string();
        self.alerts.push(Alert {
            id,
            category,
            message: message.to_string(),
            location: location.to_string(),
            created_at,
        });
        &self.alerts[self.alerts.len() - 1]
    }

    pub fn list_alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
