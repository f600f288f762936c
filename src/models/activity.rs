// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Extracurricular activity model for the registry and API.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Metadata and current roster of a single activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct ActivityDetails {
    /// Free-text description
    pub description: String,
    /// Free-text meeting time, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Advertised capacity (informational, not enforced)
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Remaining advertised capacity, floored at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Whether `email` is on the roster (exact match).
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// One entry of the catalog file: an activity name plus its details.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

/// Point-in-time copy of every activity, in catalog order.
///
/// Serializes as a JSON object keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivityDetails)>,
}

impl ActivityCatalog {
    pub fn new(entries: Vec<(String, ActivityDetails)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, details)| details)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityDetails)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, details) in &self.entries {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

/// Confirmation body for signup and unregister.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}
