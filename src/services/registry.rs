// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity registry: catalog loading plus signup/unregister.

use crate::models::{ActivityCatalog, ActivityDetails, ActivitySeed};
use dashmap::DashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Catalog compiled into the binary, used when no file is configured.
const DEFAULT_CATALOG: &str = include_str!("../../data/activities.json");

/// Registry of activities and their rosters.
///
/// The set of activities is fixed at construction; only rosters change.
/// Each roster mutation runs while holding that activity's entry guard,
/// so a membership check and the following push/remove are atomic.
#[derive(Default)]
pub struct ActivityRegistry {
    /// Activity names in catalog order
    order: Vec<String>,
    activities: DashMap<String, ActivityDetails>,
}

impl ActivityRegistry {
    /// Load the catalog embedded at build time (`data/activities.json`).
    pub fn default_catalog() -> Result<Self, CatalogError> {
        Self::load_from_json(DEFAULT_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON array of activities.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let seeds: Vec<ActivitySeed> = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_seeds(seeds)
    }

    /// Build a registry from already-parsed seeds, validating them.
    pub fn from_seeds(seeds: Vec<ActivitySeed>) -> Result<Self, CatalogError> {
        let mut order = Vec::with_capacity(seeds.len());
        let activities = DashMap::with_capacity(seeds.len());

        for seed in seeds {
            if activities.contains_key(&seed.name) {
                return Err(CatalogError::DuplicateActivity(seed.name));
            }
            if seed.details.max_participants == 0 {
                return Err(CatalogError::InvalidCapacity(seed.name));
            }

            if let Some(email) = first_duplicate(&seed.details.participants) {
                return Err(CatalogError::DuplicateParticipant {
                    activity: seed.name,
                    email,
                });
            }

            order.push(seed.name.clone());
            activities.insert(seed.name, seed.details);
        }

        tracing::info!(count = order.len(), "Loaded activities");
        Ok(Self { order, activities })
    }

    /// Snapshot of every activity in catalog order.
    pub fn list(&self) -> ActivityCatalog {
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|details| (name.clone(), details.clone()))
            })
            .collect();
        ActivityCatalog::new(entries)
    }

    /// Details of a single activity.
    pub fn get(&self, activity: &str) -> Option<ActivityDetails> {
        self.activities.get(activity).map(|d| d.clone())
    }

    /// Activity names in catalog order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// Capacity is not enforced. Returns the confirmation message.
    pub fn join(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        let mut details = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        if details.has_participant(email) {
            tracing::debug!(activity, email, "Duplicate signup rejected");
            return Err(RegistryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        details.participants.push(email.to_string());
        tracing::info!(
            activity,
            email,
            participants = details.participants.len(),
            "Participant signed up"
        );

        Ok(format!("{} signed up for {}", email, activity))
    }

    /// Remove `email` from the roster of `activity`.
    pub fn leave(&self, activity: &str, email: &str) -> Result<String, RegistryError> {
        let mut details = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        let Some(position) = details.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity, email, "Unregister for absent participant rejected");
            return Err(RegistryError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        details.participants.remove(position);
        tracing::info!(
            activity,
            email,
            participants = details.participants.len(),
            "Participant unregistered"
        );

        Ok(format!("{} unregistered from {}", email, activity))
    }
}

/// First email that appears more than once in a roster.
fn first_duplicate(participants: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    participants
        .iter()
        .find(|email| !seen.insert(email.as_str()))
        .cloned()
}

/// Errors from roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Participant not found in this activity")]
    ParticipantNotFound { activity: String, email: String },
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("Activity {0} must allow at least one participant")]
    InvalidCapacity(String),

    #[error("Activity {activity} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
