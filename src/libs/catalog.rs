//! Snapshot of the time entry activities defined in Redmine.

use super::tags::TagSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Redmine time entry activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
}

/// Immutable, ordered catalog of activities, keyed by lowercase name.
///
/// The first activity is the default used for rows whose tags name none of
/// the catalog entries.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
    by_name: HashMap<String, usize>,
}

impl ActivityCatalog {
    /// Builds the catalog in declaration order. Returns `None` for an empty list.
    ///
    /// Names are lower-cased so they compare against lowercase tags. If two
    /// activities share a name, the first one wins.
    pub fn new(activities: Vec<Activity>) -> Option<Self> {
        if activities.is_empty() {
            return None;
        }

        let mut ordered: Vec<Activity> = Vec::with_capacity(activities.len());
        let mut by_name = HashMap::new();
        for activity in activities {
            let name = activity.name.trim().to_lowercase();
            if by_name.contains_key(&name) {
                continue;
            }
            by_name.insert(name.clone(), ordered.len());
            ordered.push(Activity { id: activity.id, name });
        }

        Some(Self {
            activities: ordered,
            by_name,
        })
    }

    pub fn default_activity(&self) -> &Activity {
        &self.activities[0]
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.by_name.get(&name.to_lowercase()).map(|&index| &self.activities[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Picks the activity for a row with the given tags.
    ///
    /// When several tags name an activity, catalog order decides, not tag order.
    pub fn resolve(&self, tags: &TagSet) -> &Activity {
        self.activities
            .iter()
            .find(|activity| tags.contains(&activity.name))
            .unwrap_or_else(|| self.default_activity())
    }
}
