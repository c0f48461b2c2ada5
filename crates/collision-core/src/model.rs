//! Record types for the parsed collision configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trace channel and what each response verdict means for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceChannel {
    pub name: String,
    pub description: String,
    pub ignore_semantics: String,
    pub overlap_semantics: String,
    pub block_semantics: String,
}

/// An object channel (classifies a body's own type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectChannel {
    pub name: String,
    pub description: String,
}

/// A collision profile from the response matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name (matrix header cell)
    pub name: String,
    pub collision_enabled: String,
    pub object_type: String,
    /// Channel name -> response, in the order the channel rows were read
    pub responses: Vec<(String, String)>,
}

impl Profile {
    /// Create a profile with empty attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up the response for a channel
    pub fn response(&self, channel: &str) -> Option<&str> {
        self.responses
            .iter()
            .find(|(name, _)| name == channel)
            .map(|(_, response)| response.as_str())
    }

    /// Set the response for a channel.
    ///
    /// A channel that is already present keeps its original position.
    pub fn set_response(&mut self, channel: &str, response: impl Into<String>) {
        let response = response.into();
        match self.responses.iter_mut().find(|(name, _)| name == channel) {
            Some(entry) => entry.1 = response,
            None => self.responses.push((channel.to_string(), response)),
        }
    }

    /// Channel names in insertion order
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(|(name, _)| name.as_str())
    }
}

/// All profiles parsed from the response matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMatrix {
    /// Profile names in header order; this is the render order
    pub profile_names: Vec<String>,
    /// Profiles keyed by name
    pub profiles: BTreeMap<String, Profile>,
}

impl ProfileMatrix {
    /// Get the number of profiles
    pub fn profile_count(&self) -> usize {
        self.profile_names.len()
    }

    /// Find a profile by name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Profiles in header order
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profile_names
            .iter()
            .filter_map(|name| self.profiles.get(name))
    }

    /// Channel order shared by every profile's response table.
    ///
    /// Taken from the first profile in the header; empty when there are no
    /// profiles.
    pub fn canonical_channel_order(&self) -> Vec<String> {
        self.profile_names
            .first()
            .and_then(|name| self.profiles.get(name))
            .map(|profile| profile.channel_names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// An entity or state and the profile it is documented to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReuseEntry {
    pub entity_or_state: String,
    pub profile_name: String,
}

/// Everything parsed from the three sources, ready to render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionModel {
    pub trace_channels: Vec<TraceChannel>,
    pub object_channels: Vec<ObjectChannel>,
    pub matrix: ProfileMatrix,
    pub reuse: Vec<ReuseEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_response_keeps_first_position() {
        let mut profile = Profile::new("Pawn");
        profile.set_response("A", "Ignore");
        profile.set_response("B", "Block");
        profile.set_response("A", "Overlap");

        let order: Vec<&str> = profile.channel_names().collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(profile.response("A"), Some("Overlap"));
        assert_eq!(profile.response("C"), None);
    }

    #[test]
    fn test_canonical_order_from_first_profile() {
        let mut first = Profile::new("First");
        first.set_response("X", "Block");
        first.set_response("Y", "Block");
        let mut second = Profile::new("Second");
        second.set_response("Y", "Ignore");

        let matrix = ProfileMatrix {
            profile_names: vec!["First".to_string(), "Second".to_string()],
            profiles: [("First".to_string(), first), ("Second".to_string(), second)]
                .into_iter()
                .collect(),
        };

        assert_eq!(matrix.canonical_channel_order(), vec!["X", "Y"]);
        let names: Vec<&str> = matrix.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_canonical_order_empty_matrix() {
        assert!(ProfileMatrix::default().canonical_channel_order().is_empty());
    }
}
