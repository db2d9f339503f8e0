//! Location domain entities
//!
//! States and the cities inside them. Referential integrity (every city
//! names an existing state) is checked when a seed is loaded.

use serde::{Deserialize, Serialize};

/// Unique identifier for a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub i64);

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub i64);

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let city = City {
            id: CityId(12),
            name: "Kochi".to_string(),
            state_id: StateId(3),
        };
        let json = serde_json::to_string(&city).unwrap();
        assert_eq!(json, r#"{"id":12,"name":"Kochi","state_id":3}"#);
    }

    #[test]
    fn id_display() {
        assert_eq!(StateId(4).to_string(), "4");
        assert_eq!(CityId(40).to_string(), "40");
    }
}
