//! Lookup service port
//!
//! The selector depends on `LocalitySource`; `LookupClient` is the HTTP
//! adapter, tests substitute in-memory sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Opaque locality identifier.
///
/// The lookup service may send ids as JSON numbers or strings; both are kept
/// in their textual form, which is what a select option binds to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct LocalityId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for LocalityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => LocalityId(n.to_string()),
            RawId::Text(s) => LocalityId(s),
        }
    }
}

impl From<LocalityId> for String {
    fn from(id: LocalityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for LocalityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A city (or other subordinate place) returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub id: LocalityId,
    pub name: String,
}

/// A state (or other parent place)
///
/// Shares the `{id, name}` wire shape with `Locality`.
pub type Region = Locality;

/// Port for fetching dependent lists
#[async_trait]
pub trait LocalitySource: Send + Sync {
    /// Localities belonging to a region, in service order
    async fn localities(&self, region_id: &str) -> Result<Vec<Locality>, LookupError>;

    /// All selectable regions
    async fn regions(&self) -> Result<Vec<Region>, LookupError>;
}
