pub mod aggregate;
mod engine;
mod error;
mod graph;
pub mod logging;
mod params;
pub mod random;
mod records;
mod state;

pub use aggregate::{DayCount, daily_counts};
pub use engine::SimulationEngine;
pub use error::EpiError;
pub use graph::ContactGraph;
pub use params::Params;
pub use records::{ContactRecord, read_records, read_records_from_path};
pub use state::{EpidemicState, Snapshot, Status};

use serde::{Deserialize, Serialize};

/// Identifier of a person in the contact network. Opaque; equality is by
/// value. `Ord` so node iteration can be pinned to one order (see `engine`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) String);

impl NodeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    #[must_use]
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
