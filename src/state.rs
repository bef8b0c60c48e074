use crate::{NodeId, graph::ContactGraph, records::ContactRecord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// SIR disease status. Transitions only ever run Susceptible → Infected →
/// Recovered; Recovered is absorbing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Status {
    Susceptible,
    Infected,
    Recovered,
}

impl Status {
    #[must_use]
    pub fn is_susceptible(&self) -> bool {
        matches!(self, Status::Susceptible)
    }

    #[must_use]
    pub fn is_infected(&self) -> bool {
        matches!(self, Status::Infected)
    }

    #[must_use]
    pub fn is_recovered(&self) -> bool {
        matches!(self, Status::Recovered)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Health {
    pub(crate) status: Status,
    pub(crate) days_infected: u32,
}

/// Per-node epidemic state for one simulated day. The engine never mutates a
/// day's state in place; each step clones and rewrites, which is what makes
/// same-day transitions simultaneous.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EpidemicState {
    health: FxHashMap<NodeId, Health>,
}

impl EpidemicState {
    /// Every node in the graph, Susceptible with zero days infected.
    #[must_use]
    pub fn susceptible(graph: &ContactGraph) -> EpidemicState {
        let health = graph
            .nodes()
            .map(|node| {
                (
                    node.clone(),
                    Health {
                        status: Status::Susceptible,
                        days_infected: 0,
                    },
                )
            })
            .collect();
        EpidemicState { health }
    }

    /// Initial state from the records the graph was built from. A record's
    /// seed applies to its `Person_ID` node; when several records seed the
    /// same node, the last one wins. An `Infected` seed carries the record's
    /// `Days_Infected`; a `Recovered` seed freezes it; a `Susceptible` seed
    /// resets it to zero.
    #[must_use]
    pub fn from_records(graph: &ContactGraph, records: &[ContactRecord]) -> EpidemicState {
        let mut state = EpidemicState::susceptible(graph);
        for record in records {
            let Some(status) = record.seed_status else {
                continue;
            };
            let days_infected = match status {
                Status::Susceptible => 0,
                Status::Infected | Status::Recovered => record.days_infected,
            };
            state.set(&record.person_id, status, days_infected);
        }
        state
    }

    pub(crate) fn set(&mut self, node: &NodeId, status: Status, days_infected: u32) {
        self.health.insert(
            node.clone(),
            Health {
                status,
                days_infected,
            },
        );
    }

    #[must_use]
    pub fn status(&self, node: &NodeId) -> Option<Status> {
        self.health.get(node).map(|health| health.status)
    }

    #[must_use]
    pub fn days_infected(&self, node: &NodeId) -> u32 {
        self.health
            .get(node)
            .map_or(0, |health| health.days_infected)
    }

    #[must_use]
    pub fn infected_count(&self) -> usize {
        self.health
            .values()
            .filter(|health| health.status.is_infected())
            .count()
    }

    #[must_use]
    pub fn has_infected(&self) -> bool {
        self.health
            .values()
            .any(|health| health.status.is_infected())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.health.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.health.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&NodeId, &Health)> {
        self.health.iter()
    }

    /// Status-only projection of this state. Days-infected counters stay
    /// internal to the engine.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            statuses: self
                .health
                .iter()
                .map(|(node, health)| (node.clone(), health.status))
                .collect(),
        }
    }
}

/// Immutable record of every node's status at the end of one simulated day.
/// Serializes as a plain map of node id to status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    statuses: FxHashMap<NodeId, Status>,
}

impl Snapshot {
    #[must_use]
    pub fn status(&self, node: &NodeId) -> Option<Status> {
        self.statuses.get(node).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Status)> {
        self.statuses.iter().map(|(node, status)| (node, *status))
    }
}
