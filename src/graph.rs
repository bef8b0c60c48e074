use crate::{EpiError, NodeId, records::ContactRecord};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected simple contact graph over [`NodeId`]s, stored as adjacency
/// sets. Duplicate edge records collapse to one edge; self-paired records are
/// rejected, since a person in contact with themselves transmits nothing and
/// would only distort neighbor counts.
#[derive(Clone, Debug, Default)]
pub struct ContactGraph {
    adjacency: FxHashMap<NodeId, FxHashSet<NodeId>>,
    edge_count: usize,
}

impl ContactGraph {
    /// Builds the graph from an edge-record list: one node per distinct ID in
    /// either column, one undirected edge per distinct unordered pair.
    pub fn from_records(records: &[ContactRecord]) -> Result<ContactGraph, EpiError> {
        let mut graph = ContactGraph::default();
        for record in records {
            if record.person_id == record.contact_id {
                return Err(EpiError::validation(format!(
                    "Person_ID and Contact_ID are both `{}`; self-contact is not a contact",
                    record.person_id
                )));
            }
            graph.add_edge(&record.person_id, &record.contact_id);
        }
        debug!(
            "built contact graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn add_edge(&mut self, a: &NodeId, b: &NodeId) {
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b.clone()).or_default().insert(a.clone());
        if inserted {
            self.edge_count += 1;
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    #[must_use]
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Neighbors of `node`; empty for unknown nodes.
    pub fn neighbors(&self, node: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.adjacency.get(node).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str) -> ContactRecord {
        ContactRecord::new(a, b)
    }

    #[test]
    fn builds_nodes_from_both_columns() {
        let graph = ContactGraph::from_records(&[edge("1", "2"), edge("2", "3")]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        for id in ["1", "2", "3"] {
            assert!(graph.contains(&NodeId::from(id)));
        }
    }

    #[test]
    fn edges_are_undirected() {
        let graph = ContactGraph::from_records(&[edge("A", "B")]).unwrap();

        assert!(graph.has_edge(&NodeId::from("A"), &NodeId::from("B")));
        assert!(graph.has_edge(&NodeId::from("B"), &NodeId::from("A")));
        assert_eq!(graph.neighbors(&NodeId::from("B")).count(), 1);
    }

    #[test]
    fn duplicate_records_collapse() {
        let graph =
            ContactGraph::from_records(&[edge("A", "B"), edge("A", "B"), edge("B", "A")]).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_contact_is_rejected() {
        let error = ContactGraph::from_records(&[edge("A", "A")]).unwrap_err();
        assert!(matches!(error, EpiError::Validation(_)));
        assert!(error.to_string().contains("`A`"));
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let graph = ContactGraph::from_records(&[]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph = ContactGraph::from_records(&[edge("A", "B")]).unwrap();
        assert_eq!(graph.neighbors(&NodeId::from("Z")).count(), 0);
    }
}
