//! Roadmap document shape and validation.
//!
//! The generator upstream promises 5 to 15 steps with unique, non-empty ids and non-empty
//! resource fields. This module checks those promises at the boundary so the layout engine can
//! stay total: validation failures belong to the caller, never to layout.

use crate::{StepEdge, StepNode};
use serde::{Deserialize, Serialize};

use std::collections::HashSet;

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Node-count bounds the generator guarantees per roadmap.
pub const MIN_NODES: usize = 5;
pub const MAX_NODES: usize = 15;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("expected between 5 and 15 nodes, got {count}")]
    NodeCountOutOfRange { count: usize },

    #[error("node at index {index} has an empty id")]
    EmptyNodeId { index: usize },

    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    #[error("node {node_id} has a resource with an empty {field}")]
    EmptyResourceField {
        node_id: String,
        field: &'static str,
    },

    #[error("edge at index {index} has an empty {endpoint} id")]
    EmptyEdgeEndpoint {
        index: usize,
        endpoint: &'static str,
    },
}

/// A full generated roadmap, as persisted and as fed to layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapDoc {
    pub title: String,
    pub nodes: Vec<StepNode>,
    #[serde(default)]
    pub edges: Vec<StepEdge>,
}

/// Checks the generator's guarantees. Dangling or cyclic edges are *not* rejected here: layout
/// degrades gracefully on those by design.
pub fn validate(doc: &RoadmapDoc) -> Result<()> {
    if !(MIN_NODES..=MAX_NODES).contains(&doc.nodes.len()) {
        return Err(SchemaError::NodeCountOutOfRange {
            count: doc.nodes.len(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(doc.nodes.len());

    for (index, node) in doc.nodes.iter().enumerate() {
        if node.id.is_empty() {
            return Err(SchemaError::EmptyNodeId { index });
        }
        if !seen.insert(&node.id) {
            return Err(SchemaError::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
        for resource in &node.resources {
            if resource.title.is_empty() {
                return Err(SchemaError::EmptyResourceField {
                    node_id: node.id.clone(),
                    field: "title",
                });
            }
            if resource.url.is_empty() {
                return Err(SchemaError::EmptyResourceField {
                    node_id: node.id.clone(),
                    field: "url",
                });
            }
        }
    }

    for (index, edge) in doc.edges.iter().enumerate() {
        if edge.source.is_empty() {
            return Err(SchemaError::EmptyEdgeEndpoint {
                index,
                endpoint: "source",
            });
        }
        if edge.target.is_empty() {
            return Err(SchemaError::EmptyEdgeEndpoint {
                index,
                endpoint: "target",
            });
        }
    }

    Ok(())
}
