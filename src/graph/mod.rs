//! Task dependency graph primitives for workflow definitions.
//!
//! A [`TaskGraph`] owns one node per task identity; nodes reference each other
//! by [`TaskId`], and every edge is recorded on both endpoints. The linker
//! operations in [`linker`] build edges in bulk (chains and cross products)
//! on top of [`TaskGraph::add_edge`].

pub mod linker;

pub use linker::Rung;

use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Opaque, comparable identity of a task within one workflow definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A task node: its identity plus the adjacency recorded against it.
///
/// An edge A→B is reflected as B in A's downstream set and A in B's upstream
/// set. The sets never hold duplicates, so re-adding an edge is a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct TaskNode {
    id: TaskId,
    upstream: BTreeSet<TaskId>,
    downstream: BTreeSet<TaskId>,
}

impl TaskNode {
    fn new(id: TaskId) -> Self {
        Self {
            id,
            upstream: BTreeSet::new(),
            downstream: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Direct predecessors.
    pub fn upstream(&self) -> &BTreeSet<TaskId> {
        &self.upstream
    }

    /// Direct successors.
    pub fn downstream(&self) -> &BTreeSet<TaskId> {
        &self.downstream
    }
}

/// Registry of task nodes for a single workflow definition.
///
/// The graph only ever adds edges; removal and cycle detection belong to the
/// caller assembling the workflow. Mutation goes through `&mut self`, which
/// pins graph construction to a single writer.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: HashMap<TaskId, TaskNode>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task and return its identity. Registering the same identity
    /// again is a no-op that keeps existing edges.
    pub fn add_task(&mut self, id: impl Into<TaskId>) -> TaskId {
        let id = id.into();
        self.nodes
            .entry(id.clone())
            .or_insert_with(|| TaskNode::new(id.clone()));
        id
    }

    pub fn task(&self, id: &TaskId) -> Option<&TaskNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.nodes.keys()
    }

    /// Direct predecessors of `id`, if the task is registered.
    pub fn upstream_of(&self, id: &TaskId) -> Option<&BTreeSet<TaskId>> {
        self.nodes.get(id).map(TaskNode::upstream)
    }

    /// Direct successors of `id`, if the task is registered.
    pub fn downstream_of(&self, id: &TaskId) -> Option<&BTreeSet<TaskId>> {
        self.nodes.get(id).map(TaskNode::downstream)
    }

    /// Whether the edge `from → to` is recorded on both endpoints.
    pub fn has_edge(&self, from: &TaskId, to: &TaskId) -> bool {
        let forward = self
            .nodes
            .get(from)
            .map(|node| node.downstream.contains(to))
            .unwrap_or(false);
        let backward = self
            .nodes
            .get(to)
            .map(|node| node.upstream.contains(from))
            .unwrap_or(false);
        forward && backward
    }

    /// Record the edge `from → to` on both endpoints. Idempotent.
    pub fn add_edge(&mut self, from: &TaskId, to: &TaskId) -> Result<(), LinkError> {
        self.ensure_known(from)?;
        self.ensure_known(to)?;

        if let Some(node) = self.nodes.get_mut(from) {
            node.downstream.insert(to.clone());
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.upstream.insert(from.clone());
        }
        Ok(())
    }

    fn ensure_known(&self, id: &TaskId) -> Result<(), LinkError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(LinkError::UnknownTask(id.clone()))
        }
    }
}
