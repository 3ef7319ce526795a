//! Edge-construction operations: positional chains and cartesian cross-links.
//!
//! Both operations validate their whole argument list before writing any
//! edge, so a failed call leaves the graph exactly as it was.

use super::{TaskGraph, TaskId};
use crate::error::LinkError;
use std::slice;

/// One position in a [`chain`](TaskGraph::chain) call.
///
/// The caller decides the variant when building the call: either one task or
/// an ordered group. Adjacent groups must have equal lengths; a group next to
/// a single links every member to that single.
#[derive(Debug, Clone)]
pub enum Rung {
    Single(TaskId),
    Group(Vec<TaskId>),
}

impl Rung {
    /// Members in rung order; a single is a one-element slice.
    pub fn members(&self) -> &[TaskId] {
        match self {
            Rung::Single(id) => slice::from_ref(id),
            Rung::Group(ids) => ids,
        }
    }

    fn is_group(&self) -> bool {
        matches!(self, Rung::Group(_))
    }
}

impl From<TaskId> for Rung {
    fn from(id: TaskId) -> Self {
        Rung::Single(id)
    }
}

impl From<Vec<TaskId>> for Rung {
    fn from(ids: Vec<TaskId>) -> Self {
        Rung::Group(ids)
    }
}

impl TaskGraph {
    /// Link every task in `from` to every task in `to` (cartesian product).
    ///
    /// Either side may be empty, making the call a no-op. The two sides need
    /// not have the same length.
    pub fn cross_link(&mut self, from: &[TaskId], to: &[TaskId]) -> Result<(), LinkError> {
        for id in from.iter().chain(to) {
            self.ensure_known(id)?;
        }

        for from_id in from {
            for to_id in to {
                self.add_edge(from_id, to_id)?;
            }
        }
        Ok(())
    }

    /// Link consecutive rungs into a chain.
    ///
    /// For each adjacent pair: single→single adds one edge, a single next to
    /// a group cross-links, and group→group links strictly by position
    /// (member `k` to member `k`, never cross-multiplied). Two adjacent
    /// groups of different lengths fail the whole call with
    /// [`LinkError::RungLengthMismatch`] before any edge is added.
    pub fn chain(&mut self, rungs: &[Rung]) -> Result<(), LinkError> {
        for rung in rungs {
            for id in rung.members() {
                self.ensure_known(id)?;
            }
        }
        for (index, pair) in rungs.windows(2).enumerate() {
            let (left, right) = (&pair[0], &pair[1]);
            if left.is_group() && right.is_group() && left.members().len() != right.members().len()
            {
                return Err(LinkError::RungLengthMismatch {
                    left_index: index,
                    right_index: index + 1,
                    left_len: left.members().len(),
                    right_len: right.members().len(),
                });
            }
        }

        for pair in rungs.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if left.is_group() && right.is_group() {
                for (from_id, to_id) in left.members().iter().zip(right.members()) {
                    self.add_edge(from_id, to_id)?;
                }
            } else {
                for from_id in left.members() {
                    for to_id in right.members() {
                        self.add_edge(from_id, to_id)?;
                    }
                }
            }
        }
        Ok(())
    }
}
