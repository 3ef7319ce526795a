//! Linker scenarios over small workflow definitions.
//!
//! Exercises chain and cross-link semantics the way a workflow author uses
//! them: singles and groups mixed in one chain, fan-out/fan-in wiring, and
//! the validation failures that must leave the graph untouched.

use flowutil::{LinkError, Rung, TaskGraph, TaskId};
use pretty_assertions::assert_eq;

fn sorted_names(ids: &std::collections::BTreeSet<TaskId>) -> Vec<&str> {
    ids.iter().map(TaskId::as_str).collect()
}

/// chain(t1, [t2,t3], [t4,t5], t6): equal-length groups pair by position,
/// singles fan out and in.
#[test]
fn test_chain_mixes_singles_and_groups() {
    let mut graph = TaskGraph::new();
    let ids: Vec<TaskId> = (1..=6).map(|n| graph.add_task(format!("t{n}"))).collect();
    let [t1, t2, t3, t4, t5, t6] = <[TaskId; 6]>::try_from(ids).unwrap();

    graph
        .chain(&[
            Rung::Single(t1.clone()),
            Rung::Group(vec![t2.clone(), t3.clone()]),
            Rung::Group(vec![t4.clone(), t5.clone()]),
            Rung::Single(t6.clone()),
        ])
        .unwrap();

    assert!(graph.has_edge(&t1, &t2));
    assert!(graph.has_edge(&t1, &t3));
    assert!(graph.has_edge(&t2, &t4));
    assert!(graph.has_edge(&t3, &t5));
    assert!(graph.has_edge(&t4, &t6));
    assert!(graph.has_edge(&t5, &t6));

    // Positional pairing between the groups, not a cross product.
    assert!(!graph.has_edge(&t2, &t5));
    assert!(!graph.has_edge(&t3, &t4));

    assert_eq!(sorted_names(graph.downstream_of(&t1).unwrap()), vec!["t2", "t3"]);
    assert_eq!(sorted_names(graph.upstream_of(&t6).unwrap()), vec!["t4", "t5"]);
}

/// chain([t1,t2], [t3,t4,t5]): a 2-vs-3 group pair is a hard validation
/// error and no edge may appear anywhere in the graph.
#[test]
fn test_chain_rejects_unequal_groups() {
    let mut graph = TaskGraph::new();
    let ids: Vec<TaskId> = (1..=5).map(|n| graph.add_task(format!("t{n}"))).collect();

    let err = graph
        .chain(&[
            Rung::Group(vec![ids[0].clone(), ids[1].clone()]),
            Rung::Group(vec![ids[2].clone(), ids[3].clone(), ids[4].clone()]),
        ])
        .unwrap_err();

    assert!(matches!(
        err,
        LinkError::RungLengthMismatch {
            left_len: 2,
            right_len: 3,
            ..
        }
    ));
    for id in &ids {
        assert!(graph.downstream_of(id).unwrap().is_empty());
        assert!(graph.upstream_of(id).unwrap().is_empty());
    }
}

/// cross_link wires the full cartesian product between two stages.
#[test]
fn test_cross_link_fan_out_between_stages() {
    let mut graph = TaskGraph::new();
    let extracts: Vec<TaskId> = ["extract_a", "extract_b"]
        .iter()
        .map(|id| graph.add_task(*id))
        .collect();
    let loads: Vec<TaskId> = ["load_x", "load_y", "load_z"]
        .iter()
        .map(|id| graph.add_task(*id))
        .collect();

    graph.cross_link(&extracts, &loads).unwrap();

    for extract in &extracts {
        assert_eq!(
            sorted_names(graph.downstream_of(extract).unwrap()),
            vec!["load_x", "load_y", "load_z"]
        );
    }
    for load in &loads {
        assert_eq!(
            sorted_names(graph.upstream_of(load).unwrap()),
            vec!["extract_a", "extract_b"]
        );
    }
}

/// Repeating a linker call must not duplicate edges.
#[test]
fn test_relinking_is_idempotent() {
    let mut graph = TaskGraph::new();
    let a = graph.add_task("a");
    let b = graph.add_task("b");
    let rungs = [Rung::Single(a.clone()), Rung::Single(b.clone())];

    graph.chain(&rungs).unwrap();
    graph.chain(&rungs).unwrap();
    graph.cross_link(&[a.clone()], &[b.clone()]).unwrap();

    assert_eq!(graph.downstream_of(&a).unwrap().len(), 1);
    assert_eq!(graph.upstream_of(&b).unwrap().len(), 1);
}

/// A typical definition: one chain call laying out a diamond, then an extra
/// dependency added with cross_link.
#[test]
fn test_small_workflow_definition() {
    let mut graph = TaskGraph::new();
    let start = graph.add_task("start");
    let branch_a = graph.add_task("branch_a");
    let branch_b = graph.add_task("branch_b");
    let join = graph.add_task("join");
    let notify = graph.add_task("notify");

    graph
        .chain(&[
            Rung::Single(start.clone()),
            Rung::Group(vec![branch_a.clone(), branch_b.clone()]),
            Rung::Single(join.clone()),
        ])
        .unwrap();
    graph.cross_link(&[join.clone()], &[notify.clone()]).unwrap();

    assert_eq!(
        sorted_names(graph.downstream_of(&start).unwrap()),
        vec!["branch_a", "branch_b"]
    );
    assert_eq!(
        sorted_names(graph.upstream_of(&join).unwrap()),
        vec!["branch_a", "branch_b"]
    );
    assert!(graph.has_edge(&join, &notify));
    assert!(graph.upstream_of(&start).unwrap().is_empty());
    assert!(graph.downstream_of(&notify).unwrap().is_empty());
}
