use super::*;
use crate::{error::ErrorKind, graph_test_support::check_network_consistency};

#[test]
fn test_group_counts() {
    let mut g = Bipartite::new();
    g.add_vertex_w_group(Group::Top);
    g.add_labeled_vertex_w_group(Group::Bottom, "b").unwrap();
    g.add_vertex_w_group(Group::Top);
    g.add_vertex();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_top_vertices(), 2);
    assert_eq!(g.num_bottom_vertices(), 1);
    assert_eq!(g.group_by_label("b"), Ok(Some(Group::Bottom)));
    assert_eq!(g.group(VertexId::new(3)), Ok(None));
    assert!(g.group(VertexId::new(4)).is_err());
    assert_eq!(
        g.vertices_in(Group::Top).collect::<Vec<_>>(),
        vec![VertexId::new(0), VertexId::new(2)]
    );
}

#[test]
fn test_duplicate_label_does_not_tag() {
    let mut g = Bipartite::new();
    g.add_labeled_vertex_w_group(Group::Top, "a").unwrap();
    assert!(g.add_labeled_vertex_w_group(Group::Bottom, "a").is_err());
    assert_eq!(g.num_vertices(), 1);
    assert_eq!(g.num_bottom_vertices(), 0);
}

#[test]
fn test_add_edge_ignores_groups() {
    let mut g = Bipartite::new();
    let a = g.add_vertex_w_group(Group::Top);
    let b = g.add_vertex_w_group(Group::Top);
    g.add_edge(a, b).unwrap();
    assert_eq!(g.num_edges(), 1);
    assert!(!g.is_properly_bipartite());
}

#[test]
fn test_add_edge_checked_enforces_groups() {
    let mut g = Bipartite::new();
    let a = g.add_vertex_w_group(Group::Top);
    let b = g.add_vertex_w_group(Group::Top);
    let c = g.add_vertex_w_group(Group::Bottom);
    let d = g.add_vertex();

    let err = g.add_edge_checked(a, b).unwrap_err();
    assert_eq!(err, crate::error::GraphError::SameGroup { from: a, to: b });
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(
        g.add_edge_checked(c, d).unwrap_err().kind(),
        ErrorKind::ConstraintViolation
    );
    assert_eq!(g.num_edges(), 0);

    g.add_edge_checked(c, a).unwrap();
    assert!(g.is_properly_bipartite());
}

#[test]
fn test_group_mask_marks_members() {
    let mut g = Bipartite::new();
    g.add_vertex_w_group(Group::Top);
    g.add_vertex_w_group(Group::Bottom);
    g.add_vertex();
    g.add_vertex_w_group(Group::Top);
    let top = g.group_mask(Group::Top);
    assert_eq!(top.len(), 4);
    assert_eq!(top.iter_ones().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(g.group_mask(Group::Bottom).count_ones(), 1);
}

#[test]
fn test_add_edge_by_label_assigns_groups() {
    let mut g = Bipartite::new();
    g.add_edge_by_label("alice", "book").unwrap();
    g.add_edge_by_label("bob", "book").unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_top_vertices(), 2);
    assert_eq!(g.num_bottom_vertices(), 1);
    assert_eq!(g.group_by_label("book"), Ok(Some(Group::Bottom)));
    assert_eq!(g.degree_by_label("book"), Ok(2));
    assert_eq!(g.to_string(), "Bipartite(|V|=3, |E|=2)");
    check_network_consistency(&g);
}

#[test]
fn test_biadjacency() {
    let mut g = DiBipartite::new();
    let t0 = g.add_vertex_w_group(Group::Top);
    let b0 = g.add_vertex_w_group(Group::Bottom);
    let t1 = g.add_vertex_w_group(Group::Top);
    let b1 = g.add_vertex_w_group(Group::Bottom);
    g.add_edge(t0, b1).unwrap();
    g.add_edge(b0, t1).unwrap();
    let m = g.biadjacency();
    assert_eq!((m.rows(), m.cols()), (2, 2));
    assert_eq!(m.row(0), &[0, 1]);
    assert_eq!(m.row(1), &[1, 0]);
    assert_eq!(g.to_string(), "DiBipartite(|V|=4, |E|=2)");
}
