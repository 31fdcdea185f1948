use proptest::prelude::*;

use super::*;
use crate::sample::{marked_tree, self_map, ReplayToken, SampleCfg};
use crate::tree::Tree;

fn normalized(edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = edges
        .iter()
        .map(|&(u, v)| if u <= v { (u, v) } else { (v, u) })
        .collect();
    out.sort_unstable();
    out
}

#[test]
fn path_tree_with_opposite_marks() {
    let tree = Tree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let out = tree_to_function(&tree, 0, 2).unwrap();
    assert_eq!(out.vertebra, vec![0, 1, 2]);
    assert_eq!(out.vertebra_sorted, vec![0, 1, 2]);
    assert_eq!(out.vertebra_reversed, vec![2, 1, 0]);
    assert_eq!(out.vertebra_edges, vec![(0, 1), (1, 2)]);
    assert!(out.oriented_edges.is_empty());
    assert_eq!(out.function.values(), &[2, 1, 0]);
}

#[test]
fn off_vertebra_edges_point_toward_end() {
    // Star: center 0, leaves 1..=3; marks (1, 2). Vertebra is 1-0-2, so
    // the remaining edge 0-3 orients as 3 -> 0.
    let tree = Tree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
    let out = tree_to_function(&tree, 1, 2).unwrap();
    assert_eq!(out.vertebra, vec![1, 0, 2]);
    assert_eq!(out.oriented_edges, vec![(3, 0)]);
    // Sorted vertebra [0, 1, 2] against reversed [2, 0, 1].
    assert_eq!(out.function.values(), &[2, 0, 1, 0]);
}

#[test]
fn equal_marks_still_produce_a_total_function() {
    let tree = Tree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let out = tree_to_function(&tree, 0, 0).unwrap();
    assert_eq!(out.vertebra, vec![0]);
    assert!(out.vertebra_edges.is_empty());
    // Every off-vertebra edge orients toward the single marked vertex.
    assert_eq!(out.function.values(), &[0, 0, 1]);

    let back = function_to_tree(&out.function);
    assert_eq!(back.marks(), Some((0, 0)));
    assert_eq!(normalized(&back.edges()), normalized(tree.edges()));
    assert!(back.to_tree(3).is_ok());
}

#[test]
fn marks_out_of_range_are_rejected() {
    let tree = Tree::from_edges(2, &[(0, 1)]).unwrap();
    assert_eq!(
        tree_to_function(&tree, 0, 2),
        Err(BijectionError::VertexOutOfRange { vertex: 2, n: 2 })
    );
}

#[test]
fn reference_nine_vertex_function_reconstructs() {
    // 1-based (1,2,3,6,6,6,7,8,9), zero-based below. Fixed points
    // everywhere except 3 and 4, which hang off vertex 5.
    let f = crate::func::SelfMap::from_values(vec![0, 1, 2, 5, 5, 5, 6, 7, 8]).unwrap();
    let back = function_to_tree(&f);
    assert_eq!(back.vertebra_sorted, vec![0, 1, 2, 5, 6, 7, 8]);
    assert_eq!(back.vertebra, vec![8, 7, 6, 5, 2, 1, 0]);
    assert_eq!(normalized(&back.oriented_edges), vec![(3, 5), (4, 5)]);
    let tree = back.to_tree(9).unwrap();
    assert_eq!(tree.edges().len(), 8);

    // Forward again with the recovered marks gives back the same function.
    let (start, end) = back.marks().unwrap();
    let again = tree_to_function(&tree, start, end).unwrap();
    assert_eq!(again.function, f);
}

#[test]
fn sorted_against_reversed_invariant_holds() {
    let tree = Tree::from_edges(6, &[(0, 3), (3, 1), (1, 4), (4, 2), (2, 5)]).unwrap();
    let out = tree_to_function(&tree, 0, 5).unwrap();
    for (i, &slot) in out.vertebra_sorted.iter().enumerate() {
        assert_eq!(out.function[slot], out.vertebra_reversed[i]);
    }
}

proptest! {
    #[test]
    fn round_trip_recovers_tree_and_marks(n in 1usize..12, seed in any::<u64>()) {
        let cfg = SampleCfg { n };
        let (tree, start, end) = marked_tree(&cfg, ReplayToken { seed, index: 0 }).unwrap();
        let forward = tree_to_function(&tree, start, end).unwrap();
        prop_assert_eq!(forward.vertebra.first(), Some(&start));
        prop_assert_eq!(forward.vertebra.last(), Some(&end));

        let back = function_to_tree(&forward.function);
        prop_assert_eq!(back.marks(), Some((start, end)));
        prop_assert_eq!(normalized(&back.edges()), normalized(tree.edges()));
    }

    #[test]
    fn any_total_function_yields_n_minus_1_edges(n in 1usize..16, seed in any::<u64>()) {
        let f = self_map(&SampleCfg { n }, ReplayToken { seed, index: 1 }).unwrap();
        let back = function_to_tree(&f);
        prop_assert_eq!(back.edges().len(), n - 1);
        // Tree validity is checked, not assumed; for maps drawn over the
        // full function space the reconstruction does come out a tree.
        prop_assert!(back.to_tree(n).is_ok());
    }
}
