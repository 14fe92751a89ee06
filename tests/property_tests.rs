//! Property-based tests for column stores, reduction and diagrams.

use ndarray::Array2;
use proptest::prelude::*;
use std::collections::BTreeSet;
use tda_persistence::{
    BitColumns, BoundaryMatrix, Calculation, Filtration, HeapColumns, PersistenceDiagram, PersistencePairing, Point,
    Reduction, Representation, SetColumns, SimplicialComplex, VectorColumns, VietorisRips,
};

const ROWS: usize = 160;

/// Bit pattern → strictly upper-triangular matrix
fn matrix_from_bits<R: Representation>(bits: &[Vec<bool>]) -> BoundaryMatrix<R> {
    let n = bits.len();
    let mut m = BoundaryMatrix::with_columns(n);
    for (j, row_bits) in bits.iter().enumerate() {
        let rows: Vec<usize> = (0..j).filter(|&i| row_bits[i]).collect();
        m.set_column(j, rows).unwrap();
    }
    m
}

fn reduce_bits<R: Representation>(bits: &[Vec<bool>]) -> PersistencePairing {
    let mut m: BoundaryMatrix<R> = matrix_from_bits(bits);
    Reduction::Standard.reduce(&mut m).unwrap()
}

fn rips_complex(coords: &[(f64, f64)]) -> SimplicialComplex {
    let points = Array2::from_shape_fn((coords.len(), 2), |(i, j)| if j == 0 { coords[i].0 } else { coords[i].1 });
    VietorisRips::from_points(&points, 0.8, 2).build()
}

/// Columns 0 and 1 hold `a` and `b`; bitsets need as many columns as rows
fn store_with<R: Representation>(a: &BTreeSet<usize>, b: &BTreeSet<usize>) -> R {
    let mut store = R::default();
    store.set_num_columns(ROWS);
    store.set_column(0, &a.iter().copied().collect::<Vec<_>>());
    store.set_column(1, &b.iter().copied().collect::<Vec<_>>());
    store
}

fn check_add_columns<R: Representation>(a: &BTreeSet<usize>, b: &BTreeSet<usize>) {
    let mut store: R = store_with(a, b);
    store.add_columns(0, 1);
    let expected: Vec<usize> = a.symmetric_difference(b).copied().collect();
    assert_eq!(store.column(1), expected);
    assert_eq!(store.max_index(1), expected.last().copied());

    store.add_columns(0, 1);
    assert_eq!(store.column(1), b.iter().copied().collect::<Vec<_>>());
    assert_eq!(store.column(0), a.iter().copied().collect::<Vec<_>>());
}

fn upper_triangular_bits() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1usize..14).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(any::<bool>(), n), n))
}

proptest! {
    #[test]
    fn prop_add_columns_is_symmetric_difference_and_self_inverse(
        a in prop::collection::btree_set(0usize..150, 0..25),
        b in prop::collection::btree_set(0usize..150, 0..25),
    ) {
        check_add_columns::<VectorColumns>(&a, &b);
        check_add_columns::<SetColumns>(&a, &b);
        check_add_columns::<HeapColumns>(&a, &b);
        check_add_columns::<BitColumns>(&a, &b);
    }

    #[test]
    fn prop_disjoint_columns_yield_sorted_union(
        a in prop::collection::btree_set(0usize..50, 1..15),
        b in prop::collection::btree_set(50usize..100, 1..15),
    ) {
        let union: Vec<usize> = a.union(&b).copied().collect();
        let mut store: HeapColumns = store_with(&a, &b);
        store.add_columns(0, 1);
        prop_assert_eq!(store.column(1), union.clone());
        let mut store: VectorColumns = store_with(&b, &a);
        store.add_columns(0, 1);
        prop_assert_eq!(store.column(1), union);
    }

    #[test]
    fn prop_column_stores_pair_identically(bits in upper_triangular_bits()) {
        let reference = reduce_bits::<VectorColumns>(&bits);
        let set = reduce_bits::<SetColumns>(&bits);
        prop_assert_eq!(set.pairs(), reference.pairs());
        let heap = reduce_bits::<HeapColumns>(&bits);
        prop_assert_eq!(heap.pairs(), reference.pairs());
        let bit = reduce_bits::<BitColumns>(&bits);
        prop_assert_eq!(bit.pairs(), reference.pairs());
    }

    #[test]
    fn prop_pairing_partitions_indices(bits in upper_triangular_bits()) {
        let pairing = reduce_bits::<VectorColumns>(&bits);
        let mut seen = vec![0usize; bits.len()];
        for &(birth, death) in pairing.pairs() {
            prop_assert!(birth < death);
            seen[birth] += 1;
            seen[death] += 1;
        }
        for i in pairing.unpaired() {
            seen[i] += 1;
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn prop_reduction_is_idempotent(bits in upper_triangular_bits()) {
        let mut m: BoundaryMatrix = matrix_from_bits(&bits);
        let first = Reduction::Standard.reduce(&mut m).unwrap();
        let second = Reduction::Standard.reduce(&mut m).unwrap();
        prop_assert_eq!(second.column_additions(), 0);
        prop_assert_eq!(second.pairs(), first.pairs());
    }

    #[test]
    fn prop_rips_diagrams_agree_across_variants(
        coords in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 3..9),
    ) {
        let k = rips_complex(&coords);
        prop_assert!(k.check_filtration_order().is_ok());

        let reference = Calculation::default().diagrams::<VectorColumns>(&k).unwrap();
        for algorithm in [Reduction::Standard, Reduction::Twist] {
            for dualize in [false, true] {
                let c = Calculation::new(algorithm, dualize);
                prop_assert_eq!(&c.diagrams::<SetColumns>(&k).unwrap(), &reference);
                prop_assert_eq!(&c.diagrams::<HeapColumns>(&k).unwrap(), &reference);
                prop_assert_eq!(&c.diagrams::<BitColumns>(&k).unwrap(), &reference);
            }
        }

        // at least one essential component
        prop_assert!(reference[0].betti() >= 1);
        let creators: usize = reference.iter().map(PersistenceDiagram::len).sum();
        let pairing = Calculation::default().pairing::<VectorColumns>(&k).unwrap();
        prop_assert_eq!(creators, k.len() - pairing.pairs().len());
    }

    #[test]
    fn prop_resorting_a_shuffled_complex_restores_a_filtration(
        coords in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 3..8),
        reverse_input in any::<bool>(),
    ) {
        let k = rips_complex(&coords);
        let mut shuffled: SimplicialComplex = if reverse_input {
            k.iter().rev().cloned().collect()
        } else {
            k.iter().cloned().collect()
        };
        Filtration::Standard.apply(&mut shuffled, false);
        prop_assert!(shuffled.check_filtration_order().is_ok());
    }

    #[test]
    fn prop_remove_diagonal_drops_exactly_diagonal_points(
        raw in prop::collection::vec((0u8..5, 0u8..5), 0..30),
    ) {
        let points: Vec<Point> = raw.iter().map(|&(b, d)| Point::new(b as f64, d as f64)).collect();
        let mut d = PersistenceDiagram::from_points(0, points.iter().copied());
        let diagonal = points.iter().filter(|p| p.birth == p.death).count();
        d.remove_diagonal();
        prop_assert_eq!(d.len(), points.len() - diagonal);
        let kept: Vec<Point> = points.into_iter().filter(|p| p.birth != p.death).collect();
        prop_assert_eq!(d.points(), kept.as_slice());
    }
}
