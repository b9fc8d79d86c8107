//! Property tests for RDM transforms over random batches.
//!
//! Purpose
//! -------
//! - Check the batch-level guarantees of every transform on random
//!   `(n_rdm × n_pairs)` blocks instead of hand-picked inputs.
//!
//! Coverage
//! --------
//! - Shape preservation and non-mutation of the input.
//! - Rank range, rank sums, and ordinal permutations.
//! - sqrt / positive clamping.
//! - min-max range and exact endpoints; geo-topological full band.
//! - Geodesic distances never exceed the direct normalized edge, and both
//!   shortest-path backends agree.
use ndarray::Array2;
use proptest::prelude::*;
use rdm_transforms::{
    graph::DenseFloydWarshall,
    rdm::{RdmBatch, Rdms},
    transform::{
        QuantileBand, RangePolicy, RankMethod, geodesic_transform, geodesic_transform_with,
        geotopological_transform, minmax_transform, positive_transform, rank_transform,
        sqrt_transform,
    },
};

/// Random batch: 1–3 RDMs over 2–6 patterns, entries in [−5, 5].
fn batch_strategy() -> impl Strategy<Value = Rdms> {
    (1usize..4, 2usize..7).prop_flat_map(|(n_rdm, n_dim)| {
        let n_pairs = n_dim * (n_dim - 1) / 2;
        proptest::collection::vec(-5.0f64..5.0, n_rdm * n_pairs).prop_map(move |values| {
            let block = Array2::from_shape_vec((n_rdm, n_pairs), values)
                .expect("length matches shape");
            Rdms::from_vectors(block, Some("euclidean")).expect("triangular pair count")
        })
    })
}

fn has_range(rdms: &Rdms) -> bool {
    let d = rdms.dissimilarities();
    let lo = d.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = d.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    hi > lo
}

proptest! {
    #[test]
    fn elementwise_transforms_preserve_shape_and_input(rdms in batch_strategy()) {
        let before = rdms.get_vectors();
        let dim = before.dim();

        let rooted = sqrt_transform(&rdms).expect("sqrt never fails on finite input");
        let positive = positive_transform(&rdms).expect("positive never fails");
        let ranked = rank_transform(&rdms, RankMethod::Average).expect("no NaN");

        prop_assert_eq!(rooted.dissimilarities().dim(), dim);
        prop_assert_eq!(positive.dissimilarities().dim(), dim);
        prop_assert_eq!(ranked.dissimilarities().dim(), dim);
        prop_assert_eq!(rdms.get_vectors(), before);
    }

    #[test]
    fn rank_transform_ranges_and_permutations(rdms in batch_strategy()) {
        let n_pairs = rdms.n_pairs();
        let expected_sum = (n_pairs * (n_pairs + 1)) as f64 / 2.0;

        let average = rank_transform(&rdms, RankMethod::Average).expect("average");
        let ordinal = rank_transform(&rdms, RankMethod::Ordinal).expect("ordinal");

        for row in average.dissimilarities().rows() {
            prop_assert!(row.iter().all(|&r| r >= 1.0 && r <= n_pairs as f64));
            prop_assert!((row.sum() - expected_sum).abs() < 1e-9);
        }
        for row in ordinal.dissimilarities().rows() {
            let mut ranks = row.to_vec();
            ranks.sort_by(f64::total_cmp);
            let expected: Vec<f64> = (1..=n_pairs).map(|r| r as f64).collect();
            prop_assert_eq!(ranks, expected);
        }

        let reranked = rank_transform(&ordinal, RankMethod::Ordinal).expect("rank of ranks");
        prop_assert_eq!(reranked.dissimilarities(), ordinal.dissimilarities());
    }

    #[test]
    fn sqrt_and_positive_clamp_negatives(rdms in batch_strategy()) {
        let rooted = sqrt_transform(&rdms).expect("sqrt");
        let positive = positive_transform(&rdms).expect("positive");

        prop_assert!(rooted.dissimilarities().iter().all(|&x| x >= 0.0));
        for (&orig, &pos) in rdms.dissimilarities().iter().zip(positive.dissimilarities().iter()) {
            if orig >= 0.0 {
                prop_assert_eq!(pos, orig);
            } else {
                prop_assert_eq!(pos, 0.0);
            }
        }
    }

    #[test]
    fn minmax_and_full_band_agree_and_hit_endpoints(rdms in batch_strategy()) {
        prop_assume!(has_range(&rdms));

        let scaled = minmax_transform(&rdms).expect("non-degenerate range");
        let banded = geotopological_transform(&rdms, QuantileBand::default()).expect("full band");

        let d = scaled.dissimilarities();
        prop_assert!(d.iter().all(|&x| (0.0..=1.0).contains(&x)));
        prop_assert!(d.iter().any(|&x| x == 0.0));
        prop_assert!(d.iter().any(|&x| x == 1.0));
        prop_assert_eq!(banded.dissimilarities(), d);
    }

    #[test]
    fn geodesic_never_exceeds_unsaturated_edges(rdms in batch_strategy()) {
        prop_assume!(has_range(&rdms));

        let pet = geodesic_transform(&rdms).expect("petgraph");
        let dense = geodesic_transform_with(&rdms, &DenseFloydWarshall, RangePolicy::Strict)
            .expect("dense");
        let scaled = minmax_transform(&rdms).expect("minmax");

        for ((&p, &q), &m) in pet
            .dissimilarities()
            .iter()
            .zip(dense.dissimilarities().iter())
            .zip(scaled.dissimilarities().iter())
        {
            if p.is_infinite() {
                prop_assert!(q.is_infinite());
            } else {
                prop_assert!((p - q).abs() < 1e-9);
            }
            prop_assert!(p >= 0.0);
            if m < 1.0 {
                prop_assert!(p <= m + 1e-12);
            }
        }
    }
}
