use crate::core::Dataset;
use crate::testing::dummies::{MAJORITY, MINORITY, header_numeric, header_with_nominal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn two_decimals(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Two-feature numeric data: a minority blob around (2, 2) and a majority
/// blob around (6, 6). Values carry two decimal places.
pub fn blobs(minority: usize, majority: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(minority + majority);
    let mut labels = Vec::with_capacity(minority + majority);
    for i in 0..(minority + majority) {
        let (center, label) = if i < minority {
            (2.0, MINORITY)
        } else {
            (6.0, MAJORITY)
        };
        let x = two_decimals(center + rng.random_range(-1.5..1.5));
        let y = two_decimals(center + rng.random_range(-1.5..1.5));
        features.push(vec![x, y]);
        labels.push(label);
    }
    Dataset::new(header_numeric(2), features, labels).expect("valid fixture")
}

/// Blobs where a few majority rows sit inside the minority region.
pub fn overlapping(minority: usize, majority: usize, intruders: usize, seed: u64) -> Dataset {
    let base = blobs(minority, majority, seed);
    let (header, mut features, labels) = base.into_parts();
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let start = minority;
    for row in features.iter_mut().skip(start).take(intruders) {
        row[0] = two_decimals(2.0 + rng.random_range(-1.0..1.0));
        row[1] = two_decimals(2.0 + rng.random_range(-1.0..1.0));
    }
    Dataset::new(header, features, labels).expect("valid fixture")
}

/// Small table mixing a numeric and a nominal feature.
pub fn mixed() -> Dataset {
    let features = vec![
        vec![1.0, 0.0],
        vec![1.2, 0.0],
        vec![0.9, 1.0],
        vec![1.1, 0.0],
        vec![5.0, 2.0],
        vec![5.5, 2.0],
        vec![4.8, 1.0],
        vec![5.2, 2.0],
        vec![6.0, 2.0],
        vec![5.9, 2.0],
    ];
    let labels = vec![
        MINORITY, MINORITY, MINORITY, MINORITY, MAJORITY, MAJORITY, MAJORITY, MAJORITY, MAJORITY,
        MAJORITY,
    ];
    Dataset::new(header_with_nominal(), features, labels).expect("valid fixture")
}
