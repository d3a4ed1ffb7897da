//! Instances shared by the unit tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::{Instance, Metric, Point};
use crate::tour::Tour;

/// Unit square: sides 1, diagonals √2.
pub(crate) fn unit_square() -> Instance {
    Instance::from_points(
        &[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ],
        Metric::Euclidean,
    )
}

pub(crate) fn random_instance(n: usize, seed: u64) -> Instance {
    Instance::random(n, Metric::Euclidean, &mut StdRng::seed_from_u64(seed))
}

/// Asserts the permutation + closure invariant for `start`.
pub(crate) fn assert_valid_tour(instance: &Instance, tour: &Tour, start: usize) {
    assert_eq!(tour.start(), start, "tour {tour:?} does not start at {start}");
    assert!(
        Tour::new(tour.as_slice().to_vec(), instance).is_ok(),
        "invalid tour {tour:?}"
    );
}

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
