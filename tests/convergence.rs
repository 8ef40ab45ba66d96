use rand::{SeedableRng, rngs::StdRng};

use spsa::{
    Bernoulli, BoundedConstraints, Bounds, Optimizer, Spsa, StandardGain, Unconstrained, Vector,
    losses::{absolute_sum, rosenbrock},
    optimize, optimize_with,
};

#[test]
fn spsa_absolute_sum() {
    let mut spsa = Spsa::new(
        Vector::from([1.; 5]),
        absolute_sum,
        StandardGain::ak(1., 100., 0.602).unwrap(),
        StandardGain::ck(0.1, 0.101).unwrap(),
        Bernoulli::new(1.).unwrap(),
        StdRng::seed_from_u64(42),
    );

    let theta = spsa.run(1000).unwrap();

    assert!(
        theta.mean_square() < 0.001,
        "didn't optimize the absolute sum very well: {theta}"
    );
}

#[test]
fn optimize_absolute_sum() {
    let theta = optimize(absolute_sum, Vector::from([1.; 5]), 1000, 1., 0.1).unwrap();

    assert!(
        theta.mean_square() < 0.001,
        "didn't optimize the absolute sum very well: {theta}"
    );
}

#[test]
fn optimize_rosenbrock() {
    let theta0 = Vector::from([0.99, 1., 0.99, 1., 0.99, 1., 0.99, 1., 0.99, 1.]);
    let theta = optimize_with(
        rosenbrock,
        theta0,
        10_000,
        0.002,
        0.05,
        Unconstrained,
        StdRng::seed_from_u64(42),
    )
    .unwrap();

    let loss = rosenbrock(&theta);
    assert!(
        loss < 0.001,
        "didn't optimize the rosenbrock function very well: {theta} {loss}"
    );
}

#[test]
fn optimize_bounded_away_from_the_minimum() {
    // The unconstrained minimum sits at the origin, outside the box.
    let bounds: BoundedConstraints = [(0.5, 2.), (-2., -0.5), (0., 1.)]
        .into_iter()
        .map(Bounds::from)
        .collect();

    let theta = optimize_with(
        absolute_sum,
        Vector::from([1., -1., 1.]),
        1000,
        1.,
        0.1,
        bounds,
        StdRng::seed_from_u64(42),
    )
    .unwrap();

    assert!((0.5..0.55).contains(&theta[0]), "{theta}");
    assert!((-0.55..=-0.5).contains(&theta[1]), "{theta}");
    assert!((0. ..0.15).contains(&theta[2]), "{theta}");
}

#[test]
fn optimize_zero_rounds() {
    let theta0 = Vector::from([3., -4.]);
    let theta = optimize(absolute_sum, theta0.clone(), 0, 1., 0.1).unwrap();

    assert_eq!(theta, theta0);
}

#[test]
fn optimize_invalid_gains() {
    assert!(optimize(absolute_sum, Vector::from([1.]), 10, 0., 0.1).is_err());
    assert!(optimize(absolute_sum, Vector::from([1.]), 10, 1., -0.1).is_err());
}
