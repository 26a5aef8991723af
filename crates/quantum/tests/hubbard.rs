use linalg::dense::is_hermitian;
use quantum::{HubbardModel, ModelError};

#[test]
fn two_sites_dimension_and_symmetry() {
    let model = HubbardModel::new(2, 1.0, 2.0).unwrap();
    assert_eq!(model.num_sites(), 2);
    assert_eq!(model.t(), 1.0);
    assert_eq!(model.u(), 2.0);
    assert_eq!(model.dim(), 16);
    assert!(is_hermitian(model.hamiltonian(), 1e-12));

    let h = model.hamiltonian();
    for i in 0..16 {
        for j in 0..16 {
            assert!(h.read(i, j).im.abs() < 1e-15);
        }
    }
}

#[test]
fn energies_are_sorted() {
    let spec = HubbardModel::new(2, 1.0, 2.0).unwrap().diagonalize();
    assert_eq!(spec.energies.len(), 16);
    for w in spec.energies.windows(2) {
        assert!(w[1] - w[0] >= -1e-12, "energies = {:?}", spec.energies);
    }
}

#[test]
fn atomic_limit_counts_double_occupancy() {
    // t = 0: 9 states without a doubly occupied site, 6 with one, 1 with two.
    let u = 3.0;
    let spec = HubbardModel::new(2, 0.0, u).unwrap().diagonalize();
    let count = |target: f64| {
        spec.energies
            .iter()
            .filter(|&&e| (e - target).abs() < 1e-9)
            .count()
    };
    assert_eq!(count(0.0), 9);
    assert_eq!(count(u), 6);
    assert_eq!(count(2.0 * u), 1);
}

#[test]
fn free_hopping_ground_state() {
    // U = 0: each spin species hops independently with energies {-t, 0, +t}.
    let spec = HubbardModel::new(2, 1.0, 0.0).unwrap().diagonalize();
    assert!((spec.ground_energy() + 2.0).abs() < 1e-9, "E0 = {}", spec.ground_energy());
    assert!((spec.energies[15] - 2.0).abs() < 1e-9);
}

#[test]
fn single_site_has_no_hopping() {
    let spec = HubbardModel::new(1, 5.0, 1.5).unwrap().diagonalize();
    let expected = [0.0, 0.0, 0.0, 1.5];
    for (e, x) in spec.energies.iter().zip(expected) {
        assert!((e - x).abs() < 1e-12);
    }
}

#[test]
fn rejects_bad_sizes() {
    assert!(matches!(
        HubbardModel::new(0, 1.0, 1.0),
        Err(ModelError::InvalidSize { .. })
    ));
    assert!(matches!(
        HubbardModel::new(6, 1.0, 1.0),
        Err(ModelError::TooLarge { max: 5, .. })
    ));
    assert!(matches!(
        HubbardModel::new(2, 1.0, f64::INFINITY),
        Err(ModelError::NonFinite { name: "U", .. })
    ));
}
