use linalg::dense::{is_hermitian, is_orthonormal};
use quantum::{HeisenbergModel, ModelError};

#[test]
fn chain_of_four_shape_and_hermiticity() {
    let model = HeisenbergModel::new(4, 1.0).unwrap();
    assert_eq!(model.n(), 4);
    assert_eq!(model.j(), 1.0);
    assert_eq!(model.dim(), 16);
    assert!(is_hermitian(model.hamiltonian(), 1e-12));
}

#[test]
fn chain_of_four_spectrum() {
    let model = HeisenbergModel::new(4, 1.0).unwrap();
    let spec = model.solve();
    assert_eq!(spec.dim(), 16);
    assert!(is_orthonormal(&spec.states, 1e-9));

    // Pauli strings are traceless.
    let trace: f64 = spec.energies.iter().sum();
    assert!(trace.abs() < 1e-9, "trace = {}", trace);

    // Ferromagnetic ground state: every bond in the triplet, E = -J n.
    assert!((spec.ground_energy() + 4.0).abs() < 1e-9, "E0 = {}", spec.ground_energy());
    for w in spec.energies.windows(2) {
        assert!(w[0] <= w[1] + 1e-12);
    }
}

#[test]
fn two_spins_double_count_the_bond() {
    // H = -2J (XX + YY + ZZ): triplet at -2J, singlet at +6J.
    let spec = HeisenbergModel::new(2, 1.0).unwrap().solve();
    let expected = [-2.0, -2.0, -2.0, 6.0];
    for (e, x) in spec.energies.iter().zip(expected) {
        assert!((e - x).abs() < 1e-9, "energies = {:?}", spec.energies);
    }
}

#[test]
fn single_spin_sees_all_three_paulis() {
    // H = -J (X + Y + Z) has eigenvalues ±√3 J.
    let spec = HeisenbergModel::new(1, 0.5).unwrap().solve();
    let r = 0.5 * 3f64.sqrt();
    assert!((spec.energies[0] + r).abs() < 1e-9);
    assert!((spec.energies[1] - r).abs() < 1e-9);
}

#[test]
fn rejects_bad_sizes() {
    assert!(matches!(
        HeisenbergModel::new(0, 1.0),
        Err(ModelError::InvalidSize { value: 0, .. })
    ));
    assert!(matches!(
        HeisenbergModel::new(11, 1.0),
        Err(ModelError::TooLarge { value: 11, .. })
    ));
    assert!(matches!(
        HeisenbergModel::new(3, f64::NAN),
        Err(ModelError::NonFinite { name: "J", .. })
    ));
}
