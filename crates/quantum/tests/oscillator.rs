use linalg::dense::{is_hermitian, is_orthonormal};
use linalg::C64;
use quantum::{HarmonicOscillator, ModelError};

#[test]
fn annihilation_operator_shape() {
    let n = 10;
    let qho = HarmonicOscillator::new(n, 1.0).unwrap();
    let a = qho.annihilation_operator();
    assert_eq!((a.nrows(), a.ncols()), (n, n));
    for j in 0..n {
        assert_eq!(a.read(n - 1, j), C64::new(0.0, 0.0));
    }
    assert!((a.read(2, 3).re - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn hamiltonian_is_hermitian() {
    let qho = HarmonicOscillator::new(10, 1.0).unwrap();
    let h = qho.hamiltonian();
    assert_eq!((h.nrows(), h.ncols()), (10, 10));
    assert!(is_hermitian(h, 1e-12));
}

#[test]
fn eigenstates_are_orthonormal() {
    let spec = HarmonicOscillator::new(10, 1.0).unwrap().find_eigenstates();
    assert_eq!(spec.energies.len(), 10);
    assert_eq!((spec.states.nrows(), spec.states.ncols()), (10, 10));
    assert!(is_orthonormal(&spec.states, 1e-9));
}

#[test]
fn ladder_spectrum() {
    let omega = 2.5;
    let qho = HarmonicOscillator::new(10, omega).unwrap();
    assert_eq!(qho.omega(), omega);
    let spec = qho.find_eigenstates();
    for (k, e) in spec.energies.iter().enumerate() {
        let expected = (k as f64 + 0.5) * omega;
        assert!((e - expected).abs() < 1e-9, "k = {}, E = {}", k, e);
    }
}

#[test]
fn rejects_empty_space() {
    assert!(matches!(
        HarmonicOscillator::new(0, 1.0),
        Err(ModelError::InvalidSize { .. })
    ));
    assert!(matches!(
        HarmonicOscillator::new(4, f64::NAN),
        Err(ModelError::NonFinite { .. })
    ));
}
