//! Minimal gate-level circuit representation.
//!
//! Circuits are flat instruction lists over `num_qubits` wires. Rotation
//! angles are either fixed numbers or a scaled symbol (`2·t`), so a
//! Trotterized circuit can be built once and bound later.
//!
//! For dense evaluation qubit 0 is the most significant tensor factor,
//! matching the ordering used by the Hamiltonian builders.

use crate::error::{CircuitError, CircuitResult};
use crate::gates;
use faer::Mat;
use linalg::dense::identity;
use linalg::C64;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Widest circuit [`Circuit::unitary`] will evaluate.
pub const MAX_UNITARY_QUBITS: usize = 10;

/// A rotation angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    Fixed(f64),
    /// `scale * name`
    Symbol { name: String, scale: f64 },
}

impl Angle {
    pub fn symbol(name: impl Into<String>) -> Self {
        Angle::Symbol {
            name: name.into(),
            scale: 1.0,
        }
    }

    /// The same angle multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Angle::Fixed(v) => Angle::Fixed(v * factor),
            Angle::Symbol { name, scale } => Angle::Symbol {
                name: name.clone(),
                scale: scale * factor,
            },
        }
    }

    pub fn symbol_name(&self) -> Option<&str> {
        match self {
            Angle::Fixed(_) => None,
            Angle::Symbol { name, .. } => Some(name),
        }
    }

    pub fn bind(&self, bindings: &BTreeMap<String, f64>) -> CircuitResult<f64> {
        match self {
            Angle::Fixed(v) => Ok(*v),
            Angle::Symbol { name, scale } => bindings
                .get(name)
                .map(|v| scale * v)
                .ok_or_else(|| CircuitError::UnboundParameter(name.clone())),
        }
    }
}

impl From<f64> for Angle {
    fn from(v: f64) -> Self {
        Angle::Fixed(v)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Fixed(v) => write!(f, "{v}"),
            Angle::Symbol { name, scale } if *scale == 1.0 => write!(f, "{name}"),
            Angle::Symbol { name, scale } => write!(f, "{scale}*{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    Cx,
    Rx(Angle),
    Rz(Angle),
    Rxx(Angle),
    Ryy(Angle),
    Rzz(Angle),
}

impl Gate {
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Cx => "cx",
            Gate::Rx(_) => "rx",
            Gate::Rz(_) => "rz",
            Gate::Rxx(_) => "rxx",
            Gate::Ryy(_) => "ryy",
            Gate::Rzz(_) => "rzz",
        }
    }

    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::Rx(_) | Gate::Rz(_) => 1,
            Gate::Cx | Gate::Rxx(_) | Gate::Ryy(_) | Gate::Rzz(_) => 2,
        }
    }

    pub fn angle(&self) -> Option<&Angle> {
        match self {
            Gate::Cx => None,
            Gate::Rx(a) | Gate::Rz(a) | Gate::Rxx(a) | Gate::Ryy(a) | Gate::Rzz(a) => Some(a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub gate: Gate,
    pub qubits: Vec<usize>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate.name())?;
        if let Some(angle) = self.gate.angle() {
            write!(f, "({angle})")?;
        }
        let qubits: Vec<String> = self.qubits.iter().map(|q| format!("q[{q}]")).collect();
        write!(f, " {}", qubits.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    num_qubits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn cx(&mut self, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Cx, vec![control, target])
    }

    pub fn rx(&mut self, theta: impl Into<Angle>, qubit: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Rx(theta.into()), vec![qubit])
    }

    pub fn rz(&mut self, theta: impl Into<Angle>, qubit: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Rz(theta.into()), vec![qubit])
    }

    pub fn rxx(&mut self, theta: impl Into<Angle>, q0: usize, q1: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Rxx(theta.into()), vec![q0, q1])
    }

    pub fn ryy(&mut self, theta: impl Into<Angle>, q0: usize, q1: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Ryy(theta.into()), vec![q0, q1])
    }

    pub fn rzz(&mut self, theta: impl Into<Angle>, q0: usize, q1: usize) -> CircuitResult<&mut Self> {
        self.push(Gate::Rzz(theta.into()), vec![q0, q1])
    }

    fn push(&mut self, gate: Gate, qubits: Vec<usize>) -> CircuitResult<&mut Self> {
        debug_assert_eq!(gate.num_qubits(), qubits.len());
        for &q in &qubits {
            if q >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange {
                    qubit: q,
                    num_qubits: self.num_qubits,
                });
            }
        }
        if qubits.len() == 2 && qubits[0] == qubits[1] {
            return Err(CircuitError::RepeatedQubit(qubits[0]));
        }
        self.instructions.push(Instruction { gate, qubits });
        Ok(self)
    }

    /// Gate counts keyed by gate name.
    pub fn count_ops(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for inst in &self.instructions {
            *counts.entry(inst.gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Names of all unbound symbols.
    pub fn parameters(&self) -> BTreeSet<String> {
        self.instructions
            .iter()
            .filter_map(|inst| inst.gate.angle())
            .filter_map(Angle::symbol_name)
            .map(str::to_owned)
            .collect()
    }

    /// Dense unitary of the whole circuit with symbols bound from `bindings`.
    pub fn unitary(&self, bindings: &BTreeMap<String, f64>) -> CircuitResult<Mat<C64>> {
        if self.num_qubits > MAX_UNITARY_QUBITS {
            return Err(CircuitError::TooWide {
                num_qubits: self.num_qubits,
                max: MAX_UNITARY_QUBITS,
            });
        }

        let dim = 1usize << self.num_qubits;
        let mut u = identity(dim);
        let mut column = vec![C64::new(0.0, 0.0); dim];

        for inst in &self.instructions {
            let op = GateMatrix::resolve(&inst.gate, bindings)?;
            for col in 0..dim {
                for (row, v) in column.iter_mut().enumerate() {
                    *v = u.read(row, col);
                }
                match &op {
                    GateMatrix::One(m) => apply_1q(&mut column, self.num_qubits, inst.qubits[0], m),
                    GateMatrix::Two(m) => apply_2q(
                        &mut column,
                        self.num_qubits,
                        inst.qubits[0],
                        inst.qubits[1],
                        m,
                    ),
                }
                for (row, v) in column.iter().enumerate() {
                    u.write(row, col, *v);
                }
            }
        }
        Ok(u)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {} ({} qubits)", self.name, self.num_qubits)?;
        for inst in &self.instructions {
            writeln!(f, "{inst}")?;
        }
        Ok(())
    }
}

enum GateMatrix {
    One([[C64; 2]; 2]),
    Two([[C64; 4]; 4]),
}

impl GateMatrix {
    fn resolve(gate: &Gate, bindings: &BTreeMap<String, f64>) -> CircuitResult<Self> {
        Ok(match gate {
            Gate::Cx => GateMatrix::Two(gates::cnot()),
            Gate::Rx(a) => GateMatrix::One(gates::rx(a.bind(bindings)?)),
            Gate::Rz(a) => GateMatrix::One(gates::rz(a.bind(bindings)?)),
            Gate::Rxx(a) => GateMatrix::Two(gates::rxx(a.bind(bindings)?)),
            Gate::Ryy(a) => GateMatrix::Two(gates::ryy(a.bind(bindings)?)),
            Gate::Rzz(a) => GateMatrix::Two(gates::rzz(a.bind(bindings)?)),
        })
    }
}

#[inline]
fn bit_of(n: usize, q: usize) -> usize {
    1 << (n - 1 - q)
}

fn apply_1q(psi: &mut [C64], n: usize, q: usize, m: &[[C64; 2]; 2]) {
    let mask = bit_of(n, q);
    for idx in 0..psi.len() {
        if idx & mask != 0 {
            continue;
        }
        let a = psi[idx];
        let b = psi[idx | mask];
        psi[idx] = m[0][0] * a + m[0][1] * b;
        psi[idx | mask] = m[1][0] * a + m[1][1] * b;
    }
}

// `q0` selects the high bit of the 4x4 gate index.
fn apply_2q(psi: &mut [C64], n: usize, q0: usize, q1: usize, m: &[[C64; 4]; 4]) {
    let m0 = bit_of(n, q0);
    let m1 = bit_of(n, q1);
    for idx in 0..psi.len() {
        if idx & (m0 | m1) != 0 {
            continue;
        }
        let slots = [idx, idx | m1, idx | m0, idx | m0 | m1];
        let amps = slots.map(|s| psi[s]);
        for (r, &slot) in slots.iter().enumerate() {
            let mut acc = C64::new(0.0, 0.0);
            for (c, amp) in amps.iter().enumerate() {
                acc += m[r][c] * *amp;
            }
            psi[slot] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_qubits() {
        let mut c = Circuit::new("c", 2);
        assert!(matches!(
            c.cx(0, 2),
            Err(CircuitError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
        ));
        assert!(matches!(c.rzz(1.0, 1, 1), Err(CircuitError::RepeatedQubit(1))));
        assert!(c.is_empty());
    }

    #[test]
    fn cx_flips_target_when_control_set() {
        let mut c = Circuit::new("cx", 2);
        c.cx(0, 1).unwrap();
        let u = c.unitary(&BTreeMap::new()).unwrap();
        // |10> (q0 = 1) -> |11>
        assert!((u.read(3, 2) - C64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((u.read(0, 0) - C64::new(1.0, 0.0)).norm() < 1e-12);

        let mut reversed = Circuit::new("xc", 2);
        reversed.cx(1, 0).unwrap();
        let u = reversed.unitary(&BTreeMap::new()).unwrap();
        // |01> (q1 = 1) -> |11>
        assert!((u.read(3, 1) - C64::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn unbound_symbol_is_reported() {
        let mut c = Circuit::new("p", 1);
        c.rx(Angle::symbol("t").scaled(2.0), 0).unwrap();
        assert_eq!(c.parameters().into_iter().collect::<Vec<_>>(), vec!["t".to_string()]);
        assert!(matches!(
            c.unitary(&BTreeMap::new()),
            Err(CircuitError::UnboundParameter(name)) if name == "t"
        ));
        assert_eq!(c.instructions()[0].to_string(), "rx(2*t) q[0]");
    }
}
