//! Statevector simulation of small quantum registers.
//!
//! Supports the gate set the key-generation circuit needs: Hadamard,
//! Pauli-X, and controlled-X. All three have real-valued matrices, so the
//! register tracks real amplitudes only. Register width is bounded; the
//! statevector holds 2^n amplitudes.

use crate::error::{HelixError, Result};
use rand::Rng;

/// Smallest register the simulator accepts
pub const MIN_QUBITS: usize = 2;

/// Largest register the simulator accepts (2^20 amplitudes = 8 MiB)
pub const MAX_QUBITS: usize = 20;

/// A gate applied to register qubits. Closed set; callers dispatch on the
/// variant, never on gate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Hadamard on one qubit
    H(usize),
    /// Pauli-X (bit flip) on one qubit
    X(usize),
    /// Controlled-X: (control, target)
    Cx(usize, usize),
}

/// A simulated quantum register in the computational basis.
#[derive(Debug, Clone)]
pub struct Register {
    qubits: usize,
    amps: Vec<f64>,
}

impl Register {
    /// New register initialized to |0...0⟩
    pub fn new(qubits: usize) -> Result<Self> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&qubits) {
            return Err(HelixError::InvalidQubitCount(qubits));
        }
        let mut amps = vec![0.0; 1usize << qubits];
        amps[0] = 1.0;
        Ok(Self { qubits, amps })
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// Apply a single gate
    pub fn apply(&mut self, gate: Gate) {
        match gate {
            Gate::H(q) => self.hadamard(q),
            Gate::X(q) => self.pauli_x(q),
            Gate::Cx(control, target) => self.controlled_x(control, target),
        }
    }

    /// Apply a gate sequence in order
    pub fn run(&mut self, gates: &[Gate]) {
        for &gate in gates {
            self.apply(gate);
        }
    }

    fn hadamard(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        let norm = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (a, b) = (self.amps[i], self.amps[j]);
                self.amps[i] = norm * (a + b);
                self.amps[j] = norm * (a - b);
            }
        }
    }

    fn pauli_x(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                self.amps.swap(i, i | mask);
            }
        }
    }

    fn controlled_x(&mut self, control: usize, target: usize) {
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;
        for i in 0..self.amps.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amps.swap(i, i | target_mask);
            }
        }
    }

    /// Sum of squared amplitudes (1.0 up to rounding for a valid state)
    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a * a).sum()
    }

    /// Measure every qubit, collapsing the register to the sampled basis
    /// state. Returns one bit (0/1) per qubit, qubit 0 first.
    pub fn measure<R: Rng>(&mut self, rng: &mut R) -> Vec<u8> {
        let draw: f64 = rng.gen();
        let mut acc = 0.0;
        let mut outcome = self.amps.len() - 1;
        for (i, &a) in self.amps.iter().enumerate() {
            acc += a * a;
            if draw < acc {
                outcome = i;
                break;
            }
        }

        for a in &mut self.amps {
            *a = 0.0;
        }
        self.amps[outcome] = 1.0;

        (0..self.qubits).map(|q| ((outcome >> q) & 1) as u8).collect()
    }
}

/// The key-generation circuit: Hadamard on every qubit for a uniform
/// superposition, then a controlled-X chain entangling neighbors.
pub fn keygen_circuit(qubits: usize) -> Vec<Gate> {
    let mut gates: Vec<Gate> = (0..qubits).map(Gate::H).collect();
    gates.extend((0..qubits.saturating_sub(1)).map(|i| Gate::Cx(i, i + 1)));
    gates
}
