use ndarray::Array1;
use tracing::warn;

use super::{Basis, BasisGradients};
use crate::disc::reference_nodes::reference_nodes_interval;
use crate::error::{EvalError, EvalResult};

/// Highest degree for which second derivatives are provided.
pub const MAX_SECOND_DERIVATIVE_DEGREE: usize = 4;

/// Nodal Lagrange basis on `[0, 1]` over [`reference_nodes_interval`].
#[derive(Clone, Debug)]
pub struct IntervalLagrangeBasis {
    basis_degree: usize,
    basis_size: usize,
    ref_nodes: Array1<f64>,
}

impl IntervalLagrangeBasis {
    pub fn new(degree: usize) -> Self {
        Self {
            basis_degree: degree,
            basis_size: Self::size_for(degree),
            ref_nodes: reference_nodes_interval(degree),
        }
    }
    pub fn ref_nodes(&self) -> &Array1<f64> {
        &self.ref_nodes
    }
    /// `Π_{j≠k} (x_k - x_j)`
    fn denominator(&self, k: usize) -> f64 {
        let nodes = &self.ref_nodes;
        (0..self.basis_size)
            .filter(|&j| j != k)
            .map(|j| nodes[k] - nodes[j])
            .product()
    }
    /// Second derivative of every function at `x`, from the symmetric
    /// double sum `Σ_{j≠k} Σ_{m≠j,k} Π_{l≠j,m,k} (x - x_l) / Π_{j≠k} (x_k - x_j)`.
    pub fn eval_second_derivatives(&self, x: f64) -> EvalResult<Array1<f64>> {
        if self.basis_degree > MAX_SECOND_DERIVATIVE_DEGREE {
            warn!(degree = self.basis_degree, "interval second derivative out of range");
            return Err(EvalError::unsupported_degree(
                "interval Lagrange second derivative",
                self.basis_degree,
                MAX_SECOND_DERIVATIVE_DEGREE,
            ));
        }
        let nodes = &self.ref_nodes;
        let n = self.basis_size;
        let mut ret = Array1::zeros(n);
        if self.basis_degree < 2 {
            return Ok(ret);
        }
        for k in 0..n {
            let mut sum = 0.0;
            for j in (0..n).filter(|&j| j != k) {
                for m in (0..n).filter(|&m| m != j && m != k) {
                    let mut prod = 1.0;
                    for l in (0..n).filter(|&l| l != j && l != m && l != k) {
                        prod *= x - nodes[l];
                    }
                    sum += prod;
                }
            }
            ret[k] = sum / self.denominator(k);
        }
        Ok(ret)
    }
}

impl Basis for IntervalLagrangeBasis {
    type Point = f64;
    type Value = Array1<f64>;

    fn size(&self) -> usize {
        self.basis_size
    }
    fn degree(&self) -> usize {
        self.basis_degree
    }
    fn size_for(degree: usize) -> usize {
        degree + 1
    }
    fn eval_basis(&self, x: &f64) -> Array1<f64> {
        let nodes = &self.ref_nodes;
        let mut ret = Array1::zeros(self.basis_size);
        for k in 0..self.basis_size {
            let mut bk = 1.0;
            for j in 0..self.basis_size {
                if j != k {
                    bk *= (x - nodes[j]) / (nodes[k] - nodes[j]);
                }
            }
            ret[k] = bk;
        }
        ret
    }
}

impl BasisGradients for IntervalLagrangeBasis {
    type Gradient = Array1<f64>;

    fn eval_gradients(&self, x: &f64) -> Array1<f64> {
        let nodes = &self.ref_nodes;
        let n = self.basis_size;
        let mut ret = Array1::zeros(n);
        for k in 0..n {
            let mut sum = 0.0;
            for j in (0..n).filter(|&j| j != k) {
                let mut prod = 1.0;
                for m in (0..n).filter(|&m| m != j && m != k) {
                    prod *= x - nodes[m];
                }
                sum += prod;
            }
            ret[k] = sum / self.denominator(k);
        }
        ret
    }
}
