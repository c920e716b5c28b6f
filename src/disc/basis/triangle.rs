use nalgebra::Point2;
use ndarray::{Array1, Array2};
use tracing::warn;

use super::{Basis, BasisGradients};
use crate::disc::reference_nodes::{MAX_TRIANGLE_NODE_DEGREE, reference_nodes_triangle};
use crate::error::{EvalError, EvalResult};

/// Nodal Lagrange basis on the reference triangle `(0,0), (1,0), (0,1)`.
///
/// Function `i` is one at `ref_nodes()[i]` and zero at every other node.
#[derive(Clone, Debug)]
pub struct TriangleLagrangeBasis {
    basis_degree: usize,
    basis_size: usize,
    ref_nodes: Vec<Point2<f64>>,
}

impl TriangleLagrangeBasis {
    pub fn new(degree: usize) -> EvalResult<Self> {
        if !(1..=MAX_TRIANGLE_NODE_DEGREE).contains(&degree) {
            warn!(degree, "triangle Lagrange degree out of range");
            return Err(EvalError::unsupported_degree(
                "triangle Lagrange",
                degree,
                MAX_TRIANGLE_NODE_DEGREE,
            ));
        }
        Ok(Self {
            basis_degree: degree,
            basis_size: Self::size_for(degree),
            ref_nodes: reference_nodes_triangle(degree)?,
        })
    }
    pub fn ref_nodes(&self) -> &[Point2<f64>] {
        &self.ref_nodes
    }
}

impl Basis for TriangleLagrangeBasis {
    type Point = Point2<f64>;
    type Value = Array1<f64>;

    fn size(&self) -> usize {
        self.basis_size
    }
    fn degree(&self) -> usize {
        self.basis_degree
    }
    fn size_for(degree: usize) -> usize {
        (degree + 1) * (degree + 2) / 2
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Array1<f64> {
        let (xi, eta) = (pt.x, pt.y);
        let values = match self.basis_degree {
            1 => vec![1.0 - eta - xi, xi, eta],
            2 => vec![
                (-1.0 + eta + xi) * (-1.0 + 2.0 * eta + 2.0 * xi),
                xi * (-1.0 + 2.0 * xi),
                eta * (-1.0 + 2.0 * eta),
                -4.0 * xi * (-1.0 + eta + xi),
                4.0 * eta * xi,
                -4.0 * eta * (-1.0 + eta + xi),
            ],
            3 => vec![
                -0.5 * (-1.0 + eta + xi)
                    * (-2.0 + 3.0 * eta + 3.0 * xi)
                    * (-1.0 + 3.0 * eta + 3.0 * xi),
                0.5 * xi * (-2.0 + 3.0 * xi) * (-1.0 + 3.0 * xi),
                0.5 * eta * (-2.0 + 3.0 * eta) * (-1.0 + 3.0 * eta),
                4.5 * xi * (-1.0 + eta + xi) * (-2.0 + 3.0 * eta + 3.0 * xi),
                -4.5 * xi * (-1.0 + eta + xi) * (-1.0 + 3.0 * xi),
                4.5 * eta * xi * (-1.0 + 3.0 * xi),
                4.5 * eta * (-1.0 + 3.0 * eta) * xi,
                -4.5 * eta * (-1.0 + 3.0 * eta) * (-1.0 + eta + xi),
                4.5 * eta * (-1.0 + eta + xi) * (-2.0 + 3.0 * eta + 3.0 * xi),
                -27.0 * eta * xi * (-1.0 + eta + xi),
            ],
            4 => vec![
                1.0 / 3.0
                    * (-1.0 + eta + xi)
                    * (-1.0 + 2.0 * eta + 2.0 * xi)
                    * (-3.0 + 4.0 * eta + 4.0 * xi)
                    * (-1.0 + 4.0 * eta + 4.0 * xi),
                1.0 / 3.0 * xi * (-1.0 + 2.0 * xi) * (-3.0 + 4.0 * xi) * (-1.0 + 4.0 * xi),
                1.0 / 3.0 * eta * (-1.0 + 2.0 * eta) * (-3.0 + 4.0 * eta) * (-1.0 + 4.0 * eta),
                -16.0 / 3.0
                    * xi
                    * (-1.0 + eta + xi)
                    * (-1.0 + 2.0 * eta + 2.0 * xi)
                    * (-3.0 + 4.0 * eta + 4.0 * xi),
                4.0 * xi * (-1.0 + eta + xi) * (-1.0 + 4.0 * xi) * (-3.0 + 4.0 * eta + 4.0 * xi),
                -16.0 / 3.0 * xi * (-1.0 + eta + xi) * (-1.0 + 2.0 * xi) * (-1.0 + 4.0 * xi),
                16.0 / 3.0 * eta * xi * (-1.0 + 2.0 * xi) * (-1.0 + 4.0 * xi),
                4.0 * eta * (-1.0 + 4.0 * eta) * xi * (-1.0 + 4.0 * xi),
                16.0 / 3.0 * eta * (-1.0 + 2.0 * eta) * (-1.0 + 4.0 * eta) * xi,
                -16.0 / 3.0 * eta * (-1.0 + 2.0 * eta) * (-1.0 + 4.0 * eta) * (-1.0 + eta + xi),
                4.0 * eta * (-1.0 + 4.0 * eta) * (-1.0 + eta + xi) * (-3.0 + 4.0 * eta + 4.0 * xi),
                -16.0 / 3.0
                    * eta
                    * (-1.0 + eta + xi)
                    * (-1.0 + 2.0 * eta + 2.0 * xi)
                    * (-3.0 + 4.0 * eta + 4.0 * xi),
                32.0 * eta * xi * (-1.0 + eta + xi) * (-3.0 + 4.0 * eta + 4.0 * xi),
                -32.0 * eta * xi * (-1.0 + eta + xi) * (-1.0 + 4.0 * xi),
                -32.0 * eta * (-1.0 + 4.0 * eta) * xi * (-1.0 + eta + xi),
            ],
            _ => unreachable!("degree checked on construction"),
        };
        debug_assert_eq!(values.len(), self.basis_size);
        Array1::from(values)
    }
}

impl BasisGradients for TriangleLagrangeBasis {
    type Gradient = Array2<f64>;

    fn eval_gradients(&self, pt: &Point2<f64>) -> Array2<f64> {
        let (xi, eta) = (pt.x, pt.y);
        let grads: Vec<[f64; 2]> = match self.basis_degree {
            1 => vec![[-1.0, -1.0], [1.0, 0.0], [0.0, 1.0]],
            2 => {
                let g0 = -3.0 + 4.0 * eta + 4.0 * xi;
                vec![
                    [g0, g0],
                    [-1.0 + 4.0 * xi, 0.0],
                    [0.0, -1.0 + 4.0 * eta],
                    [-4.0 * (-1.0 + eta + 2.0 * xi), -4.0 * xi],
                    [4.0 * eta, 4.0 * xi],
                    [-4.0 * eta, -4.0 * (-1.0 + 2.0 * eta + xi)],
                ]
            }
            3 => {
                let g0 = 0.5
                    * (-11.0 + 36.0 * xi
                        - 9.0 * (eta * (-4.0 + 3.0 * eta) + 6.0 * eta * xi + 3.0 * xi * xi));
                vec![
                    [g0, g0],
                    [1.0 + 4.5 * xi * (-2.0 + 3.0 * xi), 0.0],
                    [0.0, 1.0 + 4.5 * eta * (-2.0 + 3.0 * eta)],
                    [
                        4.5 * (2.0
                            + 3.0 * eta * eta
                            + xi * (-10.0 + 9.0 * xi)
                            + eta * (-5.0 + 12.0 * xi)),
                        4.5 * xi * (-5.0 + 6.0 * eta + 6.0 * xi),
                    ],
                    [
                        -4.5 * (1.0 + eta * (-1.0 + 6.0 * xi) + xi * (-8.0 + 9.0 * xi)),
                        4.5 * xi * (1.0 - 3.0 * xi),
                    ],
                    [4.5 * eta * (-1.0 + 6.0 * xi), 4.5 * xi * (-1.0 + 3.0 * xi)],
                    [4.5 * eta * (-1.0 + 3.0 * eta), 4.5 * xi * (-1.0 + 6.0 * eta)],
                    [
                        4.5 * eta * (1.0 - 3.0 * eta),
                        -4.5 * (1.0 - xi + eta * (-8.0 + 9.0 * eta + 6.0 * xi)),
                    ],
                    [
                        4.5 * eta * (-5.0 + 6.0 * eta + 6.0 * xi),
                        4.5 * (2.0 + 9.0 * eta * eta - 5.0 * xi
                            + 3.0 * xi * xi
                            + 2.0 * eta * (-5.0 + 6.0 * xi)),
                    ],
                    [-27.0 * eta * (-1.0 + eta + 2.0 * xi), -27.0 * xi * (-1.0 + 2.0 * eta + xi)],
                ]
            }
            4 => {
                let g0 = 1.0 / 3.0
                    * (-5.0 + 8.0 * eta + 8.0 * xi)
                    * (5.0
                        + 16.0 * eta * eta
                        + 4.0 * xi * (-5.0 + 4.0 * xi)
                        + 4.0 * eta * (-5.0 + 8.0 * xi));
                vec![
                    [g0, g0],
                    [1.0 / 3.0 * (-3.0 + 8.0 * xi) * (1.0 + 4.0 * xi * (-3.0 + 4.0 * xi)), 0.0],
                    [0.0, 1.0 / 3.0 * (-3.0 + 8.0 * eta) * (1.0 + 4.0 * eta * (-3.0 + 4.0 * eta))],
                    [
                        -16.0 / 3.0
                            * (-3.0
                                + 8.0 * eta * eta * eta
                                + 6.0 * eta * eta * (-3.0 + 8.0 * xi)
                                + eta * (13.0 + 72.0 * (-1.0 + xi) * xi)
                                + 2.0 * xi * (13.0 + xi * (-27.0 + 16.0 * xi))),
                        -16.0 / 3.0
                            * xi
                            * (13.0
                                + 24.0 * eta * eta
                                + 12.0 * xi * (-3.0 + 2.0 * xi)
                                + 12.0 * eta * (-3.0 + 4.0 * xi)),
                    ],
                    [
                        4.0 * (-1.0 + eta + 2.0 * xi)
                            * (3.0 + 32.0 * (-1.0 + xi) * xi + 4.0 * eta * (-1.0 + 8.0 * xi)),
                        4.0 * xi * (-1.0 + 4.0 * xi) * (-7.0 + 8.0 * eta + 8.0 * xi),
                    ],
                    [
                        -16.0 / 3.0
                            * (-1.0
                                + eta
                                + 12.0 * eta * xi * (-1.0 + 2.0 * xi)
                                + 2.0 * xi * (7.0 + xi * (-21.0 + 16.0 * xi))),
                        -16.0 / 3.0 * xi * (1.0 - 6.0 * xi + 8.0 * xi * xi),
                    ],
                    [
                        16.0 / 3.0 * eta * (1.0 + 12.0 * xi * (-1.0 + 2.0 * xi)),
                        16.0 / 3.0 * xi * (1.0 - 6.0 * xi + 8.0 * xi * xi),
                    ],
                    [
                        4.0 * eta * (-1.0 + 4.0 * eta) * (-1.0 + 8.0 * xi),
                        4.0 * (-1.0 + 8.0 * eta) * xi * (-1.0 + 4.0 * xi),
                    ],
                    [
                        16.0 / 3.0 * eta * (1.0 - 6.0 * eta + 8.0 * eta * eta),
                        16.0 / 3.0 * (1.0 + 12.0 * eta * (-1.0 + 2.0 * eta)) * xi,
                    ],
                    [
                        -16.0 / 3.0 * eta * (1.0 - 6.0 * eta + 8.0 * eta * eta),
                        -16.0 / 3.0
                            * (-1.0
                                + xi
                                + 2.0
                                    * eta
                                    * (7.0 - 6.0 * xi + eta * (-21.0 + 16.0 * eta + 12.0 * xi))),
                    ],
                    [
                        4.0 * eta * (-1.0 + 4.0 * eta) * (-7.0 + 8.0 * eta + 8.0 * xi),
                        4.0 * (-1.0 + 2.0 * eta + xi)
                            * (3.0 - 4.0 * xi + 32.0 * eta * (-1.0 + eta + xi)),
                    ],
                    [
                        -16.0 / 3.0
                            * eta
                            * (13.0
                                + 24.0 * eta * eta
                                + 12.0 * xi * (-3.0 + 2.0 * xi)
                                + 12.0 * eta * (-3.0 + 4.0 * xi)),
                        -16.0 / 3.0
                            * (-3.0
                                + 2.0 * eta * (13.0 + eta * (-27.0 + 16.0 * eta))
                                + 13.0 * xi
                                + 72.0 * (-1.0 + eta) * eta * xi
                                + 6.0 * (-3.0 + 8.0 * eta) * xi * xi
                                + 8.0 * xi * xi * xi),
                    ],
                    [
                        32.0 * eta
                            * (3.0
                                + 4.0 * eta * eta
                                + 2.0 * xi * (-7.0 + 6.0 * xi)
                                + eta * (-7.0 + 16.0 * xi)),
                        32.0 * xi
                            * (3.0 + 2.0 * eta * (-7.0 + 6.0 * eta) - 7.0 * xi
                                + 16.0 * eta * xi
                                + 4.0 * xi * xi),
                    ],
                    [
                        -32.0 * eta
                            * (1.0 + 2.0 * xi * (-5.0 + 6.0 * xi) + eta * (-1.0 + 8.0 * xi)),
                        -32.0 * xi * (-1.0 + 2.0 * eta + xi) * (-1.0 + 4.0 * xi),
                    ],
                    [
                        -32.0 * eta * (-1.0 + 4.0 * eta) * (-1.0 + eta + 2.0 * xi),
                        -32.0 * xi * (1.0 - xi + 2.0 * eta * (-5.0 + 6.0 * eta + 4.0 * xi)),
                    ],
                ]
            }
            _ => unreachable!("degree checked on construction"),
        };
        debug_assert_eq!(grads.len(), self.basis_size);
        let mut ret = Array2::zeros((self.basis_size, 2));
        for (i, [dx, dy]) in grads.into_iter().enumerate() {
            ret[(i, 0)] = dx;
            ret[(i, 1)] = dy;
        }
        ret
    }
}
