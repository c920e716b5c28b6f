//! Fixed interpolation nodes on the reference interval, triangle and square.
//!
//! Node order is part of the contract: the closed-form Lagrange bases index
//! their functions by position in these tables.

use nalgebra::Point2;
use ndarray::{Array1, array};
use tracing::warn;

use crate::error::{EvalError, EvalResult};

/// Largest degree with a tabulated reference-triangle node set.
pub const MAX_TRIANGLE_NODE_DEGREE: usize = 4;

/// `degree + 1` nodes on `[0, 1]`, endpoints first.
///
/// Degrees up to 4 are tabulated; above that the interior nodes follow the
/// endpoints in increasing order with step `1 / degree`.
pub fn reference_nodes_interval(degree: usize) -> Array1<f64> {
    match degree {
        0 => array![0.5],
        1 => array![0.0, 1.0],
        2 => array![0.0, 1.0, 0.5],
        3 => array![0.0, 1.0, 1.0 / 3.0, 2.0 / 3.0],
        4 => array![0.0, 1.0, 0.25, 0.5, 0.75],
        k => {
            let mut nodes = Vec::with_capacity(k + 1);
            nodes.push(0.0);
            nodes.push(1.0);
            nodes.extend((1..k).map(|i| i as f64 / k as f64));
            Array1::from(nodes)
        }
    }
}

/// `degree + 1` nodes on `[-1, 1]`, symmetric pairs `-a, a` from the
/// endpoints inwards, then the midpoint `0` for even degree.
pub fn reference_nodes_symmetric(degree: usize) -> Array1<f64> {
    let mut nodes = Vec::with_capacity(degree + 1);
    for i in 0..(degree + 1) / 2 {
        let a = (degree - 2 * i) as f64 / degree as f64;
        nodes.push(-a);
        nodes.push(a);
    }
    if degree % 2 == 0 {
        nodes.push(0.0);
    }
    Array1::from(nodes)
}

/// Lagrange nodes of the reference triangle `(0,0), (1,0), (0,1)`.
///
/// Vertices first, then edge nodes counterclockwise from the `(0,0)-(1,0)`
/// edge, then interior nodes.
pub fn reference_nodes_triangle(degree: usize) -> EvalResult<Vec<Point2<f64>>> {
    let p = |x: f64, y: f64| Point2::new(x, y);
    let nodes = match degree {
        1 => vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)],
        2 => vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(0.5, 0.0),
            p(0.5, 0.5),
            p(0.0, 0.5),
        ],
        3 => {
            let (a, b) = (1.0 / 3.0, 2.0 / 3.0);
            vec![
                p(0.0, 0.0),
                p(1.0, 0.0),
                p(0.0, 1.0),
                p(a, 0.0),
                p(b, 0.0),
                p(b, a),
                p(a, b),
                p(0.0, b),
                p(0.0, a),
                p(a, a),
            ]
        }
        4 => vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(0.25, 0.0),
            p(0.5, 0.0),
            p(0.75, 0.0),
            p(0.75, 0.25),
            p(0.5, 0.5),
            p(0.25, 0.75),
            p(0.0, 0.75),
            p(0.0, 0.5),
            p(0.0, 0.25),
            p(0.25, 0.25),
            p(0.5, 0.25),
            p(0.25, 0.5),
        ],
        _ => {
            warn!(degree, "no reference triangle nodes tabulated");
            return Err(EvalError::inconsistent_node_table("triangle", degree));
        }
    };
    Ok(nodes)
}
