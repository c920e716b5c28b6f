use nalgebra::Point2;
use ndarray::{Array1, Array2};
use tracing::debug;

use super::{Basis, BasisGradients};
use crate::disc::{mesh::MeshGeometry, reference_nodes::reference_nodes_symmetric};
use crate::error::{EvalError, EvalResult};

/// `(degree + 1)²` nodes of a quadrilateral cell: the tensor grid of
/// [`reference_nodes_symmetric`] pushed through the bilinear map of the four
/// corners. Node `j * (degree + 1) + i` comes from reference point `(ξ_i, η_j)`.
pub fn equidistributed_nodes<M, C>(
    mesh: &M,
    cell: &C,
    degree: usize,
) -> EvalResult<Vec<Point2<f64>>>
where
    M: MeshGeometry<C>,
{
    let pts = mesh.points(cell);
    if pts.len() != 4 {
        return Err(EvalError::insufficient_points(4, pts.len()));
    }
    let bilinear = |xi: f64, eta: f64| {
        let w = [
            0.25 * (1.0 - xi) * (1.0 - eta),
            0.25 * (1.0 + xi) * (1.0 - eta),
            0.25 * (1.0 + xi) * (1.0 + eta),
            0.25 * (1.0 - xi) * (1.0 + eta),
        ];
        let x = (0..4).map(|i| w[i] * pts[i].x).sum();
        let y = (0..4).map(|i| w[i] * pts[i].y).sum();
        Point2::new(x, y)
    };
    let qps = reference_nodes_symmetric(degree);
    let mut ret = Vec::with_capacity(qps.len() * qps.len());
    for &eta in qps.iter() {
        for &xi in qps.iter() {
            ret.push(bilinear(xi, eta));
        }
    }
    Ok(ret)
}

/// Tensor-product nodal basis over [`equidistributed_nodes`].
///
/// Function `l` is the 1-D Lagrange factor in `x` over the nodes of its row
/// times the factor in `y` over the nodes of its column. Only exact on cells
/// whose node rows share `y` and node columns share `x`.
#[derive(Clone, Debug)]
pub struct QuadLagrangeBasis {
    basis_degree: usize,
    basis_size: usize,
    nodes: Vec<Point2<f64>>,
}

/// Value and derivative at `t` of the 1-D Lagrange factor of node `own`
/// over `coords[idx]` for `idx` in `line`.
fn nodal_factor<I>(coords: &[f64], line: I, own: usize, t: f64) -> (f64, f64)
where
    I: Iterator<Item = usize> + Clone,
{
    let mut value = 1.0;
    let mut denom = 1.0;
    let mut sum = 0.0;
    for j in line.clone().filter(|&j| j != own) {
        value *= (t - coords[j]) / (coords[own] - coords[j]);
        denom *= coords[own] - coords[j];
        let mut prod = 1.0;
        for m in line.clone().filter(|&m| m != j && m != own) {
            prod *= t - coords[m];
        }
        sum += prod;
    }
    (value, sum / denom)
}

impl QuadLagrangeBasis {
    pub fn new<M, C>(mesh: &M, cell: &C, degree: usize) -> EvalResult<Self>
    where
        M: MeshGeometry<C>,
    {
        let nodes = equidistributed_nodes(mesh, cell, degree)?;
        debug!(degree, node_num = nodes.len(), "quadrilateral Lagrange basis");
        Ok(Self {
            basis_degree: degree,
            basis_size: Self::size_for(degree),
            nodes,
        })
    }
    pub fn nodes(&self) -> &[Point2<f64>] {
        &self.nodes
    }
    /// `(value, derivative)` pairs of the x factors and of the y factors.
    fn factors(&self, pt: &Point2<f64>) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let n = self.basis_degree + 1;
        let xs: Vec<f64> = self.nodes.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = self.nodes.iter().map(|p| p.y).collect();
        let mut fx = Vec::with_capacity(self.basis_size);
        let mut fy = Vec::with_capacity(self.basis_size);
        for l in 0..self.basis_size {
            let (row, col) = (l / n, l % n);
            fx.push(nodal_factor(&xs, row * n..(row + 1) * n, l, pt.x));
            fy.push(nodal_factor(&ys, (col..self.basis_size).step_by(n), l, pt.y));
        }
        (fx, fy)
    }
}

impl Basis for QuadLagrangeBasis {
    type Point = Point2<f64>;
    type Value = Array1<f64>;

    fn size(&self) -> usize {
        self.basis_size
    }
    fn degree(&self) -> usize {
        self.basis_degree
    }
    fn size_for(degree: usize) -> usize {
        (degree + 1) * (degree + 1)
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Array1<f64> {
        let (fx, fy) = self.factors(pt);
        Array1::from_iter(fx.iter().zip(&fy).map(|(x, y)| x.0 * y.0))
    }
}

impl BasisGradients for QuadLagrangeBasis {
    type Gradient = Array2<f64>;

    fn eval_gradients(&self, pt: &Point2<f64>) -> Array2<f64> {
        let (fx, fy) = self.factors(pt);
        let mut ret = Array2::zeros((self.basis_size, 2));
        for (l, (x, y)) in fx.iter().zip(&fy).enumerate() {
            ret[(l, 0)] = x.1 * y.0;
            ret[(l, 1)] = x.0 * y.1;
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::basis::test_utils::fd_gradients;
    use crate::disc::mesh::mesh2d::{Mesh2d, Node};
    use approx::assert_relative_eq;

    #[test]
    fn test_nodes_on_unit_square() {
        let mesh = Mesh2d::create_rect_mesh(1, 1, 0.0, 1.0, 0.0, 1.0);
        let nodes = equidistributed_nodes(&mesh, &mesh.elements[0], 2).unwrap();
        let expected = [
            (0.0, 0.0),
            (1.0, 0.0),
            (0.5, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (0.5, 1.0),
            (0.0, 0.5),
            (1.0, 0.5),
            (0.5, 0.5),
        ];
        assert_eq!(nodes.len(), expected.len());
        for (n, (x, y)) in nodes.iter().zip(expected) {
            assert_relative_eq!(n.x, x);
            assert_relative_eq!(n.y, y);
        }
    }

    #[test]
    fn test_non_quadrilateral_rejected() {
        let mesh = Mesh2d::create_tri_mesh(1, 1, 0.0, 1.0, 0.0, 1.0);
        let err = QuadLagrangeBasis::new(&mesh, &mesh.elements[0], 2).unwrap_err();
        assert_eq!(err, EvalError::insufficient_points(4, 3));
    }

    #[test]
    fn test_kronecker_property() {
        let mesh = Mesh2d::create_rect_mesh(2, 1, -1.0, 3.0, 0.0, 1.5);
        for degree in 0..=6 {
            let qb = QuadLagrangeBasis::new(&mesh, &mesh.elements[1], degree).unwrap();
            assert_eq!(qb.size(), (degree + 1) * (degree + 1));
            for (j, node) in qb.nodes().iter().enumerate() {
                let phi = qb.eval_basis(node);
                for i in 0..qb.size() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(phi[i], expected, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_gradients_and_partition_of_unity() {
        let nodes = vec![
            Node { x: 0.5, y: -0.5 },
            Node { x: 2.0, y: -0.5 },
            Node { x: 2.0, y: 0.5 },
            Node { x: 0.5, y: 0.5 },
        ];
        let mesh = Mesh2d::from_polygons(nodes, vec![vec![0, 1, 2, 3]]);
        let pts = [Point2::new(0.7, 0.1), Point2::new(1.9, -0.3)];
        for degree in 1..=6 {
            let qb = QuadLagrangeBasis::new(&mesh, &mesh.elements[0], degree).unwrap();
            for pt in &pts {
                assert_relative_eq!(qb.eval_basis(pt).sum(), 1.0, epsilon = 1e-12);
                let grad = qb.eval_gradients(pt);
                let fd = fd_gradients(|p| qb.eval_basis(p), pt);
                for i in 0..qb.size() {
                    assert_relative_eq!(grad[(i, 0)], fd[(i, 0)], epsilon = 1e-6);
                    assert_relative_eq!(grad[(i, 1)], fd[(i, 1)], epsilon = 1e-6);
                }
            }
        }
    }
}
