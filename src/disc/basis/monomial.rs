use nalgebra::Point2;
use ndarray::{Array1, Array2};
use tracing::debug;

use super::{Basis, BasisGradients};
use crate::disc::{mesh::MeshGeometry, power::PowerTable};

/// Scaled monomials of total degree `<= k` on a 2-D cell.
///
/// Coordinates are centred on the cell barycenter and scaled by half the
/// diameter. Functions are ordered by increasing total degree, then by
/// increasing power of `y`: `1, x, y, x², xy, y², …`.
#[derive(Clone, Debug)]
pub struct CellBasis {
    cell_bar: Point2<f64>,
    cell_h: f64,
    basis_degree: usize,
    basis_size: usize,
}

impl CellBasis {
    pub fn new<M, C>(mesh: &M, cell: &C, degree: usize) -> Self
    where
        M: MeshGeometry<C>,
    {
        Self::from_geometry(mesh.barycenter(cell), mesh.diameter(cell), degree)
    }
    pub fn from_geometry(cell_bar: Point2<f64>, cell_h: f64, degree: usize) -> Self {
        debug!(degree, cell_h, "cell basis");
        Self {
            cell_bar,
            cell_h,
            basis_degree: degree,
            basis_size: Self::size_for(degree),
        }
    }
    pub fn barycenter(&self) -> Point2<f64> {
        self.cell_bar
    }
    pub fn diameter(&self) -> f64 {
        self.cell_h
    }
    fn powers(&self, pt: &Point2<f64>) -> PowerTable {
        let bx = (pt.x - self.cell_bar.x) / (0.5 * self.cell_h);
        let by = (pt.y - self.cell_bar.y) / (0.5 * self.cell_h);
        PowerTable::new(bx, by, self.basis_degree)
    }
}

impl Basis for CellBasis {
    type Point = Point2<f64>;
    type Value = Array1<f64>;

    fn size(&self) -> usize {
        self.basis_size
    }
    fn degree(&self) -> usize {
        self.basis_degree
    }
    fn size_for(degree: usize) -> usize {
        (degree + 2) * (degree + 1) / 2
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Array1<f64> {
        let powers = self.powers(pt);
        let mut ret = Array1::zeros(self.basis_size);
        let mut pos = 0;
        for k in 0..=self.basis_degree {
            for i in 0..=k {
                ret[pos] = powers.x(k - i) * powers.y(i);
                pos += 1;
            }
        }
        debug_assert_eq!(pos, self.basis_size);
        ret
    }
}

impl BasisGradients for CellBasis {
    /// `(size, 2)`: row `i` holds `(∂x, ∂y)` of function `i`.
    type Gradient = Array2<f64>;

    fn eval_gradients(&self, pt: &Point2<f64>) -> Array2<f64> {
        let powers = self.powers(pt);
        let ih = 2.0 / self.cell_h;
        let mut ret = Array2::zeros((self.basis_size, 2));
        let mut pos = 0;
        for k in 0..=self.basis_degree {
            for i in 0..=k {
                let (pow_x, pow_y) = (k - i, i);
                ret[(pos, 0)] = ih * powers.dx(pow_x) * powers.y(pow_y);
                ret[(pos, 1)] = ih * powers.x(pow_x) * powers.dy(pow_y);
                pos += 1;
            }
        }
        debug_assert_eq!(pos, self.basis_size);
        ret
    }
}
