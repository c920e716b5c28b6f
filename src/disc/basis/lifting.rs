//! Component-wise liftings of a scalar basis to vector and 2×2 matrix spaces.
//!
//! Scalar function `i` of the wrapped basis is placed in each admissible
//! component in turn, so every lifted function has exactly one scalar factor.

use nalgebra::{Matrix2, Point2, Vector2};
use ndarray::{Array1, Array2};

use super::{Basis, BasisGradients, face::FaceBasis, monomial::CellBasis};
use crate::disc::mesh::MeshGeometry;
use crate::error::EvalResult;

/// `2S` functions: `2i` is `(φ_i, 0)`, `2i + 1` is `(0, φ_i)`.
#[derive(Clone, Debug)]
pub struct VectorBasis<B> {
    scalar_basis: B,
}

pub type VectorCellBasis = VectorBasis<CellBasis>;
pub type VectorFaceBasis = VectorBasis<FaceBasis>;

impl<B> VectorBasis<B> {
    pub fn new(scalar_basis: B) -> Self {
        Self { scalar_basis }
    }
    pub fn scalar_basis(&self) -> &B {
        &self.scalar_basis
    }
}

impl VectorBasis<CellBasis> {
    pub fn from_mesh<M, C>(mesh: &M, cell: &C, degree: usize) -> Self
    where
        M: MeshGeometry<C>,
    {
        Self::new(CellBasis::new(mesh, cell, degree))
    }
}

impl VectorBasis<FaceBasis> {
    pub fn from_mesh<M, F>(mesh: &M, face: &F, degree: usize) -> EvalResult<Self>
    where
        M: MeshGeometry<F>,
    {
        Ok(Self::new(FaceBasis::new(mesh, face, degree)?))
    }
}

impl<B> Basis for VectorBasis<B>
where
    B: Basis<Point = Point2<f64>, Value = Array1<f64>>,
{
    type Point = Point2<f64>;
    type Value = Vec<Vector2<f64>>;

    fn size(&self) -> usize {
        2 * self.scalar_basis.size()
    }
    fn degree(&self) -> usize {
        self.scalar_basis.degree()
    }
    fn size_for(degree: usize) -> usize {
        2 * B::size_for(degree)
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Vec<Vector2<f64>> {
        let phi = self.scalar_basis.eval_basis(pt);
        let mut ret = Vec::with_capacity(self.size());
        for &p in phi.iter() {
            ret.push(Vector2::new(p, 0.0));
            ret.push(Vector2::new(0.0, p));
        }
        debug_assert_eq!(ret.len(), self.size());
        ret
    }
}

impl<B> BasisGradients for VectorBasis<B>
where
    B: BasisGradients<Point = Point2<f64>, Value = Array1<f64>, Gradient = Array2<f64>>,
{
    /// Jacobian of each vector function; row `r` is the gradient of component `r`.
    type Gradient = Vec<Matrix2<f64>>;

    fn eval_gradients(&self, pt: &Point2<f64>) -> Vec<Matrix2<f64>> {
        let dphi = self.scalar_basis.eval_gradients(pt);
        let mut ret = Vec::with_capacity(self.size());
        for row in dphi.rows() {
            let (dx, dy) = (row[0], row[1]);
            ret.push(Matrix2::new(dx, dy, 0.0, 0.0));
            ret.push(Matrix2::new(0.0, 0.0, dx, dy));
        }
        debug_assert_eq!(ret.len(), self.size());
        ret
    }
}

/// `4S` functions; scalar function `k` fills `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)` in turn.
#[derive(Clone, Debug)]
pub struct MatrixCellBasis {
    scalar_basis: CellBasis,
}

impl MatrixCellBasis {
    pub fn new(scalar_basis: CellBasis) -> Self {
        Self { scalar_basis }
    }
    pub fn from_mesh<M, C>(mesh: &M, cell: &C, degree: usize) -> Self
    where
        M: MeshGeometry<C>,
    {
        Self::new(CellBasis::new(mesh, cell, degree))
    }
}

impl Basis for MatrixCellBasis {
    type Point = Point2<f64>;
    type Value = Vec<Matrix2<f64>>;

    fn size(&self) -> usize {
        4 * self.scalar_basis.size()
    }
    fn degree(&self) -> usize {
        self.scalar_basis.degree()
    }
    fn size_for(degree: usize) -> usize {
        4 * CellBasis::size_for(degree)
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Vec<Matrix2<f64>> {
        let phi = self.scalar_basis.eval_basis(pt);
        let mut ret = Vec::with_capacity(self.size());
        for &p in phi.iter() {
            for j in 0..2 {
                for i in 0..2 {
                    let mut fc = Matrix2::zeros();
                    fc[(i, j)] = p;
                    ret.push(fc);
                }
            }
        }
        debug_assert_eq!(ret.len(), self.size());
        ret
    }
}

/// `3S` symmetric functions; scalar function `k` fills the `(0,0)` entry, both
/// off-diagonal entries, then the `(1,1)` entry.
#[derive(Clone, Debug)]
pub struct SymMatrixCellBasis {
    scalar_basis: CellBasis,
}

impl SymMatrixCellBasis {
    pub fn new(scalar_basis: CellBasis) -> Self {
        Self { scalar_basis }
    }
    pub fn from_mesh<M, C>(mesh: &M, cell: &C, degree: usize) -> Self
    where
        M: MeshGeometry<C>,
    {
        Self::new(CellBasis::new(mesh, cell, degree))
    }
}

impl Basis for SymMatrixCellBasis {
    type Point = Point2<f64>;
    type Value = Vec<Matrix2<f64>>;

    fn size(&self) -> usize {
        3 * self.scalar_basis.size()
    }
    fn degree(&self) -> usize {
        self.scalar_basis.degree()
    }
    fn size_for(degree: usize) -> usize {
        3 * CellBasis::size_for(degree)
    }
    fn eval_basis(&self, pt: &Point2<f64>) -> Vec<Matrix2<f64>> {
        let phi = self.scalar_basis.eval_basis(pt);
        let mut ret = Vec::with_capacity(self.size());
        for &p in phi.iter() {
            ret.push(Matrix2::new(p, 0.0, 0.0, 0.0));
            ret.push(Matrix2::new(0.0, p, p, 0.0));
            ret.push(Matrix2::new(0.0, 0.0, 0.0, p));
        }
        debug_assert_eq!(ret.len(), self.size());
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::mesh::mesh2d::Mesh2d;
    use crate::error::EvalError;
    use approx::assert_relative_eq;

    fn unit_cell_basis(degree: usize) -> (Mesh2d, CellBasis) {
        let mesh = Mesh2d::create_rect_mesh(2, 2, 0.0, 1.0, 0.0, 1.0);
        let cb = CellBasis::new(&mesh, &mesh.elements[3], degree);
        (mesh, cb)
    }

    #[test]
    fn test_vector_cell_interleaving() {
        let (_, cb) = unit_cell_basis(2);
        let vb = VectorCellBasis::new(cb.clone());
        assert_eq!(vb.size(), 12);
        assert_eq!(VectorCellBasis::size_for(2), 12);
        let pt = Point2::new(0.8, 0.6);
        let phi = cb.eval_basis(&pt);
        let vphi = vb.eval_basis(&pt);
        assert_eq!(vphi.len(), vb.size());
        for i in 0..cb.size() {
            assert_eq!(vphi[2 * i], Vector2::new(phi[i], 0.0));
            assert_eq!(vphi[2 * i + 1], Vector2::new(0.0, phi[i]));
        }
    }

    #[test]
    fn test_vector_cell_gradients_fill_one_row() {
        let (_, cb) = unit_cell_basis(3);
        let vb = VectorCellBasis::new(cb.clone());
        let pt = Point2::new(0.55, 0.95);
        let dphi = cb.eval_gradients(&pt);
        let vdphi = vb.eval_gradients(&pt);
        assert_eq!(vdphi.len(), vb.size());
        for i in 0..cb.size() {
            let g0 = vdphi[2 * i];
            let g1 = vdphi[2 * i + 1];
            assert_eq!(g0[(0, 0)], dphi[(i, 0)]);
            assert_eq!(g0[(0, 1)], dphi[(i, 1)]);
            assert_eq!(g0.row(1).norm(), 0.0);
            assert_eq!(g1[(1, 0)], dphi[(i, 0)]);
            assert_eq!(g1[(1, 1)], dphi[(i, 1)]);
            assert_eq!(g1.row(0).norm(), 0.0);
        }
    }

    #[test]
    fn test_vector_face_interleaving() {
        let (mesh, _) = unit_cell_basis(0);
        let face = &mesh.edges[mesh.elements[3].iedges[1]];
        let fb = FaceBasis::new(&mesh, face, 3).unwrap();
        let vb = VectorFaceBasis::new(fb.clone());
        assert_eq!(vb.size(), 8);
        assert_eq!(vb.degree(), 3);
        let pt = mesh.barycenter(face);
        let psi = fb.eval_basis(&pt);
        let vpsi = vb.eval_basis(&pt);
        for i in 0..fb.size() {
            assert_eq!(vpsi[2 * i].x, psi[i]);
            assert_eq!(vpsi[2 * i].y, 0.0);
            assert_eq!(vpsi[2 * i + 1].x, 0.0);
            assert_eq!(vpsi[2 * i + 1].y, psi[i]);
        }
    }

    #[test]
    fn test_built_from_mesh_entities() {
        let (mesh, cb) = unit_cell_basis(2);
        let cell = &mesh.elements[3];
        let pt = Point2::new(0.8, 0.6);
        let phi = cb.eval_basis(&pt);

        let vb = VectorCellBasis::from_mesh(&mesh, cell, 2);
        assert_eq!(vb.size(), 12);
        assert_eq!(vb.eval_basis(&pt), VectorCellBasis::new(cb.clone()).eval_basis(&pt));
        let mb = MatrixCellBasis::from_mesh(&mesh, cell, 2);
        assert_eq!(mb.size(), 24);
        assert_eq!(mb.eval_basis(&pt)[4][(0, 0)], phi[1]);
        let sb = SymMatrixCellBasis::from_mesh(&mesh, cell, 2);
        assert_eq!(sb.size(), 18);
        assert_eq!(sb.eval_basis(&pt)[3 * 2 + 1][(1, 0)], phi[2]);

        let face = &mesh.edges[cell.iedges[0]];
        let vfb = VectorFaceBasis::from_mesh(&mesh, face, 3).unwrap();
        assert_eq!(vfb.size(), 8);
        assert_eq!(vfb.degree(), 3);
        assert!(matches!(
            VectorFaceBasis::from_mesh(&mesh, face, 8),
            Err(EvalError::UnsupportedDegree { degree: 8, .. })
        ));
    }

    #[test]
    fn test_matrix_component_order() {
        let (_, cb) = unit_cell_basis(2);
        let mb = MatrixCellBasis::new(cb.clone());
        assert_eq!(mb.size(), 24);
        assert_eq!(MatrixCellBasis::size_for(2), 24);
        let pt = Point2::new(0.7, 0.9);
        let phi = cb.eval_basis(&pt);
        let mphi = mb.eval_basis(&pt);
        let slots = [(0, 0), (1, 0), (0, 1), (1, 1)];
        for k in 0..cb.size() {
            for (n, &(r, c)) in slots.iter().enumerate() {
                let m = mphi[4 * k + n];
                assert_eq!(m[(r, c)], phi[k]);
                assert_relative_eq!(m.abs().sum(), phi[k].abs());
            }
        }
    }

    #[test]
    fn test_matrix_first_component_reproduces_scalar_basis() {
        let (_, cb) = unit_cell_basis(4);
        let mb = MatrixCellBasis::new(cb.clone());
        let pt = Point2::new(0.61, 0.52);
        let phi = cb.eval_basis(&pt);
        let extracted: Vec<f64> = mb.eval_basis(&pt).iter().step_by(4).map(|m| m[(0, 0)]).collect();
        assert_eq!(extracted, phi.to_vec());
    }

    #[test]
    fn test_sym_matrix_component_order() {
        let (_, cb) = unit_cell_basis(1);
        let sb = SymMatrixCellBasis::new(cb.clone());
        assert_eq!(sb.size(), 9);
        assert_eq!(SymMatrixCellBasis::size_for(3), 30);
        let pt = Point2::new(0.9, 0.6);
        let phi = cb.eval_basis(&pt);
        let sphi = sb.eval_basis(&pt);
        assert_eq!(sphi.len(), sb.size());
        for k in 0..cb.size() {
            assert_eq!(sphi[3 * k], Matrix2::new(phi[k], 0.0, 0.0, 0.0));
            assert_eq!(sphi[3 * k + 1], Matrix2::new(0.0, phi[k], phi[k], 0.0));
            assert_eq!(sphi[3 * k + 2], Matrix2::new(0.0, 0.0, 0.0, phi[k]));
            for m in &sphi[3 * k..3 * k + 3] {
                assert_eq!(*m, m.transpose());
            }
        }
    }
}
