use nalgebra::{Point2, Vector2};
use ndarray::Array1;
use tracing::{debug, warn};

use super::Basis;
use crate::disc::mesh::MeshGeometry;
use crate::error::{EvalError, EvalResult};

/// Highest degree with a closed-form orthonormal face polynomial.
pub const MAX_FACE_DEGREE: usize = 7;

/// Legendre polynomials on `[-1, 1]` scaled to unit L² norm, `sqrt((2k+1)/2) P_k`.
const ORTHONORMAL_LEGENDRE: [fn(f64) -> f64; MAX_FACE_DEGREE + 1] = [
    |_| (1.0_f64 / 2.0).sqrt(),
    |ep| ep * (3.0_f64 / 2.0).sqrt(),
    |ep| (3.0 * ep * ep - 1.0) * (5.0_f64 / 8.0).sqrt(),
    |ep| (5.0 * ep * ep * ep - 3.0 * ep) * (7.0_f64 / 8.0).sqrt(),
    |ep| {
        (35.0 * ep * ep * ep * ep - 30.0 * ep * ep + 3.0) * (9.0_f64 / 128.0).sqrt()
    },
    |ep| {
        (63.0 * ep * ep * ep * ep * ep - 70.0 * ep * ep * ep + 15.0 * ep)
            * (11.0_f64 / 128.0).sqrt()
    },
    |ep| {
        (231.0 * ep * ep * ep * ep * ep * ep - 315.0 * ep * ep * ep * ep + 105.0 * ep * ep - 5.0)
            * (13.0_f64 / 2.0).sqrt()
            / 16.0
    },
    |ep| {
        (429.0 * ep * ep * ep * ep * ep * ep * ep - 693.0 * ep * ep * ep * ep * ep
            + 315.0 * ep * ep * ep
            - 35.0 * ep)
            * (15.0_f64 / 2.0).sqrt()
            / 16.0
    },
];

/// L²-orthonormal polynomials of degree `<= 7` along a straight face.
#[derive(Clone, Debug)]
pub struct FaceBasis {
    face_bar: Point2<f64>,
    base: Vector2<f64>,
    face_h: f64,
    basis_degree: usize,
    basis_size: usize,
}

impl FaceBasis {
    pub fn new<M, F>(mesh: &M, face: &F, degree: usize) -> EvalResult<Self>
    where
        M: MeshGeometry<F>,
    {
        if degree > MAX_FACE_DEGREE {
            warn!(degree, "face basis degree out of range");
            return Err(EvalError::unsupported_degree(
                "face basis",
                degree,
                MAX_FACE_DEGREE,
            ));
        }
        let face_bar = mesh.barycenter(face);
        let face_h = mesh.diameter(face);
        if !(face_h > 0.0 && face_h.is_finite()) {
            warn!(face_h, "face basis on a degenerate face");
            return Err(EvalError::degenerate_face(face_h, face_bar.x, face_bar.y));
        }
        let pts = mesh.points(face);
        let first = pts
            .first()
            .ok_or(EvalError::insufficient_points(1, 0))?;
        debug!(degree, face_h, "face basis");
        Ok(Self {
            face_bar,
            base: face_bar - first,
            face_h,
            basis_degree: degree,
            basis_size: Self::size_for(degree),
        })
    }
    /// Local coordinate along the face, `-1` at the first corner and `1` at the last.
    pub fn local_coordinate(&self, pt: &Point2<f64>) -> f64 {
        let dot = self.base.dot(&(pt - self.face_bar));
        4.0 * dot / (self.face_h * self.face_h)
    }
}

impl Basis for FaceBasis {
    type Point = Point2<f64>;
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
    fn eval_basis(&self, pt: &Point2<f64>) -> Array1<f64> {
        let ep = self.local_coordinate(pt);
        let coeff = (self.face_h / 2.0).sqrt();
        Array1::from_iter(
            ORTHONORMAL_LEGENDRE[..self.basis_size]
                .iter()
                .map(|p| p(ep) / coeff),
        )
    }
}
