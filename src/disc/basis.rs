//! Polynomial bases evaluated pointwise on mesh cells and faces.
//!
//! Every family is constructed once per `(entity, degree)` pair and then
//! queried at arbitrary points. The position of each function in the returned
//! arrays is fixed and documented per family.

pub mod dimension;
pub mod face;
pub mod lagrange1d;
pub mod lifting;
pub mod monomial;
pub mod quadrilateral;
pub mod triangle;

pub trait Basis {
    type Point;
    type Value;
    fn size(&self) -> usize;
    fn degree(&self) -> usize;
    /// Dimension of the family at `degree`; always equals `size()` of an
    /// instance built with that degree.
    fn size_for(degree: usize) -> usize
    where
        Self: Sized;
    fn eval_basis(&self, pt: &Self::Point) -> Self::Value;
}

pub trait BasisGradients: Basis {
    type Gradient;
    fn eval_gradients(&self, pt: &Self::Point) -> Self::Gradient;
}
