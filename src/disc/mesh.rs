use nalgebra::Point2;

pub mod mesh2d;

/// Geometric queries a mesh answers for one of its entities (cell or face).
///
/// Bases only read these quantities at construction time.
pub trait MeshGeometry<E> {
    fn barycenter(&self, entity: &E) -> Point2<f64>;
    fn diameter(&self, entity: &E) -> f64;
    /// Corner points in the entity's own orientation; the first one anchors
    /// the local direction of face bases.
    fn points(&self, entity: &E) -> Vec<Point2<f64>>;
}
