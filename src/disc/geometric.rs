use nalgebra::{Point2, Vector2};

pub trait Geometric2D {
    /// Vertex average of the corner points.
    fn compute_barycenter(x: &[f64], y: &[f64]) -> Point2<f64> {
        let n = x.len() as f64;
        Point2::new(x.iter().sum::<f64>() / n, y.iter().sum::<f64>() / n)
    }
    /// Largest distance between two corner points.
    fn compute_diameter(x: &[f64], y: &[f64]) -> f64 {
        let mut diameter: f64 = 0.0;
        for i in 0..x.len() {
            for j in i + 1..x.len() {
                let d = Vector2::new(x[j] - x[i], y[j] - y[i]).norm();
                diameter = diameter.max(d);
            }
        }
        diameter
    }
    fn compute_element_area(x: &[f64], y: &[f64]) -> f64 {
        // shoelace formula, corners in either orientation
        let n = x.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            twice_area += x[i] * y[j] - x[j] * y[i];
        }
        0.5 * twice_area.abs()
    }
}
