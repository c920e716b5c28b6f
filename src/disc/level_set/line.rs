use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use super::LevelSetFunction;

/// Horizontal interface `y = cut_y`, negative below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Line {
    pub cut_y: f64,
}

impl LevelSetFunction for Line {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        pt.y - self.cut_y
    }
    fn gradient(&self, _pt: &Point2<f64>) -> Vector2<f64> {
        Vector2::new(0.0, 1.0)
    }
}
