use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use super::LevelSetFunction;

/// Polar angle of `(x, y)` in `[-π/2, 3π/2)`, with the vertical axis split
/// explicitly so that `atan` is never evaluated at `y / 0`.
fn polar_angle(x: f64, y: f64) -> f64 {
    let theta = if x == 0.0 {
        if y < 0.0 { -PI / 2.0 } else { PI / 2.0 }
    } else {
        (y / x).atan()
    };
    if x < 0.0 { theta + PI } else { theta }
}

/// Circle of radius `r` with `n` petals of amplitude `a`:
/// `ρ² - r² - a cos(nθ)`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Flower {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    pub n: usize,
    pub a: f64,
}

impl LevelSetFunction for Flower {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        let theta = polar_angle(x, y);
        x * x + y * y - self.radius * self.radius - self.a * (self.n as f64 * theta).cos()
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        let rho2 = x * x + y * y;
        if rho2 == 0.0 {
            return Vector2::zeros();
        }
        let n = self.n as f64;
        let s = self.a * n * (n * polar_angle(x, y)).sin() / rho2;
        Vector2::new(2.0 * x - s * y, 2.0 * y + s * x)
    }
}

/// Radial distance to the flower boundary `ρ = sqrt(r² + a cos(nθ))`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FlowerSignedDistance {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    pub n: usize,
    pub a: f64,
}

impl FlowerSignedDistance {
    fn boundary_radius(&self, theta: f64) -> f64 {
        (self.radius * self.radius - self.a * (self.n as f64 * theta + PI).cos()).sqrt()
    }
}

impl LevelSetFunction for FlowerSignedDistance {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        (x * x + y * y).sqrt() - self.boundary_radius(polar_angle(x, y))
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        let rho2 = x * x + y * y;
        if rho2 == 0.0 {
            return Vector2::zeros();
        }
        let rho = rho2.sqrt();
        let theta = polar_angle(x, y);
        let n = self.n as f64;
        let s = self.a * n * (n * theta).sin() / (2.0 * self.boundary_radius(theta) * rho2);
        Vector2::new(x / rho - s * y, y / rho + s * x)
    }
}
