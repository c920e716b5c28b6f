use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use super::{LevelSetFunction, sech2};

fn default_gamma() -> f64 {
    1.0 / 16.0
}

/// `(x-α)² + (y-β)² - r²`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl LevelSetFunction for Circle {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        x * x + y * y - self.radius * self.radius
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        Vector2::new(2.0 * (pt.x - self.alpha), 2.0 * (pt.y - self.beta))
    }
}

/// Euclidean distance to the circle, regularized by `eps` under both roots.
/// With `eps = 0` this is the exact signed distance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CircleSignedDistance {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    #[serde(default)]
    pub eps: f64,
}

impl CircleSignedDistance {
    fn regularized_norm(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        (x * x + y * y + self.eps * self.eps).sqrt()
    }
}

impl LevelSetFunction for CircleSignedDistance {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        self.regularized_norm(pt) - (self.radius * self.radius + self.eps * self.eps).sqrt()
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let d = self.regularized_norm(pt);
        if d == 0.0 {
            return Vector2::zeros();
        }
        Vector2::new(pt.x - self.alpha, pt.y - self.beta) / d
    }
}

/// Smoothed indicator `0.5 (1 + tanh(φ / 2ε))` of the algebraic circle `φ`;
/// goes from 0 inside to 1 outside over a band of width `~ε`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CircleDiffuse {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    pub eps: f64,
}

impl CircleDiffuse {
    fn algebraic(&self) -> Circle {
        Circle {
            radius: self.radius,
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

impl LevelSetFunction for CircleDiffuse {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let val = self.algebraic().value(pt);
        0.5 * (1.0 + (val / (2.0 * self.eps)).tanh())
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let val = self.algebraic().value(pt);
        let factor = sech2(val / (2.0 * self.eps)) / (2.0 * self.eps);
        Vector2::new(pt.x - self.alpha, pt.y - self.beta) * factor
    }
}

/// `tanh((ρ - r) / γ)` with `ρ` the distance to the centre.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CircleTanh {
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

impl LevelSetFunction for CircleTanh {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let rho = (pt - Point2::new(self.alpha, self.beta)).norm();
        ((rho - self.radius) / self.gamma).tanh()
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let rel = pt - Point2::new(self.alpha, self.beta);
        let rho = rel.norm();
        if rho == 0.0 {
            return Vector2::zeros();
        }
        rel * (sech2((rho - self.radius) / self.gamma) / (self.gamma * rho))
    }
}
