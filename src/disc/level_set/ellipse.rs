use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use super::{LevelSetFunction, sech2};

fn default_gamma() -> f64 {
    1.0 / 16.0
}

/// `(x-α)²/a² + (y-β)²/b² - 1`, shared by the smoothed variants.
fn normalized_quadric(
    a: f64,
    b: f64,
    alpha: f64,
    beta: f64,
    pt: &Point2<f64>,
) -> (f64, Vector2<f64>) {
    let (x, y) = (pt.x - alpha, pt.y - beta);
    let q = x * x / (a * a) + y * y / (b * b) - 1.0;
    (q, Vector2::new(2.0 * x / (a * a), 2.0 * y / (b * b)))
}

/// `b²(x-α)² + a²(y-β)² - a²b²`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ellipse {
    pub radius_a: f64,
    pub radius_b: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl LevelSetFunction for Ellipse {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (a2, b2) = (self.radius_a * self.radius_a, self.radius_b * self.radius_b);
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        b2 * x * x + a2 * y * y - a2 * b2
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (a2, b2) = (self.radius_a * self.radius_a, self.radius_b * self.radius_b);
        Vector2::new(2.0 * b2 * (pt.x - self.alpha), 2.0 * a2 * (pt.y - self.beta))
    }
}

/// `sqrt(b²(x-α)² + a²(y-β)²) - ab`. Zero on the ellipse and monotone
/// along rays from the centre, but not a true Euclidean distance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EllipseSignedDistance {
    pub radius_a: f64,
    pub radius_b: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl EllipseSignedDistance {
    fn root(&self, pt: &Point2<f64>) -> f64 {
        let (a2, b2) = (self.radius_a * self.radius_a, self.radius_b * self.radius_b);
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        (b2 * x * x + a2 * y * y).sqrt()
    }
}

impl LevelSetFunction for EllipseSignedDistance {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (a2, b2) = (self.radius_a * self.radius_a, self.radius_b * self.radius_b);
        self.root(pt) - (a2 * b2).sqrt()
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let root = self.root(pt);
        if root == 0.0 {
            return Vector2::zeros();
        }
        let (a2, b2) = (self.radius_a * self.radius_a, self.radius_b * self.radius_b);
        Vector2::new(b2 * (pt.x - self.alpha), a2 * (pt.y - self.beta)) / root
    }
}

/// Logistic profile `1 / (1 + exp(q / ε))` of the normalized quadric `q`:
/// 1 inside, 0 outside, one half on the ellipse.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EllipseDiffuse {
    pub radius_a: f64,
    pub radius_b: f64,
    pub alpha: f64,
    pub beta: f64,
    pub eps: f64,
}

impl EllipseDiffuse {
    fn logistic(&self, pt: &Point2<f64>) -> (f64, Vector2<f64>) {
        let (q, dq) = normalized_quadric(self.radius_a, self.radius_b, self.alpha, self.beta, pt);
        (1.0 / (1.0 + (q / self.eps).exp()), dq)
    }
}

impl LevelSetFunction for EllipseDiffuse {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        self.logistic(pt).0
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (s, dq) = self.logistic(pt);
        dq * (-s * (1.0 - s) / self.eps)
    }
}

/// `tanh(q / γ)` of the normalized quadric `q`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EllipseTanh {
    pub radius_a: f64,
    pub radius_b: f64,
    pub alpha: f64,
    pub beta: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

impl LevelSetFunction for EllipseTanh {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (q, _) = normalized_quadric(self.radius_a, self.radius_b, self.alpha, self.beta, pt);
        (q / self.gamma).tanh()
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (q, dq) = normalized_quadric(self.radius_a, self.radius_b, self.alpha, self.beta, pt);
        dq * (sech2(q / self.gamma) / self.gamma)
    }
}

/// Two concentric circles for Taylor-Couette flow: inner radius `a`, outer
/// radius `b`, switching at `x² + y² = 1/4`. The inner branch is negated, so
/// the fluid annulus between the circles is the negative region.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Couette {
    pub radius_a: f64,
    pub radius_b: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl Couette {
    fn on_inner_branch(pt: &Point2<f64>) -> bool {
        pt.x * pt.x + pt.y * pt.y < 0.25
    }
}

impl LevelSetFunction for Couette {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x - self.alpha, pt.y - self.beta);
        if Self::on_inner_branch(pt) {
            let a2 = self.radius_a * self.radius_a;
            -(a2 * x * x + a2 * y * y - a2 * a2)
        } else {
            let b2 = self.radius_b * self.radius_b;
            b2 * x * x + b2 * y * y - b2 * b2
        }
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let r = if Self::on_inner_branch(pt) {
            self.radius_a
        } else {
            self.radius_b
        };
        Vector2::new(pt.x - self.alpha, pt.y - self.beta) * (2.0 * r * r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::level_set::test_utils::assert_gradient_matches_fd;
    use approx::assert_relative_eq;

    fn sample_points() -> [Point2<f64>; 4] {
        [
            Point2::new(0.83, 0.52),
            Point2::new(0.2, 0.61),
            Point2::new(0.45, 0.38),
            Point2::new(0.5, 0.66),
        ]
    }

    #[test]
    fn test_ellipse_axes() {
        let ls = Ellipse {
            radius_a: 0.4,
            radius_b: 0.2,
            alpha: 0.5,
            beta: 0.5,
        };
        assert_relative_eq!(ls.value(&Point2::new(0.9, 0.5)), 0.0, epsilon = 1e-15);
        assert_relative_eq!(ls.value(&Point2::new(0.5, 0.7)), 0.0, epsilon = 1e-15);
        assert!(ls.value(&Point2::new(0.5, 0.5)) < 0.0);
        let n = ls.normal(&Point2::new(0.5, 0.3)).unwrap();
        assert_relative_eq!(n.y, -1.0);
        assert_gradient_matches_fd(&ls, &sample_points());
    }

    #[test]
    fn test_signed_distance_normals_match_algebraic() {
        let (a, b) = (0.4, 0.2);
        let sd = EllipseSignedDistance {
            radius_a: a,
            radius_b: b,
            alpha: 0.5,
            beta: 0.5,
        };
        let alg = Ellipse {
            radius_a: a,
            radius_b: b,
            alpha: 0.5,
            beta: 0.5,
        };
        assert_relative_eq!(sd.value(&Point2::new(0.1, 0.5)), 0.0, epsilon = 1e-15);
        for pt in sample_points() {
            let n_sd = sd.normal(&pt).unwrap();
            let n_alg = alg.normal(&pt).unwrap();
            assert_relative_eq!(n_sd.x, n_alg.x, epsilon = 1e-14);
            assert_relative_eq!(n_sd.y, n_alg.y, epsilon = 1e-14);
        }
        assert_eq!(sd.gradient(&Point2::new(0.5, 0.5)), Vector2::zeros());
        assert_gradient_matches_fd(&sd, &sample_points());
    }

    #[test]
    fn test_logistic_ellipse() {
        let ls = EllipseDiffuse {
            radius_a: 0.4,
            radius_b: 0.2,
            alpha: 0.5,
            beta: 0.5,
            eps: 0.1,
        };
        assert_relative_eq!(ls.value(&Point2::new(0.9, 0.5)), 0.5, epsilon = 1e-15);
        assert!(ls.value(&Point2::new(0.5, 0.5)) > 0.5);
        assert!(ls.value(&Point2::new(0.0, 0.0)) < 0.5);
        // decreasing outwards
        let n = ls.normal(&Point2::new(0.9, 0.5)).unwrap();
        assert_relative_eq!(n.x, -1.0);
        assert_gradient_matches_fd(&ls, &sample_points());
    }

    #[test]
    fn test_tanh_ellipse() {
        let ls = EllipseTanh {
            radius_a: 0.4,
            radius_b: 0.25,
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
        };
        assert_relative_eq!(ls.value(&Point2::new(0.5, 0.75)), 0.0, epsilon = 1e-15);
        assert_relative_eq!(ls.value(&Point2::new(0.5, 0.5)), (-2.0_f64).tanh());
        assert_gradient_matches_fd(&ls, &sample_points());
    }

    #[test]
    fn test_couette_branches() {
        let ls = Couette {
            radius_a: 0.25,
            radius_b: 0.75,
            alpha: 0.0,
            beta: 0.0,
        };
        // inner branch flips sign
        assert!(ls.value(&Point2::new(0.1, 0.0)) > 0.0);
        assert!(ls.value(&Point2::new(0.3, 0.0)) < 0.0);
        assert!(ls.value(&Point2::new(0.9, 0.0)) > 0.0);
        assert_relative_eq!(ls.value(&Point2::new(0.75, 0.0)), 0.0, epsilon = 1e-15);
        let g = ls.gradient(&Point2::new(0.2, 0.1));
        assert_relative_eq!(g.x, 2.0 * 0.0625 * 0.2);
        assert_relative_eq!(g.y, 2.0 * 0.0625 * 0.1);
        let g = ls.gradient(&Point2::new(0.6, 0.0));
        assert_relative_eq!(g.x, 2.0 * 0.5625 * 0.6);
    }
}
