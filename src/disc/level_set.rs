//! Analytic level-set functions for embedded interfaces.
//!
//! Unless a variant says otherwise, the field is negative inside the domain
//! and positive outside. Every record implements [`LevelSetFunction`]; the
//! [`LevelSet`] enum closes over all of them and is what configuration files
//! deserialize into.

pub mod circle;
pub mod ellipse;
pub mod flower;
pub mod line;
pub mod polygonal;

use nalgebra::{Point2, Vector2};
use serde::Deserialize;
use tracing::warn;

use crate::error::{EvalError, EvalResult};
pub use circle::{Circle, CircleDiffuse, CircleSignedDistance, CircleTanh};
pub use ellipse::{Couette, Ellipse, EllipseDiffuse, EllipseSignedDistance, EllipseTanh};
pub use flower::{Flower, FlowerSignedDistance};
pub use line::Line;
pub use polygonal::{MShaped, RotatedSquare, Square};

pub trait LevelSetFunction {
    fn value(&self, pt: &Point2<f64>) -> f64;
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64>;
    /// Unit normal `gradient / |gradient|`; fails where the gradient vanishes.
    fn normal(&self, pt: &Point2<f64>) -> EvalResult<Vector2<f64>> {
        let grad = self.gradient(pt);
        let norm = grad.norm();
        if norm == 0.0 || !norm.is_finite() {
            warn!(x = pt.x, y = pt.y, "level set normal undefined");
            return Err(EvalError::degenerate_geometry(pt.x, pt.y));
        }
        Ok(grad / norm)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelSet {
    Circle(Circle),
    CircleSignedDistance(CircleSignedDistance),
    CircleDiffuse(CircleDiffuse),
    CircleTanh(CircleTanh),
    Ellipse(Ellipse),
    EllipseSignedDistance(EllipseSignedDistance),
    EllipseDiffuse(EllipseDiffuse),
    EllipseTanh(EllipseTanh),
    Couette(Couette),
    Line(Line),
    Square(Square),
    RotatedSquare(RotatedSquare),
    MShaped(MShaped),
    Flower(Flower),
    FlowerSignedDistance(FlowerSignedDistance),
}

macro_rules! dispatch {
    ($self:expr, $ls:ident => $call:expr) => {
        match $self {
            LevelSet::Circle($ls) => $call,
            LevelSet::CircleSignedDistance($ls) => $call,
            LevelSet::CircleDiffuse($ls) => $call,
            LevelSet::CircleTanh($ls) => $call,
            LevelSet::Ellipse($ls) => $call,
            LevelSet::EllipseSignedDistance($ls) => $call,
            LevelSet::EllipseDiffuse($ls) => $call,
            LevelSet::EllipseTanh($ls) => $call,
            LevelSet::Couette($ls) => $call,
            LevelSet::Line($ls) => $call,
            LevelSet::Square($ls) => $call,
            LevelSet::RotatedSquare($ls) => $call,
            LevelSet::MShaped($ls) => $call,
            LevelSet::Flower($ls) => $call,
            LevelSet::FlowerSignedDistance($ls) => $call,
        }
    };
}

impl LevelSetFunction for LevelSet {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        dispatch!(self, ls => ls.value(pt))
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        dispatch!(self, ls => ls.gradient(pt))
    }
}

/// `1 / cosh²(t)`, zero once `cosh` overflows.
pub(crate) fn sech2(t: f64) -> f64 {
    let c = t.cosh();
    1.0 / (c * c)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deserialize_tagged_variants() {
        let ls: LevelSet =
            serde_json::from_str(r#"{"kind": "circle", "radius": 0.3, "alpha": 0.5, "beta": 0.5}"#)
                .unwrap();
        assert_eq!(
            ls,
            LevelSet::Circle(Circle {
                radius: 0.3,
                alpha: 0.5,
                beta: 0.5
            })
        );
        let ls: LevelSet =
            serde_json::from_str(r#"{"kind": "m_shaped", "eps": 0.05, "pos_sides": 0.2}"#).unwrap();
        assert_eq!(
            ls,
            LevelSet::MShaped(MShaped {
                eps: 0.05,
                eps_bndry: 1e-10,
                pos_sides: 0.2
            })
        );
        let ls: LevelSet = serde_json::from_str(
            r#"{"kind": "flower_signed_distance", "radius": 0.3,
                "alpha": 0.5, "beta": 0.5, "n": 8, "a": 0.04}"#,
        )
        .unwrap();
        assert!(matches!(ls, LevelSet::FlowerSignedDistance(f) if f.n == 8));
        let err = serde_json::from_str::<LevelSet>(r#"{"kind": "torus", "radius": 1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_enum_dispatch_matches_record() {
        let record = Ellipse {
            radius_a: 0.4,
            radius_b: 0.2,
            alpha: 0.5,
            beta: 0.5,
        };
        let ls = LevelSet::Ellipse(record.clone());
        let pt = Point2::new(0.71, 0.33);
        assert_eq!(ls.value(&pt), record.value(&pt));
        assert_eq!(ls.gradient(&pt), record.gradient(&pt));
        assert_eq!(ls.normal(&pt), record.normal(&pt));
    }

    #[test]
    fn test_normal_is_unit() {
        let ls = LevelSet::Flower(Flower {
            radius: 0.31,
            alpha: 0.5,
            beta: 0.5,
            n: 8,
            a: 0.04,
        });
        for pt in [Point2::new(0.8, 0.5), Point2::new(0.3, 0.9), Point2::new(0.5, 0.1)] {
            assert_relative_eq!(ls.normal(&pt).unwrap().norm(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_degenerate_normal_reported() {
        let ls = LevelSet::Circle(Circle {
            radius: 1.0,
            alpha: 0.25,
            beta: -0.5,
        });
        assert_eq!(
            ls.normal(&Point2::new(0.25, -0.5)),
            Err(EvalError::degenerate_geometry(0.25, -0.5))
        );
    }

    #[test]
    fn test_concurrent_evaluation() {
        let level_sets = vec![
            LevelSet::Circle(Circle {
                radius: 0.3,
                alpha: 0.5,
                beta: 0.5,
            }),
            LevelSet::RotatedSquare(RotatedSquare {
                xc: 0.5,
                yc: 0.5,
                r: 0.35,
            }),
            LevelSet::EllipseTanh(EllipseTanh {
                radius_a: 0.4,
                radius_b: 0.25,
                alpha: 0.5,
                beta: 0.5,
                gamma: 1.0 / 16.0,
            }),
        ];
        let pts: Vec<Point2<f64>> = (0..64)
            .map(|i| Point2::new(i as f64 / 63.0, 1.0 - i as f64 / 127.0))
            .collect();
        let serial: Vec<Vec<f64>> = level_sets
            .iter()
            .map(|ls| pts.iter().map(|p| ls.value(p)).collect())
            .collect();
        let parallel: Vec<Vec<f64>> = std::thread::scope(|s| {
            let handles: Vec<_> = level_sets
                .iter()
                .map(|ls| {
                    let pts = &pts;
                    s.spawn(move || pts.iter().map(|p| ls.value(p)).collect::<Vec<f64>>())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(serial, parallel);
    }
}
