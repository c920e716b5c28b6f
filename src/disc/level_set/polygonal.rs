//! Piecewise-linear domains. The value is `-in * (distance to the nearest
//! bounding coordinate line)` with `in = 1` strictly inside and `-1`
//! elsewhere; the gradient is the outward unit direction of whichever edge a
//! nearest-edge search picks. Edges are searched in a fixed order and an
//! edge only replaces the current one if it is strictly closer.

use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use super::LevelSetFunction;

fn default_eps_bndry() -> f64 {
    1e-10
}

/// Slope and intercept of the line through `p` and `q`.
fn line_through(p: (f64, f64), q: (f64, f64)) -> (f64, f64) {
    let m = (q.1 - p.1) / (q.0 - p.0);
    (m, q.1 - m * q.0)
}

/// Index of the first strictly smallest distance.
fn nearest(dists: &[f64]) -> usize {
    let mut best = 0;
    for (i, &d) in dists.iter().enumerate().skip(1) {
        if d < dists[best] {
            best = i;
        }
    }
    best
}

/// Axis-aligned rectangle `[x_left, x_right] × [y_bot, y_top]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Square {
    pub y_top: f64,
    pub y_bot: f64,
    pub x_left: f64,
    pub x_right: f64,
}

impl LevelSetFunction for Square {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x, pt.y);
        let inside = x > self.x_left && x < self.x_right && y > self.y_bot && y < self.y_top;
        let sign = if inside { 1.0 } else { -1.0 };
        let dist_x = (x - self.x_left).abs().min((x - self.x_right).abs());
        let dist_y = (y - self.y_bot).abs().min((y - self.y_top).abs());
        -sign * dist_x.min(dist_y)
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (x, y) = (pt.x, pt.y);
        let dists = [
            (x - self.x_left).abs(),
            (x - self.x_right).abs(),
            (y - self.y_bot).abs(),
            (y - self.y_top).abs(),
        ];
        match nearest(&dists) {
            0 => Vector2::new(-1.0, 0.0),
            1 => Vector2::new(1.0, 0.0),
            2 => Vector2::new(0.0, -1.0),
            _ => Vector2::new(0.0, 1.0),
        }
    }
}

/// Square rotated by 45°, centred at `(xc, yc)` with vertices at distance `r`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RotatedSquare {
    pub xc: f64,
    pub yc: f64,
    pub r: f64,
}

impl RotatedSquare {
    /// Bottom, right, top and left vertices.
    fn vertices(&self) -> [(f64, f64); 4] {
        [
            (self.xc, self.yc - self.r),
            (self.xc + self.r, self.yc),
            (self.xc, self.yc + self.r),
            (self.xc - self.r, self.yc),
        ]
    }
    /// Edge lines bottom→right, right→top, top→left, left→bottom.
    fn edges(&self) -> [(f64, f64); 4] {
        let [a, b, c, d] = self.vertices();
        [
            line_through(a, b),
            line_through(b, c),
            line_through(c, d),
            line_through(d, a),
        ]
    }
}

impl LevelSetFunction for RotatedSquare {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x, pt.y);
        let (xc, yc) = (self.xc, self.yc);
        let [a, b, c, d] = self.vertices();
        let lines = self.edges();
        let y_on = |i: usize| lines[i].0 * x + lines[i].1;
        let inside = (x >= xc && y <= yc && y > y_on(0))
            || (x >= xc && y >= yc && y < y_on(1))
            || (x <= xc && y >= yc && y < y_on(2))
            || (x <= xc && y <= yc && y > y_on(3));
        let sign = if inside { 1.0 } else { -1.0 };
        let dist_x = (x - b.0).abs().min((x - d.0).abs());
        let dist_y = (y - a.1).abs().min((y - c.1).abs());
        -sign * dist_x.min(dist_y)
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let lines = self.edges();
        let dists = lines.map(|(m, c)| (pt.y - (m * pt.x + c)).abs());
        let dir = match nearest(&dists) {
            0 => Vector2::new(0.5, -0.5),
            1 => Vector2::new(0.5, 0.5),
            2 => Vector2::new(-0.5, 0.5),
            _ => Vector2::new(-0.5, -0.5),
        };
        dir.normalize()
    }
}

/// Unit square with a V-shaped notch cut from the top: an "M".
///
/// Side walls sit at `pos_sides` from the square's edges, the notch bottom
/// at `y = 0.75 + eps`, and the shoulders at `y = 1 - eps_bndry`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MShaped {
    pub eps: f64,
    #[serde(default = "default_eps_bndry")]
    pub eps_bndry: f64,
    pub pos_sides: f64,
}

/// Corner coordinates of an [`MShaped`] domain.
struct MCorners {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl MShaped {
    const GRAD_TOL: f64 = 1e-8;

    fn corners(&self) -> MCorners {
        MCorners {
            a: self.pos_sides + self.eps_bndry,
            b: 1.0 - self.pos_sides - self.eps_bndry,
            c: 0.75 + self.eps,
            d: 1.0 - self.eps_bndry,
        }
    }
    /// Slopes of the left and right notch edges.
    fn notch_slopes(k: &MCorners) -> (f64, f64) {
        ((k.c - k.d) / (0.5 - k.a), (k.c - k.d) / (0.5 - k.b))
    }
    /// Direction normal to a notch edge of slope `m`, or straight up when the
    /// notch has collapsed to a flat top.
    fn notch_normal(x: f64, m: f64) -> Vector2<f64> {
        let ret = Vector2::new(x, (-1.0 / m) * x);
        if ret.y.abs() > 10.0 {
            Vector2::new(0.0, 1.0)
        } else {
            ret.normalize()
        }
    }
}

impl LevelSetFunction for MShaped {
    fn value(&self, pt: &Point2<f64>) -> f64 {
        let (x, y) = (pt.x, pt.y);
        let k = self.corners();
        let (m1, m2) = Self::notch_slopes(&k);
        let y1 = m1 * x + (k.c - m1 * 0.5);
        let y2 = m2 * x + (k.c - m2 * 0.5);
        let under_left_shoulder = y > k.c && x <= 0.5 && y < y1;
        let under_right_shoulder = y > k.c && x >= 0.5 && y < y2;
        let inside = y > k.a
            && x > k.a
            && x < k.b
            && (y < k.c || under_left_shoulder || under_right_shoulder);
        let sign = if inside { 1.0 } else { -1.0 };
        let dist_x = (x - k.a).abs().min((x - k.b).abs());
        let dist_y = (y - k.a).abs().min((y - k.d).abs());
        -sign * dist_x.min(dist_y)
    }
    fn gradient(&self, pt: &Point2<f64>) -> Vector2<f64> {
        let (x, y) = (pt.x, pt.y);
        let k = self.corners();
        if x > k.a + Self::GRAD_TOL && x <= 0.5 && y >= k.c {
            return Self::notch_normal(x, Self::notch_slopes(&k).0);
        }
        if x < k.b - Self::GRAD_TOL && x > 0.5 && y >= k.c {
            return Self::notch_normal(-x, Self::notch_slopes(&k).1);
        }
        let dists = [(x - k.a).abs(), (x - k.b).abs(), (y - k.a).abs()];
        match nearest(&dists) {
            0 => Vector2::new(-1.0, 0.0),
            1 => Vector2::new(1.0, 0.0),
            _ => Vector2::new(0.0, -1.0),
        }
    }
}
