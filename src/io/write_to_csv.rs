use csv::Writer;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::disc::level_set::LevelSetFunction;
use crate::error::ParamResult;

/// Uniform `nx × ny` grid of sample points on `[x0, x1] × [y0, y1]`,
/// endpoints included.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub nx: usize,
    pub ny: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            nx: 65,
            ny: 65,
            x0: 0.0,
            x1: 1.0,
            y0: 0.0,
            y1: 1.0,
        }
    }
}

impl SampleGrid {
    fn coordinate(start: f64, end: f64, i: usize, n: usize) -> f64 {
        if n < 2 {
            return start;
        }
        start + (end - start) * i as f64 / (n - 1) as f64
    }
    /// Points in row-major order, `x` varying fastest.
    pub fn points(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        (0..self.ny).flat_map(move |j| {
            let y = Self::coordinate(self.y0, self.y1, j, self.ny);
            (0..self.nx)
                .map(move |i| Point2::new(Self::coordinate(self.x0, self.x1, i, self.nx), y))
        })
    }
}

#[derive(Serialize)]
struct PointData {
    x: f64,
    y: f64,
    value: f64,
    grad_x: f64,
    grad_y: f64,
}

pub fn write_level_set_samples<L: LevelSetFunction>(
    level_set: &L,
    grid: &SampleGrid,
    filename: &str,
) -> ParamResult<()> {
    let mut writer = Writer::from_path(filename)?;
    let mut rows = 0;
    for pt in grid.points() {
        let grad = level_set.gradient(&pt);
        let data = PointData {
            x: pt.x,
            y: pt.y,
            value: level_set.value(&pt),
            grad_x: grad.x,
            grad_y: grad.y,
        };
        writer.serialize(data)?;
        rows += 1;
    }
    writer.flush().map_err(csv::Error::from)?;
    info!(filename, rows, "wrote level set samples");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_points() {
        let grid = SampleGrid {
            nx: 3,
            ny: 2,
            x0: 0.0,
            x1: 1.0,
            y0: -1.0,
            y1: 1.0,
        };
        let pts: Vec<Point2<f64>> = grid.points().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point2::new(0.0, -1.0));
        assert_eq!(pts[1], Point2::new(0.5, -1.0));
        assert_eq!(pts[5], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_single_point_grid() {
        let grid = SampleGrid {
            nx: 1,
            ny: 1,
            x0: 0.25,
            x1: 1.0,
            y0: 0.75,
            y1: 1.0,
        };
        let pts: Vec<Point2<f64>> = grid.points().collect();
        assert_eq!(pts, vec![Point2::new(0.25, 0.75)]);
    }
}
