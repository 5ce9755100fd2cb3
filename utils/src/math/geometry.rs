// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A 2D point as `(x, y)`.
pub type Point = (f64, f64);

/// Distance between two points in the `L^l` space.
#[must_use]
pub fn l_point_dist(l: f64, from: Point, to: Point) -> f64 {
    ((from.0 - to.0).abs().powf(l) + (from.1 - to.1).abs().powf(l)).powf(1.0 / l)
}

#[must_use]
pub fn l1_point_dist(from: Point, to: Point) -> f64 {
    (from.0 - to.0).abs() + (from.1 - to.1).abs()
}

#[must_use]
pub fn l2_point_dist(from: Point, to: Point) -> f64 {
    (from.0 - to.0).hypot(from.1 - to.1)
}

/// Axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// From `[min_x, max_x, min_y, max_y]`.
impl From<[f64; 4]> for BBox {
    fn from([min_x, max_x, min_y, max_y]: [f64; 4]) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

/// Distance in the `L^l` space between the closest edges of two boxes. `0` when they
/// overlap on both axes. When they overlap on one axis only, the distance along the
/// other axis.
#[must_use]
pub fn l_rect_dist(l: f64, bbox1: &BBox, bbox2: &BBox) -> f64 {
    let x_deltas = [
        bbox2.min_x - bbox1.min_x,
        bbox2.min_x - bbox1.max_x,
        bbox2.max_x - bbox1.min_x,
        bbox2.max_x - bbox1.max_x,
    ];
    let y_deltas = [
        bbox2.min_y - bbox1.min_y,
        bbox2.min_y - bbox1.max_y,
        bbox2.max_y - bbox1.min_y,
        bbox2.max_y - bbox1.max_y,
    ];

    let is_x_inside = overlaps(x_deltas);
    let is_y_inside = overlaps(y_deltas);

    if is_x_inside && is_y_inside {
        return 0.0;
    }

    let min_y_dist = min_abs(y_deltas);
    if is_x_inside {
        return min_y_dist;
    }

    let min_x_dist = min_abs(x_deltas);
    if is_y_inside {
        return min_x_dist;
    }

    (min_x_dist.powf(l) + min_y_dist.powf(l)).powf(1.0 / l)
}

/// `[d1, d2, d3, d4]` are the deltas between the edges of two boxes along one axis.
/// Either box is inside the other along that axis, or they straddle each other.
fn overlaps([d1, d2, d3, d4]: [f64; 4]) -> bool {
    (d1 < 0.0 && d3 > 0.0)
        || (d2 < 0.0 && d4 > 0.0)
        || (d1 > 0.0 && d2 < 0.0)
        || (d3 > 0.0 && d4 < 0.0)
}

fn min_abs(deltas: [f64; 4]) -> f64 {
    deltas.iter().fold(f64::INFINITY, |min, it| min.min(it.abs()))
}

/// Even-odd rule ray casting
/// ([pnpoly](https://wrf.ecse.rpi.edu//Research/Short_Notes/pnpoly.html)). `polygon` is
/// a flat list of vertices: `[x0, y0, x1, y1, ..]`. A trailing odd coordinate is
/// ignored.
#[must_use]
pub fn is_point_in_polygon((px, py): Point, polygon: &[f64]) -> bool {
    let vertices: Vec<Point> = polygon.chunks_exact(2).map(|it| (it[0], it[1])).collect();
    let Some(&last) = vertices.last() else {
        return false;
    };

    let mut is_within = false;
    let mut prev = last;
    for &(x1, y1) in &vertices {
        let (x2, y2) = prev;
        if (y1 > py) != (y2 > py) && px < (x2 - x1) * (py - y1) / (y2 - y1) + x1 {
            is_within = !is_within;
        }
        prev = (x1, y1);
    }
    is_within
}

/// Whether the point is inside the box, edges included.
#[must_use]
pub fn is_point_in_rect((x, y): Point, rect: &BBox) -> bool {
    x >= rect.min_x && x <= rect.max_x && y >= rect.min_y && y <= rect.max_y
}

/// Whether the point is within the box on at least one of the two axes.
#[must_use]
pub fn is_point_halfway_in_rect((x, y): Point, rect: &BBox) -> bool {
    (x >= rect.min_x && x <= rect.max_x) || (y >= rect.min_y && y <= rect.max_y)
}
