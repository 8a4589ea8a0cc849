//! 2D paths, flattening and solid/hole classification.

use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

impl PathCommand {
    pub fn transformed(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
        }
    }
}

/// A filled region: one outer contour and any number of holes.
///
/// Contours are implicitly closed (the last point connects to the first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub outer: Vec<Vec2>,
    pub holes: SmallVec<[Vec<Vec2>; 2]>,
}

impl Shape {
    pub fn contours(&self) -> impl Iterator<Item = &Vec<Vec2>> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Filled area (outer minus holes).
    pub fn area(&self) -> f32 {
        signed_area(&self.outer).abs() - self.holes.iter().map(|h| signed_area(h).abs()).sum::<f32>()
    }
}

/// Shoelace area; positive for counter-clockwise contours.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.perp_dot(b);
    }
    sum * 0.5
}

/// Even-odd point in polygon test.
pub fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    let n = poly.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let a = poly[i];
        let b = poly[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Flatten a path into closed polylines, one per `MoveTo` subpath.
///
/// Each curve contributes `segments` points. Repeated points and a closing
/// point equal to the start are dropped; subpaths with fewer than three
/// points are discarded.
pub fn flatten(commands: &[PathCommand], segments: usize) -> Vec<Vec<Vec2>> {
    let segments = segments.max(1);
    let mut out = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let mut pen = Vec2::ZERO;

    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                finish_subpath(&mut out, std::mem::take(&mut current));
                push_point(&mut current, p);
                pen = p;
            }
            PathCommand::LineTo(p) => {
                push_point(&mut current, p);
                pen = p;
            }
            PathCommand::QuadTo { ctrl, to } => {
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    push_point(&mut current, quadratic(pen, ctrl, to, t));
                }
                pen = to;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    push_point(&mut current, cubic(pen, ctrl1, ctrl2, to, t));
                }
                pen = to;
            }
        }
    }
    finish_subpath(&mut out, current);
    out
}

fn push_point(points: &mut Vec<Vec2>, p: Vec2) {
    if points.last().map_or(true, |last| last.distance_squared(p) > f32::EPSILON) {
        points.push(p);
    }
}

fn finish_subpath(out: &mut Vec<Vec<Vec2>>, mut points: Vec<Vec2>) {
    while points.len() > 1 && points[0].distance_squared(points[points.len() - 1]) <= f32::EPSILON {
        points.pop();
    }
    if points.len() >= 3 && signed_area(&points).abs() > f32::EPSILON {
        out.push(points);
    }
}

#[inline]
fn quadratic(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k) + p1 * (2.0 * k * t) + p2 * (t * t)
}

#[inline]
fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k * k) + p1 * (3.0 * k * k * t) + p2 * (3.0 * k * t * t) + p3 * (t * t * t)
}

/// Group closed contours into shapes.
///
/// A contour nested inside an odd number of other contours is a hole and is
/// attached to the smallest enclosing solid. Winding direction is not
/// trusted, since font foundries disagree on it.
pub fn classify_contours(contours: Vec<Vec<Vec2>>) -> Vec<Shape> {
    let depth: Vec<usize> = contours
        .iter()
        .enumerate()
        .map(|(i, c)| {
            contours
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && point_in_polygon(c[0], other))
                .count()
        })
        .collect();

    let mut shapes: Vec<Shape> = Vec::new();
    let mut solid_index: Vec<Option<usize>> = vec![None; contours.len()];
    for (i, c) in contours.iter().enumerate() {
        if depth[i] % 2 == 0 {
            solid_index[i] = Some(shapes.len());
            shapes.push(Shape {
                outer: c.clone(),
                holes: SmallVec::new(),
            });
        }
    }

    for (i, c) in contours.into_iter().enumerate() {
        if depth[i] % 2 == 0 {
            continue;
        }
        let owner = solid_index
            .iter()
            .flatten()
            .copied()
            .filter(|&s| point_in_polygon(c[0], &shapes[s].outer))
            .min_by(|&a, &b| {
                signed_area(&shapes[a].outer)
                    .abs()
                    .total_cmp(&signed_area(&shapes[b].outer).abs())
            });
        match owner {
            Some(s) => shapes[s].holes.push(c),
            None => shapes.push(Shape {
                outer: c,
                holes: SmallVec::new(),
            }),
        }
    }
    shapes
}

/// Flatten and classify a path in one step.
pub fn shapes_from_path(commands: &[PathCommand], segments: usize) -> Vec<Shape> {
    classify_contours(flatten(commands, segments))
}
