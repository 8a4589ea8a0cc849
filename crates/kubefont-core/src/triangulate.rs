//! Ear-clipping triangulation of shapes with holes.
//!
//! Holes are merged into the outer contour through bridge edges (rightmost
//! hole vertex to a visible outer vertex), then the resulting simple polygon
//! is clipped ear by ear.

use crate::shape::{signed_area, Shape};
use glam::Vec2;

const EPS: f32 = 1e-9;

/// Triangles over `points`, counter-clockwise.
///
/// `points` holds the outer contour (counter-clockwise) followed by every
/// hole (clockwise), in the order of [`Shape::holes`].
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    pub points: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
    /// Start offset and length of each contour inside `points`.
    pub contours: Vec<(usize, usize)>,
}

impl Triangulation {
    pub fn area(&self) -> f32 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| self.points[i as usize]);
                (b - a).perp_dot(c - a) * 0.5
            })
            .sum()
    }
}

pub fn triangulate(shape: &Shape) -> Triangulation {
    let mut out = Triangulation::default();
    if shape.outer.len() < 3 {
        return out;
    }

    let mut outer = shape.outer.clone();
    if signed_area(&outer) < 0.0 {
        outer.reverse();
    }
    out.contours.push((0, outer.len()));
    out.points.extend_from_slice(&outer);

    let mut holes: Vec<(usize, usize)> = Vec::with_capacity(shape.holes.len());
    for hole in &shape.holes {
        if hole.len() < 3 {
            continue;
        }
        let mut h = hole.clone();
        if signed_area(&h) > 0.0 {
            h.reverse();
        }
        let start = out.points.len();
        out.contours.push((start, h.len()));
        holes.push((start, h.len()));
        out.points.extend_from_slice(&h);
    }

    let points = &out.points;
    let mut ring: Vec<usize> = (0..outer.len()).collect();

    // Rightmost holes first so later bridges never cross earlier ones.
    let rightmost = |&(start, len): &(usize, usize)| -> usize {
        (start..start + len)
            .max_by(|&a, &b| points[a].x.total_cmp(&points[b].x))
            .unwrap_or(start)
    };
    holes.sort_by(|a, b| points[rightmost(b)].x.total_cmp(&points[rightmost(a)].x));

    for hole in &holes {
        let m = rightmost(hole);
        let Some(pos) = find_bridge(&ring, points, points[m]) else {
            log::warn!("[triangulate] no bridge for hole at {:?}; hole dropped", points[m]);
            continue;
        };
        let (start, len) = *hole;
        let mut spliced = Vec::with_capacity(ring.len() + len + 2);
        spliced.extend_from_slice(&ring[..=pos]);
        spliced.extend((0..=len).map(|k| start + (m - start + k) % len));
        spliced.push(ring[pos]);
        spliced.extend_from_slice(&ring[pos + 1..]);
        ring = spliced;
    }

    out.triangles = clip_ears(&ring, points);
    out
}

/// Ring position of an outer vertex visible from `m` along +x.
fn find_bridge(ring: &[usize], points: &[Vec2], m: Vec2) -> Option<usize> {
    let n = ring.len();
    let mut best_x = f32::INFINITY;
    let mut candidate = None;
    for i in 0..n {
        let j = (i + 1) % n;
        let a = points[ring[i]];
        let b = points[ring[j]];
        if a.y == b.y || m.y < a.y.min(b.y) || m.y > a.y.max(b.y) {
            continue;
        }
        let x = a.x + (m.y - a.y) * (b.x - a.x) / (b.y - a.y);
        if x >= m.x && x < best_x {
            best_x = x;
            candidate = Some(if a.x > b.x { i } else { j });
        }
    }

    let Some(cand) = candidate else {
        // Degenerate input: fall back to the nearest vertex.
        return (0..n).min_by(|&a, &b| {
            points[ring[a]]
                .distance_squared(m)
                .total_cmp(&points[ring[b]].distance_squared(m))
        });
    };

    let hit = Vec2::new(best_x, m.y);
    let p = points[ring[cand]];
    if p.distance_squared(hit) <= EPS {
        return Some(locally_inside_copy(ring, points, cand, m));
    }

    // Any vertex inside triangle (m, hit, p) may block the bridge; take the
    // one closest in angle to the ray.
    let mut best = cand;
    let mut best_tan = f32::INFINITY;
    let mut best_dist = f32::INFINITY;
    for (k, &idx) in ring.iter().enumerate() {
        let q = points[idx];
        if k == cand || q.distance_squared(p) <= EPS || q.x < m.x {
            continue;
        }
        if !inside_or_on_triangle(m, hit, p, q) {
            continue;
        }
        let tan = (q.y - m.y).abs() / (q.x - m.x).max(EPS);
        let dist = q.distance_squared(m);
        if tan < best_tan || (tan == best_tan && dist < best_dist) {
            best = k;
            best_tan = tan;
            best_dist = dist;
        }
    }
    Some(locally_inside_copy(ring, points, best, m))
}

/// Earlier bridges duplicate vertices. Among copies of the vertex at `pos`,
/// pick one whose interior wedge contains the direction towards `m`.
fn locally_inside_copy(ring: &[usize], points: &[Vec2], pos: usize, m: Vec2) -> usize {
    let target = points[ring[pos]];
    (0..ring.len())
        .filter(|&k| points[ring[k]].distance_squared(target) <= EPS)
        .find(|&k| locally_inside(ring, points, k, m))
        .unwrap_or(pos)
}

fn locally_inside(ring: &[usize], points: &[Vec2], k: usize, m: Vec2) -> bool {
    let n = ring.len();
    let p = points[ring[(k + n - 1) % n]];
    let a = points[ring[k]];
    let q = points[ring[(k + 1) % n]];
    let left_of_in = (a - p).perp_dot(m - p) >= 0.0;
    let left_of_out = (q - a).perp_dot(m - a) >= 0.0;
    if turn(p, a, q) >= 0.0 {
        left_of_in && left_of_out
    } else {
        left_of_in || left_of_out
    }
}

fn inside_or_on_triangle(a: Vec2, b: Vec2, c: Vec2, q: Vec2) -> bool {
    let d1 = (b - a).perp_dot(q - a);
    let d2 = (c - b).perp_dot(q - b);
    let d3 = (a - c).perp_dot(q - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[inline]
fn turn(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - b)
}

fn clip_ears(ring: &[usize], points: &[Vec2]) -> Vec<[u32; 3]> {
    let n = ring.len();
    let mut triangles = Vec::with_capacity(n.saturating_sub(2));
    if n < 3 {
        return triangles;
    }
    let pt = |k: usize| points[ring[k]];
    let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let emit = |tris: &mut Vec<[u32; 3]>, a: usize, b: usize, c: usize| {
        tris.push([ring[a] as u32, ring[b] as u32, ring[c] as u32]);
    };

    let is_ear = |prev: &[usize], next: &[usize], b: usize| -> bool {
        let a = prev[b];
        let c = next[b];
        let (pa, pb, pc) = (pt(a), pt(b), pt(c));
        if turn(pa, pb, pc) <= EPS {
            return false;
        }
        let mut k = next[c];
        while k != a {
            // A vertex on the ear's edge blocks it as well.
            let q = pt(k);
            let coincident = q.distance_squared(pa) <= EPS
                || q.distance_squared(pb) <= EPS
                || q.distance_squared(pc) <= EPS;
            if !coincident && inside_or_on_triangle(pa, pb, pc, q) {
                return false;
            }
            k = next[k];
        }
        true
    };

    let mut remaining = n;
    let mut cur = 0;
    let mut stalled = 0;
    while remaining > 3 {
        let a = prev[cur];
        let c = next[cur];
        if is_ear(&prev, &next, cur) {
            emit(&mut triangles, a, cur, c);
        } else {
            stalled += 1;
            if stalled < remaining {
                cur = c;
                continue;
            }
            // A full lap without an ear: drop a flat vertex, or clip anyway.
            if turn(pt(a), pt(cur), pt(c)) > EPS {
                emit(&mut triangles, a, cur, c);
            }
        }
        next[a] = c;
        prev[c] = a;
        remaining -= 1;
        stalled = 0;
        cur = c;
    }
    let (a, c) = (prev[cur], next[cur]);
    if turn(pt(a), pt(cur), pt(c)) > EPS {
        emit(&mut triangles, a, cur, c);
    }
    triangles
}
