//! Arc-length parametrization of polyline paths
//!
//! Precomputes per-segment lengths and a cumulative distance table so that
//! "where is the point `d` units along the path" and "how far along the path
//! is the point closest to `p`" can be answered directly.
//!
//! Closed paths have one segment per point (the last wraps to the first) and
//! `cum` holds `n + 1` entries ending in `total`. Open paths have `n - 1`
//! segments and `cum` holds `n` entries.

use glam::Vec2;

use super::path::PathKind;

/// A position sampled along a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub pos: Vec2,
    /// Heading of the containing segment (radians, atan2 of its direction)
    pub angle: f32,
    /// Index of the containing segment
    pub segment: usize,
    /// Local parameter within the segment, in [0, 1]
    pub t: f32,
    /// The distance actually used, after wrap/clamp
    pub d: f32,
}

/// Result of projecting a point onto a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Along-path distance of the closest point
    pub d: f32,
    /// Euclidean distance from the query point to the path
    pub dist: f32,
}

/// Segment lengths and cumulative distances for one path
#[derive(Debug, Clone)]
pub struct ArcLengthIndex {
    kind: PathKind,
    seg_len: Vec<f32>,
    cum: Vec<f32>,
    total: f32,
}

impl ArcLengthIndex {
    /// Build the index for `points`. Fewer than two points yields an empty
    /// index with zero length.
    pub fn build(points: &[Vec2], kind: PathKind) -> Self {
        let n = points.len();
        let seg_count = match (n, kind) {
            (0 | 1, _) => 0,
            (_, PathKind::Closed) => n,
            (_, PathKind::Open) => n - 1,
        };

        let seg_len: Vec<f32> = (0..seg_count)
            .map(|i| points[i].distance(points[(i + 1) % n]))
            .collect();

        let mut cum = Vec::with_capacity(seg_count + 1);
        cum.push(0.0);
        for (i, len) in seg_len.iter().enumerate() {
            cum.push(cum[i] + len);
        }
        let total = cum.last().copied().unwrap_or(0.0);

        Self {
            kind,
            seg_len,
            cum,
            total,
        }
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn seg_len(&self) -> &[f32] {
        &self.seg_len
    }

    #[inline]
    pub fn cum(&self) -> &[f32] {
        &self.cum
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.seg_len.len()
    }

    /// Bring `d` into the valid range for this path: `[0, total)` with
    /// wrap-around for closed paths, `[0, total]` for open ones.
    pub fn normalize(&self, d: f32) -> f32 {
        if !d.is_finite() || self.total <= 0.0 {
            return 0.0;
        }
        match self.kind {
            PathKind::Closed => {
                let r = d.rem_euclid(self.total);
                // rem_euclid can round up to exactly `total` for tiny negatives
                if r >= self.total { 0.0 } else { r }
            }
            PathKind::Open => d.clamp(0.0, self.total),
        }
    }

    /// Locate the point `d` units along the path.
    pub fn point_at_distance(&self, points: &[Vec2], d: f32) -> PathSample {
        let segs = self.segment_count();
        if segs == 0 {
            return PathSample {
                pos: points.first().copied().unwrap_or(Vec2::ZERO),
                angle: 0.0,
                segment: 0,
                t: 0.0,
                d: 0.0,
            };
        }

        let d = self.normalize(d);
        // Last segment whose start is at or before d
        let i = self
            .cum
            .partition_point(|&c| c <= d)
            .saturating_sub(1)
            .min(segs - 1);

        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let len = self.seg_len[i];
        let t = if len > 0.0 {
            ((d - self.cum[i]) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };

        PathSample {
            pos: a.lerp(b, t),
            angle: self.heading(points, i),
            segment: i,
            t,
            d,
        }
    }

    /// Heading of segment `i`. Zero-length segments borrow the direction of
    /// the nearest preceding segment that has length.
    fn heading(&self, points: &[Vec2], i: usize) -> f32 {
        let n = points.len();
        let segs = self.segment_count();
        let steps = match self.kind {
            PathKind::Closed => segs,
            PathKind::Open => i + 1,
        };
        for k in 0..steps {
            let j = (i + segs - k) % segs;
            if self.seg_len[j] > 0.0 {
                let dir = points[(j + 1) % n] - points[j];
                return dir.y.atan2(dir.x);
            }
        }
        0.0
    }

    /// Find the along-path distance of the point on the path closest to `p`.
    ///
    /// Brute force over every segment. Ties keep the first segment found.
    pub fn nearest_distance(&self, points: &[Vec2], p: Vec2) -> Projection {
        let n = points.len();
        let mut best = Projection {
            d: 0.0,
            dist: points.first().map_or(0.0, |first| p.distance(*first)),
        };
        if self.segment_count() == 0 {
            return best;
        }

        best.dist = f32::INFINITY;
        for (i, &len) in self.seg_len.iter().enumerate() {
            let a = points[i];
            let v = points[(i + 1) % n] - a;
            let vv = v.length_squared();
            let t = if vv == 0.0 {
                0.0
            } else {
                ((p - a).dot(v) / vv).clamp(0.0, 1.0)
            };
            let dist = p.distance(a + v * t);
            if dist < best.dist {
                best = Projection {
                    d: self.cum[i] + len * t,
                    dist,
                };
            }
        }

        best.d = self.normalize(best.d);
        best
    }
}
