//! Point sequences with an attached arc-length index

use glam::Vec2;

use super::arc_length::{ArcLengthIndex, PathSample, Projection};

/// Whether a path wraps back to its first point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Cyclic: the segment after the last point returns to the first
    Closed,
    /// Finite with a defined start and end
    Open,
}

/// An ordered point sequence. Immutable once built; the arc-length index is
/// computed up front and owned alongside the points.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Vec2>,
    kind: PathKind,
    index: ArcLengthIndex,
}

impl Path {
    pub fn new(points: Vec<Vec2>, kind: PathKind) -> Self {
        let index = ArcLengthIndex::build(&points, kind);
        Self {
            points,
            kind,
            index,
        }
    }

    pub fn closed(points: Vec<Vec2>) -> Self {
        Self::new(points, PathKind::Closed)
    }

    pub fn open(points: Vec<Vec2>) -> Self {
        Self::new(points, PathKind::Open)
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.kind == PathKind::Closed
    }

    #[inline]
    pub fn index(&self) -> &ArcLengthIndex {
        &self.index
    }

    /// Total arc length
    #[inline]
    pub fn total(&self) -> f32 {
        self.index.total()
    }

    /// Arc-length distance of point `i` from the start of the path
    #[inline]
    pub fn distance_of(&self, i: usize) -> f32 {
        self.index.cum()[i]
    }

    /// End points of segment `i` (wrapping on closed paths)
    pub fn segment(&self, i: usize) -> (Vec2, Vec2) {
        let a = self.points[i];
        let b = self.points[(i + 1) % self.points.len()];
        (a, b)
    }

    pub fn point_at_distance(&self, d: f32) -> PathSample {
        self.index.point_at_distance(&self.points, d)
    }

    pub fn nearest_distance(&self, p: Vec2) -> Projection {
        self.index.nearest_distance(&self.points, p)
    }
}
