//! Proximity-based splitting of an ordered point sequence into connected runs.

use crate::foundation::core::Point;

/// A connected run of at least two points.
///
/// Consecutive points are closer than the threshold the run was built with. Points are owned
/// by exactly one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    points: Vec<Point>,
}

impl Segment {
    /// Returns `None` for fewer than two points.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= 2).then_some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Split `points` into maximal runs whose consecutive points lie strictly closer than
/// `max_dist * width`.
///
/// Distance is measured to the immediately preceding point only, so a run may drift arbitrarily
/// far from where it started. Single-point runs are discarded.
pub fn segment<I>(points: I, max_dist: f64, width: f64) -> Vec<Segment>
where
    I: IntoIterator<Item = Point>,
{
    let threshold = max_dist * width;
    let mut segments = Vec::new();
    let mut run: Vec<Point> = Vec::new();

    for p in points {
        if let Some(&prev) = run.last()
            && prev.distance(p) >= threshold
        {
            segments.extend(Segment::new(std::mem::take(&mut run)));
        }
        run.push(p);
    }
    segments.extend(Segment::new(run));

    segments
}

#[cfg(test)]
#[path = "../tests/unit/segment.rs"]
mod tests;
