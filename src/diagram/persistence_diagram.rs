//! Persistence Diagrams: birth/death multisets of one dimension
//!
//! A point (b, d) records a class born at filtration value b that dies at
//! d. Classes that never die keep their slot with `death = +∞`, so a
//! diagram always has one point per creator simplex of its dimension
//! until it is explicitly filtered.
//!
//! ## Text Form
//!
//! One point per line, birth and death separated by whitespace, `inf` for
//! an unpaired death. Parsing accepts the same form and skips blank lines
//! and `#` comments.

use crate::error::{Result, TopologyError};
use std::fmt;

/// A point in a persistence diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub birth: f64,
    pub death: f64,
}

impl Point {
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Point of a class that never dies
    pub fn unpaired(birth: f64) -> Self {
        Self {
            birth,
            death: f64::INFINITY,
        }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        if self.is_unpaired() {
            f64::INFINITY
        } else {
            self.death - self.birth
        }
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_unpaired(&self) -> bool {
        self.death == f64::INFINITY
    }

    /// Born and killed by simplices of equal weight
    pub fn is_diagonal(&self) -> bool {
        self.birth == self.death
    }
}

/// Persistence diagram of a fixed homology dimension
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistenceDiagram {
    dimension: usize,
    points: Vec<Point>,
}

impl PersistenceDiagram {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            points: Vec::new(),
        }
    }

    pub fn from_points(dimension: usize, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            dimension,
            points: points.into_iter().collect(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn add(&mut self, birth: f64, death: f64) {
        self.points.push(Point::new(birth, death));
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of unpaired points
    pub fn betti(&self) -> usize {
        self.points.iter().filter(|p| p.is_unpaired()).count()
    }

    /// Drop points with birth == death (exact comparison).
    ///
    /// Remaining points keep their order.
    pub fn remove_diagonal(&mut self) {
        self.points.retain(|p| !p.is_diagonal());
    }

    /// Drop points that never die.
    pub fn remove_unpaired(&mut self) {
        self.points.retain(|p| !p.is_unpaired());
    }

    /// Replace the death of every unpaired point by a finite value.
    pub fn replace_unpaired(&mut self, death: f64) {
        for p in self.points.iter_mut().filter(|p| p.is_unpaired()) {
            p.death = death;
        }
    }

    /// Apply `f` to every point in place.
    pub fn map_points<F: FnMut(Point) -> Point>(&mut self, mut f: F) {
        for p in self.points.iter_mut() {
            *p = f(*p);
        }
    }

    /// Append the points of `other`; both diagrams must share a dimension.
    pub fn merge(&mut self, other: &PersistenceDiagram) -> Result<()> {
        if other.dimension != self.dimension {
            return Err(TopologyError::DimensionMismatch {
                expected: self.dimension,
                actual: other.dimension,
            });
        }
        self.points.extend_from_slice(&other.points);
        Ok(())
    }

    /// Parse the text form into a diagram of the given dimension.
    pub fn from_text(dimension: usize, text: &str) -> Result<Self> {
        let mut diagram = Self::new(dimension);

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(TopologyError::Parse {
                    line: i + 1,
                    message: format!("expected 2 values, found {}", fields.len()),
                });
            }

            let parse = |s: &str| {
                s.parse::<f64>().map_err(|e| TopologyError::Parse {
                    line: i + 1,
                    message: format!("'{}': {}", s, e),
                })
            };
            diagram.add(parse(fields[0])?, parse(fields[1])?);
        }

        Ok(diagram)
    }
}

impl<'a> IntoIterator for &'a PersistenceDiagram {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.birth, self.death)
    }
}

impl fmt::Display for PersistenceDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.points {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}
