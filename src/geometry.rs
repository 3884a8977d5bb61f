//! Points in the plane and pairs of them

use std::cmp::Ordering;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The Euclidean distance between `self` and `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Two points together with their distance, computed once on construction.
///
/// Equality does not depend on the order of the points.
#[derive(Debug, Clone, Copy)]
pub struct PointPair {
    first: Point,
    second: Point,
    distance: f64,
}

impl PointPair {
    pub fn new(first: Point, second: Point) -> Self {
        Self {
            first,
            second,
            distance: first.distance_to(&second),
        }
    }

    pub fn first(&self) -> Point {
        self.first
    }

    pub fn second(&self) -> Point {
        self.second
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl PartialEq for PointPair {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl std::fmt::Display for PointPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <-> {} (distance {:.6})",
            self.first, self.second, self.distance
        )
    }
}

/// Orders points by x, then by y, using [`f64::total_cmp`]
#[derive(Debug, Clone, Copy)]
pub struct ByX(pub Point);

/// Orders points by y, then by x, using [`f64::total_cmp`]
#[derive(Debug, Clone, Copy)]
pub struct ByY(pub Point);

macro_rules! impl_coordinate_order {
    ($name:ident: $primary:ident, $secondary:ident) => {
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0
                    .$primary
                    .total_cmp(&other.0.$primary)
                    .then_with(|| self.0.$secondary.total_cmp(&other.0.$secondary))
            }
        }
    };
}

impl_coordinate_order!(ByX: x, y);
impl_coordinate_order!(ByY: y, x);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        approx::assert_abs_diff_eq!(a.distance_to(&b), 5.0);
        approx::assert_abs_diff_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn pair_equality_ignores_order() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-3.5, 0.25);
        let c = Point::new(1.0, 2.5);

        assert_eq!(PointPair::new(a, b), PointPair::new(b, a));
        assert_ne!(PointPair::new(a, b), PointPair::new(a, c));
        approx::assert_abs_diff_eq!(
            PointPair::new(a, b).distance(),
            PointPair::new(b, a).distance()
        );
    }

    #[test]
    fn coordinate_orders() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(1.0, 2.0);
        let c = Point::new(0.5, 9.0);

        let mut by_x = [ByX(a), ByX(b), ByX(c)];
        by_x.sort();
        assert_eq!(by_x.map(|p| p.0), [c, b, a]);

        let mut by_y = [ByY(a), ByY(b), ByY(c)];
        by_y.sort();
        assert_eq!(by_y.map(|p| p.0), [b, a, c]);
    }

    #[test]
    fn display() {
        let pair = PointPair::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(Point::new(1.0, -2.5).to_string(), "(1.00, -2.50)");
        assert_eq!(pair.to_string(), "(0.00, 0.00) <-> (1.00, 0.00) (distance 1.000000)");
    }
}
