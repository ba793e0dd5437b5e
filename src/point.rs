//! Structural-equality coordinate pair.
//!
//! Two points are equal when both components match. `Hash` is derived from
//! the same fields, so equal points always hash alike and a `HashSet<Point>`
//! treats field-wise duplicates as one key.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Hash with a fixed-key hasher, stable for the life of the process.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Compare against a value of unknown type. Anything that is not a
    /// `Point` is simply unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Point>()
            .map_or(false, |point| self == point)
    }

    /// Identity, not equality: true only for the same memory location.
    pub fn same_instance(a: &Point, b: &Point) -> bool {
        std::ptr::eq(a, b)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

// Component arithmetic wraps at the `i32` boundary instead of panicking.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_field_wise_equality() {
        let p1 = Point::new(1, 2);
        let p2 = Point::new(1, 2);
        let p3 = Point::new(3, 4);

        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
        assert!(!Point::same_instance(&p1, &p2));
        assert!(Point::same_instance(&p1, &p1));
    }

    #[test]
    fn test_set_deduplicates_equal_points() {
        let mut points = HashSet::new();
        points.insert(Point::new(1, 2));
        points.insert(Point::new(1, 2));
        assert_eq!(points.len(), 1);

        points.insert(Point::new(3, 4));
        assert_eq!(points.len(), 2);
        assert!(points.contains(&Point::new(1, 2)));
    }

    #[test]
    fn test_map_key_lookup_by_value() {
        let mut labels = HashMap::new();
        labels.insert(Point::new(1, 2), "first");
        labels.insert(Point::new(1, 2), "second");

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[&Point::new(1, 2)], "second");
    }

    #[test]
    fn test_incompatible_type_is_unequal() {
        let p = Point::new(1, 2);
        assert!(p.equals_any(&Point::new(1, 2)));
        assert!(!p.equals_any(&(1, 2)));
        assert!(!p.equals_any(&"(1, 2)"));
    }

    #[test]
    fn test_display_and_operators() {
        let sum = Point::new(2, 3) + Point::new(4, 5);
        assert_eq!(sum.to_string(), "(6, 8)");

        let mut p = Point::ORIGIN;
        p += Point::new(1, -1);
        assert_eq!(-p, Point::new(-1, 1));
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }

    #[test]
    fn test_operators_wrap_at_boundary() {
        let sum = Point::new(i32::MAX, 0) + Point::new(1, 0);
        assert_eq!(sum, Point::new(i32::MIN, 0));

        let mut p = Point::new(0, i32::MIN);
        p += Point::new(0, -1);
        assert_eq!(p, Point::new(0, i32::MAX));

        assert_eq!(-Point::new(i32::MIN, 0), Point::new(i32::MIN, 0));
    }

    fn point() -> impl Strategy<Value = Point> {
        (-100i32..100, -100i32..100).prop_map(|(x, y)| Point::new(x, y))
    }

    /// A point and another that equals it about half of the time.
    fn point_pair() -> impl Strategy<Value = (Point, Point)> {
        point().prop_flat_map(|a| (Just(a), prop_oneof![Just(a), point()]))
    }

    /// Three points, often all equal.
    fn point_triple() -> impl Strategy<Value = (Point, Point, Point)> {
        point_pair().prop_flat_map(|(a, b)| (Just(a), Just(b), prop_oneof![Just(b), point()]))
    }

    proptest! {
        #[test]
        fn test_equality_is_reflexive(a in point()) {
            prop_assert_eq!(a, a);
            prop_assert!(a.equals_any(&a));
        }

        #[test]
        fn test_equality_is_consistent((a, b) in point_pair()) {
            let first = a == b;
            let second = a == b;
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_equality_is_symmetric((a, b) in point_pair()) {
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn test_equality_is_transitive((a, b, c) in point_triple()) {
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
        }

        #[test]
        fn test_hash_is_stable(a in point()) {
            prop_assert_eq!(a.hash_code(), a.hash_code());
        }

        #[test]
        fn test_equal_points_hash_alike(x in any::<i32>(), y in any::<i32>()) {
            let a = Point::new(x, y);
            let b = Point::new(x, y);
            prop_assert_eq!(a, b);
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }
}
