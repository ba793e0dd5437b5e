//! Operator Overloading
//! Example: `+`, `+=` and unary `-` on `Point`
//!
//! Run with: cargo run --bin p09_operators

use language_tour::{banner, Point};

fn centroid_sum(points: &[Point]) -> Point {
    points.iter().copied().fold(Point::ORIGIN, |acc, p| acc + p)
}

fn main() {
    banner::start("Operator Overloading");

    let p1 = Point::new(2, 3);
    let p2 = Point::new(4, 5);
    let sum = p1 + p2;
    println!("{p1}");
    println!("{p2}");
    println!("{sum}");

    banner::section("Compound and unary");
    let mut running = Point::ORIGIN;
    running += p1;
    running += p2;
    println!("running total: {running}");
    println!("negated: {}", -running);
    println!("folded: {}", centroid_sum(&[p1, p2, -p1]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_with_add() {
        let points = [Point::new(1, 1), Point::new(2, 2), Point::new(-3, 0)];
        assert_eq!(centroid_sum(&points), Point::new(0, 3));
        assert_eq!(centroid_sum(&[]), Point::ORIGIN);
    }
}
