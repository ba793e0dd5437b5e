//! Structural Equality
//! Example: field-wise equality, consistent hashing, set membership
//!
//! Run with: cargo run --bin p10_equality

use std::collections::HashSet;

use language_tour::{banner, Point};

/// Insert every point and report the set size after each insert.
fn sizes_after_inserts(points: &[Point]) -> Vec<usize> {
    let mut set = HashSet::new();
    points
        .iter()
        .map(|p| {
            set.insert(*p);
            set.len()
        })
        .collect()
}

fn main() {
    banner::start("Structural Equality");

    let p1 = Point::new(1, 2);
    let p2 = Point::new(1, 2);
    let p3 = Point::new(3, 4);
    println!("p1: {p1}, p2: {p2}, p3: {p3}");

    println!("p1 == p2: {}", p1 == p2);
    println!("p1 == p3: {}", p1 == p3);
    println!("same instance p1/p2: {}", Point::same_instance(&p1, &p2));
    println!("p1 vs a tuple: {}", p1.equals_any(&(1, 2)));

    banner::section("Hashing");
    println!("hash(p1) = {:#018x}", p1.hash_code());
    println!("hash(p2) = {:#018x}", p2.hash_code());

    banner::section("Set membership");
    let mut points = HashSet::new();
    points.insert(p1);
    println!("set contains p1: {}", points.contains(&p1));
    println!("set contains p2: {}", points.contains(&p2));
    println!("set contains p3: {}", points.contains(&p3));
    points.insert(p2);
    println!("count after adding p2: {}", points.len());
    println!("sizes after inserts: {:?}", sizes_after_inserts(&[p1, p2, p3]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_does_not_grow_set() {
        let sizes = sizes_after_inserts(&[Point::new(1, 2), Point::new(1, 2), Point::new(3, 4)]);
        assert_eq!(sizes, vec![1, 1, 2]);
    }
}
