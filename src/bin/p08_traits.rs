//! Interfaces as Traits
//! Example: one trait, several shapes, dynamic dispatch
//!
//! Run with: cargo run --bin p08_traits

use std::f64::consts::PI;

use language_tour::banner;

trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;

    fn draw(&self) -> String {
        format!("Drawing a {}.", self.name())
    }
}

struct Circle {
    radius: f64,
}

struct Square {
    side: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn draw(&self) -> String {
        format!("Drawing a square with side {}.", self.side)
    }
}

fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

fn main() {
    banner::start("Interfaces as Traits");

    let shape: Box<dyn Shape> = Box::new(Circle { radius: 1.0 });
    println!("{}", shape.draw());

    banner::section("Heterogeneous collection");
    let shapes: Vec<Box<dyn Shape>> = vec![shape, Box::new(Square { side: 2.0 })];
    for s in &shapes {
        println!("{} (area {:.2})", s.draw(), s.area());
    }
    println!("total area: {:.2}", total_area(&shapes));
}
