//! Constants and Set-Once Fields
//! Example: `const` versus a field fixed at construction
//!
//! Run with: cargo run --bin p11_constants

use language_tour::banner;

/// Known when the program is compiled.
const PI: f64 = std::f64::consts::PI;

/// `max_value` is chosen at run time but never changes afterwards: the field
/// is private and there is no setter.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Limits {
    max_value: i32,
}

impl Limits {
    const DEFAULT_MAX: i32 = 100;

    fn new(max_value: i32) -> Self {
        Self { max_value }
    }

    fn max_value(&self) -> i32 {
        self.max_value
    }

    fn clamp(&self, value: i32) -> i32 {
        value.min(self.max_value)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new(Limits::DEFAULT_MAX)
    }
}

fn main() {
    banner::start("Constants and Set-Once Fields");

    println!("Value of PI: {PI}");
    let limits1 = Limits::default();
    println!("Max Value 1: {}", limits1.max_value());
    let limits2 = Limits::new(200);
    println!("Max Value 2: {}", limits2.max_value());

    banner::section("Using the fixed value");
    println!("clamp(150) under limits1: {}", limits1.clamp(150));
    println!("clamp(150) under limits2: {}", limits2.clamp(150));
    // PI = 3.14;                 // error: cannot assign to a constant
    // limits1.max_value = 150;   // error: `limits1` is not mutable
}
