//! Properties
//! Example: accessor methods over a private field, with a validating setter
//!
//! Run with: cargo run --bin p13_properties

use language_tour::{banner, TourError, TourResult};

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
}

impl Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: impl Into<String>) -> TourResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TourError::parse(name, "non-empty name"));
        }
        self.name = name;
        Ok(())
    }

    /// Computed, not stored.
    fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

fn main() {
    banner::start("Properties");

    let mut person = Person::default();
    if let Err(err) = person.set_name("Alice") {
        println!("Error: {err}");
    }
    println!("Person's Name: {}", person.name());

    banner::section("Validation and computed values");
    if let Err(err) = person.set_name("   ") {
        println!("rejected: {err}");
    }
    println!("name is still: {}", person.name());

    if person.set_name("Alice Liddell").is_ok() {
        println!("initials: {}", person.initials());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_validates() {
        let mut person = Person::default();
        person.set_name("Alice").unwrap();
        assert!(person.set_name("").is_err());
        assert_eq!(person.name(), "Alice");
    }

    #[test]
    fn test_initials() {
        let mut person = Person::default();
        person.set_name("Ada King Lovelace").unwrap();
        assert_eq!(person.initials(), "AKL");
    }
}
