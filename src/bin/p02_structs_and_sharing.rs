//! Value and Reference Aggregates
//! Example: a `Copy` struct versus a shared, mutable person record
//!
//! Run with: cargo run --bin p02_structs_and_sharing

use std::cell::RefCell;
use std::rc::Rc;

use language_tour::banner;

/// Plain data, copied on assignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PointStruct {
    x: i32,
    y: i32,
}

/// Heap record reached through shared handles.
#[derive(Debug, Default)]
struct Person {
    name: String,
}

type SharedPerson = Rc<RefCell<Person>>;

fn new_person(name: &str) -> SharedPerson {
    Rc::new(RefCell::new(Person {
        name: name.to_string(),
    }))
}

fn rename(person: &SharedPerson, name: &str) {
    person.borrow_mut().name = name.to_string();
}

fn main() {
    banner::start("Value and Reference Aggregates");

    let person = new_person("John");
    let point = PointStruct { x: 10, y: 20 };
    println!("Person's Name: {}", person.borrow().name);
    println!("Point's Coordinates: ({}, {})", point.x, point.y);

    banner::section("Copy semantics");
    let mut copy = point;
    copy.x = 99;
    println!("original: {:?}", point);
    println!("copy:     {:?}", copy);

    banner::section("Shared handle semantics");
    let alias = Rc::clone(&person);
    rename(&alias, "Jane");
    println!("through original handle: {}", person.borrow().name);
    println!("handles alive: {}", Rc::strong_count(&person));
}
