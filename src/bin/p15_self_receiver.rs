//! The `self` Receiver
//! Example: reading, mutating, chaining and handing off the current value
//!
//! Run with: cargo run --bin p15_self_receiver

use language_tour::banner;

#[derive(Debug, Clone, PartialEq)]
struct Counter {
    value: i32,
}

impl Counter {
    fn new(value: i32) -> Self {
        // Field init shorthand: parameter and field share a name.
        Self { value }
    }

    fn display_value(&self) -> String {
        format!("Instance value: {}", self.value)
    }

    fn add(&mut self, amount: i32) -> &mut Self {
        self.value += amount;
        self
    }

    fn pass_self(&self, receiver: &mut Receiver) {
        receiver.receive(self);
    }

    fn chain_calls(&self) -> Vec<String> {
        vec!["Chaining calls...".to_string(), self.display_value()]
    }

    /// Consumes the value.
    fn into_value(self) -> i32 {
        self.value
    }
}

#[derive(Debug, Default)]
struct Receiver {
    received: Vec<i32>,
}

impl Receiver {
    fn receive(&mut self, counter: &Counter) {
        println!("Received instance with value: {}", counter.value);
        self.received.push(counter.value);
    }
}

fn main() {
    banner::start("The self Receiver");

    let mut counter = Counter::new(10);
    println!("{}", counter.display_value());

    let mut receiver = Receiver::default();
    counter.pass_self(&mut receiver);
    for line in counter.chain_calls() {
        println!("{line}");
    }

    banner::section("&mut self chaining");
    counter.add(5).add(-2);
    println!("{}", counter.display_value());
    println!("consumed: {}", counter.into_value());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_mutation() {
        let mut counter = Counter::new(1);
        counter.add(2).add(3);
        assert_eq!(counter.clone().into_value(), 6);
        assert_eq!(counter.display_value(), "Instance value: 6");
    }

    #[test]
    fn test_pass_self() {
        let counter = Counter::new(10);
        let mut receiver = Receiver::default();
        counter.pass_self(&mut receiver);
        assert_eq!(receiver.received, vec![10]);
    }
}
