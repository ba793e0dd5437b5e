//! Function Values
//! Example: function pointers, closures and boxed callbacks
//!
//! Run with: cargo run --bin p04_function_values

use language_tour::banner;

/// A named signature for "something that takes a message".
type MessageHandler = fn(&str) -> String;

fn shout(message: &str) -> String {
    message.to_uppercase()
}

fn echo(message: &str) -> String {
    message.to_string()
}

fn invoke(handler: MessageHandler, message: &str) -> String {
    handler(message)
}

/// Callbacks run in the order they were added.
#[derive(Default)]
struct Multicast {
    handlers: Vec<Box<dyn Fn(&str) -> String>>,
}

impl Multicast {
    fn add(&mut self, handler: impl Fn(&str) -> String + 'static) -> &mut Self {
        self.handlers.push(Box::new(handler));
        self
    }

    fn call(&self, message: &str) -> Vec<String> {
        self.handlers.iter().map(|h| h(message)).collect()
    }
}

fn main() {
    banner::start("Function Values");

    let handler: MessageHandler = echo;
    println!("{}", invoke(handler, "Hello from a function pointer!"));
    println!("{}", invoke(shout, "and louder"));

    banner::section("Closures capture their environment");
    let prefix = String::from(">>");
    let with_prefix = move |message: &str| format!("{prefix} {message}");
    println!("{}", with_prefix("captured"));

    banner::section("Multicast");
    let mut chain = Multicast::default();
    chain.add(echo).add(shout).add(|m| m.chars().rev().collect());
    for line in chain.call("delegate") {
        println!("  {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_invocation() {
        assert_eq!(invoke(shout, "hi"), "HI");
        assert_eq!(invoke(echo, "hi"), "hi");
    }

    #[test]
    fn test_multicast_order() {
        let mut chain = Multicast::default();
        chain.add(echo).add(shout);
        assert_eq!(chain.call("ab"), vec!["ab", "AB"]);
    }

    #[test]
    fn test_empty_multicast() {
        assert!(Multicast::default().call("x").is_empty());
    }
}
