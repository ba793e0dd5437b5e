//! Named Constants
//! Example: enums with implicit and explicit discriminants
//!
//! Run with: cargo run --bin p03_enums

use language_tour::{banner, DayOfWeek, Status, TourError};

fn describe_parse(input: &str) -> String {
    match input.parse::<Status>() {
        Ok(status) => format!("Parsed Status: {status} ({})", status.as_u8()),
        Err(TourError::Parse { input, .. }) => format!("'{input}' is not a Status"),
        Err(other) => format!("unexpected error: {other}"),
    }
}

fn main() {
    banner::start("Named Constants");

    let today = DayOfWeek::Wednesday;
    println!("Today is: {today}");
    println!("Today's int value: {}", today.number());

    match DayOfWeek::try_from(1) {
        Ok(tomorrow) => println!("Tomorrow is: {tomorrow}"),
        Err(err) => println!("Error: {err}"),
    }
    if let Err(err) = DayOfWeek::try_from(9) {
        println!("Day 9: {err}");
    }

    banner::section("Explicit byte values");
    let order_status = Status::Approved;
    println!("Order Status: {order_status}");
    println!("Order Status byte value: {}", order_status.as_u8());
    let status_string = order_status.to_string();
    println!("Order Status as string: {status_string}");

    banner::section("Text to constant");
    for input in ["Pending", "Shipped"] {
        println!("{}", describe_parse(input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_parse() {
        assert_eq!(describe_parse("Pending"), "Parsed Status: Pending (1)");
        assert_eq!(describe_parse("Shipped"), "'Shipped' is not a Status");
    }
}
