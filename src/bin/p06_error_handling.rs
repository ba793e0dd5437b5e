//! Recoverable Errors
//! Example: parse failures reported and recovered, with a guard as "finally"
//!
//! Run with: cargo run --bin p06_error_handling

use language_tour::{banner, TourError, TourResult};

fn parse_number(input: &str) -> TourResult<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| TourError::parse(input, "i32"))
}

/// Runs its cleanup when dropped, whichever way the scope is left.
struct Finally<F: FnMut()> {
    cleanup: F,
}

impl<F: FnMut()> Drop for Finally<F> {
    fn drop(&mut self) {
        (self.cleanup)();
    }
}

fn report(input: &str) -> String {
    let _finally = Finally {
        cleanup: || println!("Finally block: cleanup code runs here."),
    };

    match parse_number(input) {
        Ok(n) => format!("You entered: {n}"),
        Err(TourError::Parse { .. }) => "Error: Invalid number format.".to_string(),
        Err(other) => format!("Error: {other}"),
    }
}

/// Sum whatever parses, widened to `i64`; collect the rest.
fn sum_valid(inputs: &[&str]) -> (i64, Vec<TourError>) {
    let (ok, errors): (Vec<_>, Vec<_>) = inputs
        .iter()
        .map(|input| parse_number(input))
        .partition(Result::is_ok);

    let total = ok.into_iter().flatten().map(i64::from).sum();
    let errors = errors.into_iter().filter_map(Result::err).collect();
    (total, errors)
}

fn main() {
    banner::start("Recoverable Errors");

    for input in ["42", "forty-two", " 7 ", ""] {
        println!("Enter a number: {input:?}");
        println!("{}", report(input));
    }

    banner::section("Keep going after a failure");
    let (total, errors) = sum_valid(&["1", "2", "x", "3", "2147483648"]);
    println!("sum of valid inputs: {total}");
    for err in errors {
        println!("  skipped: {err}");
    }
}
