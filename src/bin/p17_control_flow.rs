//! Control Flow
//! Example: branches, `match`, every loop form, labelled break/continue
//!
//! Run with: cargo run --bin p17_control_flow

use std::cmp::Ordering;

use language_tour::banner;

fn compare_to_ten(number: i32) -> &'static str {
    match number.cmp(&10) {
        Ordering::Greater => "Number is greater than 10",
        Ordering::Less => "Number is less than 10",
        Ordering::Equal => "Number is 10",
    }
}

fn day_name(day: u32) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        _ => "Another day",
    }
}

/// Body runs at least once, like do-while.
fn do_while(limit: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut j = 0;
    loop {
        seen.push(j);
        j += 1;
        if j >= limit {
            break;
        }
    }
    seen
}

/// Skip 2, stop at 4.
fn break_continue() -> Vec<u32> {
    let mut out = Vec::new();
    for l in 0..5 {
        if l == 2 {
            continue;
        }
        if l == 4 {
            break;
        }
        out.push(l);
    }
    out
}

/// First (row, col) whose product exceeds `target`, leaving both loops.
fn find_product_above(target: u32) -> Option<(u32, u32)> {
    let mut found = None;
    'rows: for row in 1..10 {
        for col in 1..10 {
            if col > row {
                continue 'rows;
            }
            if row * col > target {
                found = Some((row, col));
                break 'rows;
            }
        }
    }
    found
}

fn main() {
    banner::start("Control Flow");

    println!("{}", compare_to_ten(10));
    println!("{}", day_name(3));

    banner::section("Loops");
    let mut i = 0;
    while i < 3 {
        println!("While loop iteration: {i}");
        i += 1;
    }
    for j in do_while(3) {
        println!("Do-while loop iteration: {j}");
    }
    for k in 0..3 {
        println!("For loop iteration: {k}");
    }
    for num in [1, 2, 3] {
        println!("Foreach loop number: {num}");
    }
    for l in break_continue() {
        println!("Break/Continue loop iteration: {l}");
    }

    banner::section("Labelled loops instead of goto");
    let mut m = 0;
    let iterations = loop {
        println!("Labelled loop iteration: {m}");
        m += 1;
        if m >= 3 {
            break m;
        }
    };
    println!("loop produced: {iterations}");
    match find_product_above(20) {
        Some((row, col)) => println!("first product above 20: {row} * {col}"),
        None => println!("no product above 20"),
    }
}
