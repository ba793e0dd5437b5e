//! Indexing
//! Example: `Index` / `IndexMut` on a fixed table of day names
//!
//! Run with: cargo run --bin p07_indexing

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use language_tour::{banner, TourError, TourResult};

#[derive(Debug, Clone, PartialEq)]
struct WeekDays {
    days: [String; 7],
}

impl Default for WeekDays {
    fn default() -> Self {
        Self {
            days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
        }
    }
}

impl WeekDays {
    /// Non-panicking read.
    fn get(&self, index: usize) -> TourResult<&str> {
        self.days
            .get(index)
            .map(String::as_str)
            .ok_or(TourError::IndexOutOfRange {
                index,
                len: self.days.len(),
            })
    }
}

impl Index<usize> for WeekDays {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.days[index]
    }
}

impl IndexMut<usize> for WeekDays {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.days[index]
    }
}

impl fmt::Display for WeekDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days.iter().join(" "))
    }
}

fn main() {
    banner::start("Indexing");

    let mut week = WeekDays::default();
    println!("{}", week[0]);
    week[0] = "Monday".to_string();
    println!("{week}");

    banner::section("Checked access");
    for index in [6, 7] {
        match week.get(index) {
            Ok(day) => println!("week.get({index}) = {day}"),
            Err(err) => println!("week.get({index}) failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_write_through_index() {
        let mut week = WeekDays::default();
        assert_eq!(week[0], "Mon");
        week[0] = "Monday".into();
        assert_eq!(week.to_string(), "Monday Tue Wed Thu Fri Sat Sun");
    }

    #[test]
    fn test_checked_get() {
        let week = WeekDays::default();
        assert_eq!(week.get(6).unwrap(), "Sun");
        assert_eq!(
            week.get(7).unwrap_err(),
            TourError::IndexOutOfRange { index: 7, len: 7 }
        );
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let week = WeekDays::default();
        let _ = &week[7];
    }
}
