//! Conversions
//! Example: infallible `From`/`into` versus checked `TryFrom`
//!
//! Run with: cargo run --bin p12_conversions

use std::fmt;

use language_tour::{banner, TourError};

const ABSOLUTE_ZERO_C: f64 = -273.15;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fahrenheit(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Celsius(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Kelvin(f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

/// Kelvin cannot be negative, so this direction has to be checked.
impl TryFrom<Fahrenheit> for Kelvin {
    type Error = TourError;

    fn try_from(f: Fahrenheit) -> Result<Self, Self::Error> {
        let Celsius(c) = Celsius::from(f);
        if c < ABSOLUTE_ZERO_C {
            return Err(TourError::out_of_range("temperature", f));
        }
        Ok(Kelvin(c - ABSOLUTE_ZERO_C))
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

fn main() {
    banner::start("Conversions");

    let fahrenheit = Fahrenheit(212.0);
    let celsius: Celsius = fahrenheit.into();
    println!("Fahrenheit to Celsius (into): {fahrenheit} = {celsius}");

    for reading in [fahrenheit, Fahrenheit(-500.0)] {
        match Kelvin::try_from(reading) {
            Ok(kelvin) => println!("Fahrenheit to Kelvin (try_from): {reading} = {kelvin}"),
            Err(err) => println!("Fahrenheit to Kelvin (try_from): {err}"),
        }
    }

    banner::section("Built-in numeric conversions");
    let wide: i64 = i64::from(42i32);
    println!("i32 -> i64 always fits: {wide}");
    match u8::try_from(300i32) {
        Ok(byte) => println!("300 -> u8: {byte}"),
        Err(err) => println!("300 -> u8: {err}"),
    }
}
