//! Bitwise Operators
//! Example: integer bit operations and a hand-rolled permission flag set
//!
//! Run with: cargo run --bin p18_bitwise

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use itertools::Itertools;
use language_tour::banner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
struct Permissions(u8);

impl Permissions {
    const NONE: Permissions = Permissions(0);
    const READ: Permissions = Permissions(0b0001);
    const WRITE: Permissions = Permissions(0b0010);
    const EXECUTE: Permissions = Permissions(0b0100);
    const DELETE: Permissions = Permissions(0b1000);
    const ALL: Permissions = Permissions(0b1111);

    const NAMED: [(Permissions, &'static str); 4] = [
        (Permissions::READ, "Read"),
        (Permissions::WRITE, "Write"),
        (Permissions::EXECUTE, "Execute"),
        (Permissions::DELETE, "Delete"),
    ];

    fn contains(self, other: Permissions) -> bool {
        self & other == other
    }
}

impl BitOr for Permissions {
    type Output = Permissions;

    fn bitor(self, rhs: Permissions) -> Permissions {
        Permissions(self.0 | rhs.0)
    }
}

impl BitAnd for Permissions {
    type Output = Permissions;

    fn bitand(self, rhs: Permissions) -> Permissions {
        Permissions(self.0 & rhs.0)
    }
}

// Confined to the defined bits so `!READ` does not invent flags.
impl Not for Permissions {
    type Output = Permissions;

    fn not(self) -> Permissions {
        Permissions(!self.0 & Permissions::ALL.0)
    }
}

impl BitOrAssign for Permissions {
    fn bitor_assign(&mut self, rhs: Permissions) {
        *self = *self | rhs;
    }
}

impl BitAndAssign for Permissions {
    fn bitand_assign(&mut self, rhs: Permissions) {
        *self = *self & rhs;
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Permissions::NONE {
            return f.write_str("None");
        }
        let names = Permissions::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .join(", ");
        f.write_str(&names)
    }
}

fn integer_ops(a: i32, b: i32) -> [(String, i32); 6] {
    [
        (format!("Bitwise AND ({a} & {b})"), a & b),
        (format!("Bitwise OR ({a} | {b})"), a | b),
        (format!("Bitwise XOR ({a} ^ {b})"), a ^ b),
        (format!("Bitwise NOT (!{a})"), !a),
        (format!("Left Shift ({a} << 1)"), a << 1),
        (format!("Right Shift ({a} >> 1)"), a >> 1),
    ]
}

fn main() {
    banner::start("Bitwise Operators");

    for (label, value) in integer_ops(5, 3) {
        println!("{label}: {value} ({value:#06b})");
    }

    banner::section("Flag set");
    let mut user = Permissions::READ | Permissions::EXECUTE;
    println!("User Permissions: {user}");
    if user.contains(Permissions::READ) {
        println!("User has Read permission.");
    }
    if user.contains(Permissions::WRITE) {
        println!("User has Write permission.");
    } else {
        println!("User does NOT have Write permission.");
    }

    user |= Permissions::WRITE;
    println!("User Permissions after adding Write: {user}");
    user &= !Permissions::EXECUTE;
    println!("User Permissions after removing Execute: {user}");
}
