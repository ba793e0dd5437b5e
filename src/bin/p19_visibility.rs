//! Visibility
//! Example: `pub`, private, `pub(crate)` and `pub(super)` across modules
//!
//! Run with: cargo run --bin p19_visibility

use language_tour::banner;

mod library {
    pub struct Record {
        pub public_field: String,
        private_field: String,
        pub(crate) crate_field: String,
        pub(super) parent_field: String,
    }

    impl Record {
        pub fn new() -> Self {
            Self {
                public_field: "Public".into(),
                private_field: "Private".into(),
                crate_field: "Crate".into(),
                parent_field: "Parent".into(),
            }
        }

        /// The only way to read the private field from outside.
        pub fn private_field(&self) -> &str {
            &self.private_field
        }
    }

    impl Default for Record {
        fn default() -> Self {
            Self::new()
        }
    }

    pub mod inner {
        use super::Record;

        /// Child modules see their ancestors' private items.
        pub fn peek_private(record: &Record) -> String {
            format!("Private Field (from inner module): {}", record.private_field)
        }
    }
}

mod neighbour {
    use crate::library::Record;

    pub fn crate_access(record: &Record) -> String {
        format!("Crate Field (from neighbour module): {}", record.crate_field)
    }
}

fn visible_lines() -> Vec<String> {
    let record = library::Record::new();
    vec![
        format!("Public Field: {}", record.public_field),
        format!("Private Field: {}", record.private_field()),
        library::inner::peek_private(&record),
        neighbour::crate_access(&record),
        format!("Parent Field (from crate root): {}", record.parent_field),
    ]
}

fn main() {
    banner::start("Visibility");

    for line in visible_lines() {
        println!("{line}");
    }
    // library::Record::new().private_field  // error: field is private
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_reachable_through_its_path() {
        let lines = visible_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Public Field: Public");
        assert_eq!(lines[1], "Private Field: Private");
        assert!(lines[2].ends_with("Private"));
        assert!(lines[4].ends_with("Parent"));
    }
}
