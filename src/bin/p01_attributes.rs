//! Attributes and Metadata
//! Example: compiler attributes plus descriptions attached to types and methods
//!
//! Run with: cargo run --bin p01_attributes

use language_tour::banner;

/// Metadata a type carries about itself.
trait Described {
    const DESCRIPTION: &'static str;

    /// Descriptions of individual methods, keyed by method name.
    fn method_descriptions() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Attach a description to a type and, optionally, to some of its methods.
macro_rules! describe {
    ($ty:ty, $desc:expr $(, $method:ident => $mdesc:expr)* $(,)?) => {
        impl Described for $ty {
            const DESCRIPTION: &'static str = $desc;

            fn method_descriptions() -> &'static [(&'static str, &'static str)] {
                &[$((stringify!($method), $mdesc)),*]
            }
        }
    };
}

#[derive(Debug, Default, Clone, PartialEq)]
struct MyType;

impl MyType {
    fn my_method(&self) {}

    #[must_use = "the greeting is the whole point of calling this"]
    fn greeting(&self) -> String {
        "hello".to_string()
    }

    #[deprecated(note = "use `greeting` instead")]
    #[allow(dead_code)]
    fn old_greeting(&self) -> String {
        self.greeting()
    }
}

describe!(
    MyType,
    "This is a custom attribute on a type.",
    my_method => "This is a custom attribute on a method.",
);

/// Everything a type says about itself, type-level first.
fn collect_descriptions<T: Described>() -> Vec<String> {
    let mut out = Vec::new();
    if !T::DESCRIPTION.is_empty() {
        out.push(T::DESCRIPTION.to_string());
    }
    out.extend(
        T::method_descriptions()
            .iter()
            .map(|(_, desc)| desc.to_string()),
    );
    out
}

fn describe_method<T: Described>(name: &str) -> Option<&'static str> {
    T::method_descriptions()
        .iter()
        .find(|(method, _)| *method == name)
        .map(|(_, desc)| *desc)
}

fn main() {
    banner::start("Attributes and Metadata");

    banner::section("Type and method descriptions");
    for line in collect_descriptions::<MyType>() {
        println!("{line}");
    }

    banner::section("Lookup by method name");
    match describe_method::<MyType>("my_method") {
        Some(desc) => println!("my_method: {desc}"),
        None => println!("my_method: no description"),
    }
    MyType.my_method();

    banner::section("Compiler attributes");
    let value = MyType::default();
    println!("#[derive(Debug, Default, Clone, PartialEq)] -> {:?}", value.clone());
    println!("#[must_use] greeting -> {}", value.greeting());
    println!("#[deprecated] old_greeting would warn at every call site");
}
