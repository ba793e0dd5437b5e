//! Deterministic and Fallback Cleanup
//! Example: scoped close, explicit close, and a resource the owner forgot
//!
//! Run with: cargo run --bin p16_cleanup

use language_tour::{banner, LoggedHandle, Resource, TourError};

fn create_and_forget(name: &str) {
    let resource = Resource::named(name);
    match resource.do_work() {
        Ok(line) => println!("{line}"),
        Err(err) => println!("Error: {err}"),
    }
    // No close: `Drop` releases it at the end of this scope.
}

fn main() {
    banner::start("Deterministic and Fallback Cleanup");

    banner::section("Scoped use (always closed)");
    let outcome = Resource::scoped("FileHandle1", LoggedHandle, |res| res.do_work());
    match outcome {
        Ok(line) => println!("{line}"),
        Err(err) => println!("Error: {err}"),
    }

    banner::section("Explicit close");
    let mut socket = Resource::named("Socket1");
    socket.close();
    socket.close();
    match socket.do_work() {
        Err(TourError::Disposed { name }) => println!("'{name}' refused work after close"),
        Err(err) => println!("Error: {err}"),
        Ok(line) => println!("{line}"),
    }
    drop(socket);

    banner::section("Forgotten resource (fallback on drop)");
    create_and_forget("NetworkConnection1");

    println!("\nProgram finished.");
}
