//! blogstore - in-memory blog content store CLI
//!
//! Drives the blog engine with operation scripts and prints the results.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the built-in demo
//! blogstore demo
//!
//! # Run your own script
//! blogstore run posts.toml --format json
//!
//! # Write a default configuration
//! blogstore config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
