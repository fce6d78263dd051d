//! numera CLI
//!
//! Style-driven text-to-number parsing from the command line.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(numerac::run(&args));
}
