//! Build script to embed the default dictionary
//!
//! Reads `data/dictionary.txt` and generates a const array so the game can be
//! played without a dictionary file on disk.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/dictionary.txt",
        &Path::new(&out_dir).join("dictionary.rs"),
        "DEFAULT_WORDS",
    );

    println!("cargo:rerun-if-changed=data/dictionary.txt");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines are separators in the data file, not words
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Default dictionary ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
