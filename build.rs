//! Build script to generate the embedded word-pair list
//!
//! Reads `data/pairs.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_pair_list(
        "data/pairs.txt",
        &Path::new(&out_dir).join("pairs.rs"),
        "PAIRS",
        "Built-in synonym and antonym pairs",
    );

    // Rebuild if the pair list changes
    println!("cargo:rerun-if-changed=data/pairs.txt");
}

fn generate_pair_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Each entry is (first, second, are_synonyms); comments and blank lines are dropped
    let entries: Vec<(&str, &str, bool)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [first, second, kind] => (*first, *second, *kind == "syn"),
                _ => panic!("Malformed line in {input_path}: {line}"),
            }
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated pair list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} as `(first, second, are_synonyms)`").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, bool)] = &[").unwrap();

    for (first, second, are_synonyms) in entries {
        writeln!(output, "    ({first:?}, {second:?}, {are_synonyms}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of pairs in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
