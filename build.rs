//! Build script to generate the embedded word list
//!
//! Reads `data/words.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        WORD_LIST,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Built-in five-letter vocabulary",
    )
    .unwrap_or_else(|e| panic!("Failed to generate word list from {WORD_LIST}: {e}"));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = io::BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({count} words)")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;

    output.flush()
}
