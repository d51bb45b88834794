//! Build script to generate embedded decision-tree notation
//!
//! Reads rule fragment files and generates Rust source code with const strings.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_rule_notation(
        "data/knuth_6x4.rules",
        &Path::new(&out_dir).join("knuth.rs"),
        "KNUTH_6X4",
        "Knuth's minimax decision tree for 6 colors and 4 pegs",
    );

    // Rebuild if rule data changes
    println!("cargo:rerun-if-changed=data/knuth_6x4.rules");
}

/// Expand a fragment file into a single rule string.
///
/// The first `NAME = body` entry is the root; every later entry replaces its
/// placeholder `NAME` inside the root. Lines starting with `#` are comments.
fn generate_rule_notation(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (name, body) = line
                .split_once('=')
                .unwrap_or_else(|| panic!("Malformed entry in {input_path}: {line}"));
            (name.trim(), body.trim())
        });

    let (_, root) = entries
        .next()
        .unwrap_or_else(|| panic!("{input_path} contains no root rule"));

    let mut notation = root.to_string();
    for (name, body) in entries {
        assert!(
            notation.contains(name),
            "Fragment {name} is not referenced in {input_path}"
        );
        notation = notation.replace(name, body);
    }

    assert!(
        notation.chars().all(|c| c.is_ascii_digit() || "(),:;x{}".contains(c)),
        "Unresolved placeholder left in {input_path}"
    );

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated rule notation").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &str = \"{notation}\";").unwrap();
}
