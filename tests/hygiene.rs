//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for patterns that panic in the
//! browser or silently drop host errors. Every budget is zero; a failing
//! theme write has to be logged, not discarded.

use std::fs;
use std::path::Path;

/// (pattern, why it is banned)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards an error without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("controller.rs")),
        "hygiene scan found no sources; run from the crate root"
    );
}

#[test]
fn banned_patterns_absent() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, reason) in BANNED {
        for (path, count) in hits_for(&files, pattern) {
            report.push(format!("  {path}: {count} x `{pattern}` ({reason})"));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
