//! Hygiene: coding standards enforced at test time.
//!
//! Scans the fleet crate's production sources for antipatterns. Every budget
//! is zero; an overlay must never take the page down with it.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    what: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, what: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, what: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, what: "explicit panic" },
    Budget { pattern: "unreachable!(", max: 0, what: "explicit panic" },
    Budget { pattern: "todo!(", max: 0, what: "stub" },
    Budget { pattern: "unimplemented!(", max: 0, what: "stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, what: "discards a result unread" },
    Budget { pattern: ".ok()", max: 0, what: "discards an error unread" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, what: "hides unused code" },
];

/// Modules that must stay host-agnostic. Browser bindings belong in `web.rs`.
const PORTABLE: &[&str] = &["orbit.rs", "surface.rs", "render.rs", "driver.rs", "lifecycle.rs", "config.rs", "host.rs"];

/// Production `.rs` files under `src/`, excluding `_test.rs` files.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut report = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            report.push(format!(
                "`{}` ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.what,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn browser_bindings_stay_in_web_module() {
    let files = source_files();
    let leaks: Vec<(String, usize)> = ["web_sys", "wasm_bindgen", "js_sys"]
        .iter()
        .flat_map(|pattern| hits(&files, pattern))
        .filter(|(path, _)| PORTABLE.iter().any(|name| path.ends_with(name)))
        .collect();
    assert!(leaks.is_empty(), "browser bindings outside web.rs:\n{}", format_hits(&leaks));
}
