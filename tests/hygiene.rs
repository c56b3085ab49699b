//! Hygiene: coding standards checked at test time.
//!
//! Scans the crate's production sources for patterns the site code must not
//! use. Every budget is zero. A page script that panics takes every other
//! controller down with it, and a swallowed error leaves nothing in the
//! console to debug from.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

/// Panics: each one aborts the wasm module.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

/// Silent loss: errors discarded without being logged.
const DISCARDS: &[Budget] = &[Budget { pattern: "let _ =", max: 0 }, Budget { pattern: ".ok()", max: 0 }];

/// Style and structure.
const STYLE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`; sibling `_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rust || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let listing: Vec<String> = found.iter().map(|(path, n)| format!("  {path}: {n}")).collect();
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {}.\n{}",
                budget.pattern,
                budget.max,
                listing.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn discard_budgets() {
    check(DISCARDS);
}

#[test]
fn style_budgets() {
    check(STYLE);
}

#[test]
fn every_test_file_is_wired_to_its_module() {
    let mut tests = Vec::new();
    collect_test_files(Path::new("src"), &mut tests);
    let sources = source_files();
    for test in tests {
        let Some(name) = test.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let marker = format!("#[path = \"{name}\"]");
        let dir = test.parent().map(Path::to_path_buf).unwrap_or_default();
        let wired = sources
            .iter()
            .any(|src| src.path.parent() == Some(dir.as_path()) && src.content.contains(&marker));
        assert!(wired, "{} is not included by any module in its directory", test.display());
    }
}

fn collect_test_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_test_files(&path, out);
        } else if path.to_string_lossy().ends_with("_test.rs") {
            out.push(path);
        }
    }
}

// =============================================================
// Wiring
// =============================================================

/// Names pulled in through `web_sys::` paths that need a cargo feature.
fn web_sys_names(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for (at, _) in content.match_indices("web_sys::") {
        let rest = &content[at + "web_sys::".len()..];
        let group = match rest.strip_prefix('{') {
            Some(inner) => inner.split('}').next().unwrap_or_default(),
            None => rest.split(|c: char| !c.is_alphanumeric() && c != '_').next().unwrap_or_default(),
        };
        for name in group.split(',').map(str::trim) {
            let gated = name == "console" || name.starts_with(|c: char| c.is_ascii_uppercase());
            if gated {
                names.push(name.to_owned());
            }
        }
    }
    names
}

fn declared_web_sys_features() -> Vec<String> {
    let manifest = fs::read_to_string("Cargo.toml").unwrap();
    let section = manifest.split("[dependencies.web-sys]").nth(1).unwrap();
    let list = section.split("features = [").nth(1).unwrap().split(']').next().unwrap();
    list.split(',')
        .map(|entry| entry.trim().trim_matches('"').to_owned())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[test]
fn every_web_sys_name_has_a_feature() {
    let features = declared_web_sys_features();
    assert!(features.iter().any(|f| f == "Window"));
    for file in source_files() {
        for name in web_sys_names(&file.content) {
            assert!(
                features.contains(&name),
                "{} uses web_sys::{name} without the `{name}` feature",
                file.path.display()
            );
        }
    }
}

#[test]
fn web_sys_names_cover_groups_and_paths() {
    let names = web_sys_names("use web_sys::{Event, HtmlElement};\nfn f(w: &web_sys::Window) { web_sys::window(); }");
    assert_eq!(names, vec!["Event", "HtmlElement", "Window"]);
}

#[test]
fn error_reporting_starts_before_mounting() {
    let entry = fs::read_to_string("src/lib.rs").unwrap();
    let report = entry.find("site::report_errors()").unwrap();
    let mount = entry.find("site::mount_when_ready()").unwrap();
    assert!(report < mount, "window errors must be reported from module start");
}
