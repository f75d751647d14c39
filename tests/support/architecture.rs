use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One line of a source file, addressed relative to the crate root.
pub struct SourceLine {
    pub path: String,
    pub number: usize,
    pub text: String,
}

impl fmt::Debug for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.number, self.text.trim())
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut pending = vec![dir.to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).unwrap_or_else(|e| panic!("failed to read {}: {e}", dir.display()));
        for entry in entries {
            let path = entry
                .unwrap_or_else(|e| panic!("failed to read entry in {}: {e}", dir.display()))
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

/// Every line of every `.rs` file under `relative_dir` accepted by `keep`.
fn scan(relative_dir: &str, keep: impl Fn(&Path, &str) -> bool) -> Vec<SourceLine> {
    let root = crate_root();
    let mut found = Vec::new();

    for file in rust_files(&root.join(relative_dir)) {
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
        let path = file
            .strip_prefix(&root)
            .unwrap_or(&file)
            .to_string_lossy()
            .replace('\\', "/");

        for (idx, text) in content.lines().enumerate() {
            if keep(&file, text) {
                found.push(SourceLine {
                    path: path.clone(),
                    number: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    found
}

/// Lines under `relative_dir` containing any of `patterns`.
pub fn lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<SourceLine> {
    scan(relative_dir, |_, text| patterns.iter().any(|p| text.contains(p)))
}

/// Lines of `mod.rs` files that are neither comments nor module declarations.
pub fn non_export_lines_in_mod_files(relative_dir: &str) -> Vec<SourceLine> {
    scan(relative_dir, |file, text| {
        let line = text.trim();
        file.file_name().is_some_and(|name| name == "mod.rs")
            && !(line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg"))
    })
}

/// Contents of a file relative to the crate root.
pub fn read_source(relative_path: &str) -> String {
    fs::read_to_string(crate_root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}
