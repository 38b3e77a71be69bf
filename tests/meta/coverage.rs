//! Checks that every source file has a mirror test file under `tests/unit`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const MIRROR_ROOT: &str = "tests/unit";

    // Entry points and module declaration files carry no testable logic
    fn exempt(relative: &Path) -> bool {
        matches!(
            relative.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, io::Error> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            if !dir.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(io::Error::other)?
                        .to_path_buf();
                    found.insert(relative);
                }
            }
        }
        Ok(found)
    }

    // Verifies every source file is mirrored by a unit test file at the
    // same relative path, and that no mirror file has outlived its source.
    #[test]
    fn test_unit_mirror_matches_source_tree() {
        let sources = rust_files_under(Path::new(SRC_ROOT)).unwrap();
        let mirrors = rust_files_under(Path::new(MIRROR_ROOT)).unwrap();

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| !exempt(path) && !mirrors.contains(*path))
            .map(|path| format!("  src/{} has no tests/unit counterpart", path.display()))
            .collect();
        let orphaned: Vec<_> = mirrors
            .iter()
            .filter(|path| !exempt(path) && !sources.contains(*path))
            .map(|path| format!("  tests/unit/{} has no src counterpart", path.display()))
            .collect();

        assert!(
            missing.is_empty() && orphaned.is_empty(),
            "unit test mirror is out of sync:\n{}\n{}",
            missing.join("\n"),
            orphaned.join("\n")
        );
    }

    // Verifies no test file under tests/ is an empty shell.
    #[test]
    fn test_every_test_file_declares_tests() {
        let root = Path::new("tests");
        let hollow: Vec<_> = rust_files_under(root)
            .unwrap()
            .into_iter()
            .filter(|path| !exempt(path))
            .filter(|path| {
                fs::read_to_string(root.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  tests/{}", path.display()))
            .collect();

        assert!(
            hollow.is_empty(),
            "test files without any #[test] functions:\n{}",
            hollow.join("\n")
        );
    }
}
