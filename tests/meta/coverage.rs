//! Structural checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Entry points and module declaration files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        let file_name = Path::new(relative)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("path outside base directory"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn logic_files(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let mut found = BTreeSet::new();
        if let Err(error) = rust_files(base, base, &mut found) {
            panic!("Failed to scan {dir}: {error}");
        }
        found.retain(|relative| !is_structural(relative));
        found
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = logic_files(UNIT_DIR);
        let missing: Vec<String> = logic_files(SRC_DIR)
            .into_iter()
            .filter(|relative| !tests.contains(relative))
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = logic_files(SRC_DIR);
        let orphaned: Vec<String> = logic_files(UNIT_DIR)
            .into_iter()
            .filter(|relative| !sources.contains(relative))
            .map(|relative| format!("  - tests/unit/{relative} -> src/{relative} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut without_tests = Vec::new();
        for relative in logic_files("tests") {
            let path = Path::new("tests").join(&relative);
            match fs::read_to_string(&path) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => without_tests.push(format!("  - {}", path.display())),
                Err(error) => panic!("Failed to read {}: {error}", path.display()),
            }
        }

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
