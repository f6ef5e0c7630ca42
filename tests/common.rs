use assert_fs::TempDir;
use std::fs;

/// Builds a fixture tree:
/// root/
///   src/a.py                  "print(1)"
///   src/node_modules/dep.js   (excluded by directory name)
///   styles/site.css
///   README                    (no extension)
///   Makefile                  (no extension)
///   notes.txt                 (extension not in allow-list)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    let root = td.path();

    let src = root.join("src");
    fs::create_dir_all(src.join("node_modules")).unwrap();
    fs::write(src.join("a.py"), "print(1)").unwrap();
    fs::write(src.join("node_modules").join("dep.js"), "ignored").unwrap();

    let styles = root.join("styles");
    fs::create_dir_all(&styles).unwrap();
    fs::write(styles.join("site.css"), "body {}\n").unwrap();

    fs::write(root.join("README"), "text").unwrap();
    fs::write(root.join("Makefile"), "all:\n").unwrap();
    fs::write(root.join("notes.txt"), "notes\n").unwrap();

    td
}
