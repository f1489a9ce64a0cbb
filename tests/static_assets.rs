//! Static Asset Tests
//!
//! Verifies that the asset writer materializes the bundled script and
//! portrait beneath an arbitrary root, byte-for-byte.

use std::fs;
use std::path::Path;

use charforge::assets::{PORTRAIT_SVG, SCRIPT_JS, STATIC_ASSETS};
use charforge::storage::{write_asset, write_static_assets, StorageError};
use tempfile::tempdir;

/// Snapshot of every file under `root`, as (relative path, bytes).
fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<(String, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn writes_script_byte_for_byte() {
    let dir = tempdir().unwrap();

    write_static_assets(dir.path()).unwrap();

    let script = fs::read(dir.path().join("static/js/script.js")).unwrap();
    assert_eq!(script, SCRIPT_JS.as_bytes());
}

#[test]
fn writes_svg_markup_to_png_path() {
    let dir = tempdir().unwrap();

    write_static_assets(dir.path()).unwrap();

    let portrait = fs::read(dir.path().join("static/img/portrait_placeholder.png")).unwrap();
    assert_eq!(portrait, PORTRAIT_SVG.as_bytes());
    // Text markup, not a PNG signature.
    assert!(!portrait.starts_with(b"\x89PNG"));
    assert!(portrait.starts_with(b"<svg"));
}

#[test]
fn creates_missing_directories() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("fresh").join("site");
    assert!(!root.exists());

    write_static_assets(&root).unwrap();

    assert!(root.join("static/js").is_dir());
    assert!(root.join("static/img").is_dir());
}

#[test]
fn second_run_leaves_tree_unchanged() {
    let dir = tempdir().unwrap();

    write_static_assets(dir.path()).unwrap();
    let first = snapshot(dir.path());
    write_static_assets(dir.path()).unwrap();
    let second = snapshot(dir.path());

    assert_eq!(first, second);
    assert_eq!(first.len(), STATIC_ASSETS.len());
}

#[test]
fn overwrites_stale_content() {
    let dir = tempdir().unwrap();
    let script_path = dir.path().join("static/js/script.js");
    fs::create_dir_all(script_path.parent().unwrap()).unwrap();
    let stale = "// stale build output, longer than the new script\n".repeat(40);
    fs::write(&script_path, stale).unwrap();

    write_static_assets(dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&script_path).unwrap(), SCRIPT_JS);
}

#[test]
fn unwritable_destination_fails() {
    let dir = tempdir().unwrap();
    // A regular file where the `static` directory should go.
    fs::write(dir.path().join("static"), "").unwrap();

    let err = write_static_assets(dir.path()).unwrap_err();

    assert!(matches!(err, StorageError::CreateDir { .. }));
    assert!(err.to_string().contains("Failed to create directory"));
}

#[cfg(unix)]
#[test]
fn read_only_directory_fails_unless_privileged() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let result = write_asset(&locked.join("script.js"), SCRIPT_JS);

    // Root ignores directory permissions; only assert when a plain write is denied.
    let plain_write = fs::write(locked.join(".check"), b"");
    if plain_write.is_err() {
        let err = result.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
