use std::fs;
use std::path::PathBuf;

pub const OVERLAY_FILE: &str = "WorldMapOverlay.csv";
pub const OVERLAY_TILE_FILE: &str = "WorldMapOverlayTile.csv";
pub const OUTPUT_FILE: &str = "RevealDatabase.lua";

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn testdata_root() -> PathBuf {
    workspace_root().join("testdata")
}

pub fn fixtures_root() -> PathBuf {
    testdata_root().join("map-overlay")
}

pub fn fixture_dir(name: &str) -> PathBuf {
    fixtures_root().join(name)
}

pub fn lint_tree() -> PathBuf {
    testdata_root().join("check-globals")
}

/// Fixture directory names under `testdata/map-overlay`, sorted.
pub fn fixture_names() -> Vec<String> {
    let mut names = fs::read_dir(fixtures_root())
        .expect("fixtures root must exist")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}
