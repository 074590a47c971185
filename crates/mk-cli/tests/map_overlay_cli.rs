use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use mk_test_example::{fixture_dir, fixture_names, OUTPUT_FILE, OVERLAY_FILE, OVERLAY_TILE_FILE};

fn temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should move forward")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("map-overlay-cli-{}-{}", name, nanos));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

fn run_with_flags(overlay: &Path, overlay_tile: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_map-overlay"))
        .arg("--overlay")
        .arg(overlay)
        .arg("--overlay-tile")
        .arg(overlay_tile)
        .arg("--output")
        .arg(output)
        .output()
        .expect("cli should execute")
}

fn describe(output: &Output) -> String {
    format!(
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn flags_render_every_fixture() {
    let out_dir = temp_dir("fixtures");

    for name in fixture_names() {
        let dir = fixture_dir(&name);
        let output_path = out_dir.join(format!("{}.lua", name));
        let output = run_with_flags(
            &dir.join(OVERLAY_FILE),
            &dir.join(OVERLAY_TILE_FILE),
            &output_path,
        );

        assert!(output.status.success(), "fixture {} failed\n{}", name, describe(&output));
        assert_eq!(
            fs::read_to_string(&output_path).expect("output should exist"),
            fs::read_to_string(dir.join(OUTPUT_FILE)).expect("expected output should exist"),
            "fixture {} output differs",
            name
        );
    }
}

#[test]
fn config_file_supplies_paths() {
    let out_dir = temp_dir("config");
    let dir = fixture_dir("basic");
    let output_path = out_dir.join("RevealDatabase.lua");
    let config = serde_config(
        &dir.join(OVERLAY_FILE),
        &dir.join(OVERLAY_TILE_FILE),
        &output_path,
    );
    let config_path = out_dir.join("config.json");
    fs::write(&config_path, config).expect("config should be written");

    let output = Command::new(env!("CARGO_BIN_EXE_map-overlay"))
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("cli should execute");

    assert!(output.status.success(), "{}", describe(&output));
    assert!(fs::read_to_string(&output_path)
        .expect("output should exist")
        .contains("[\"100:200:0:0\"] = \"500, 501\","));
}

#[test]
fn dangling_tile_reference_fails_with_join_integrity_error() {
    let out_dir = temp_dir("dangling");
    let overlay = out_dir.join("overlay.csv");
    let overlay_tile = out_dir.join("tile.csv");
    fs::copy(fixture_dir("basic").join(OVERLAY_FILE), &overlay).expect("overlay copy");
    fs::write(
        &overlay_tile,
        "ID,RowIndex,ColIndex,LayerIndex,FileDataID,WorldMapOverlayID\n1,0,0,0,500,404\n",
    )
    .expect("tile csv should be written");

    let output = run_with_flags(&overlay, &overlay_tile, &out_dir.join("out.lua"));

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[JOIN_INTEGRITY_ERROR]"), "{}", stderr);
    assert!(stderr.contains("missing overlay 404"), "{}", stderr);
    assert!(stderr.contains("tile.csv: Overlay tile 1"), "{}", stderr);
}

#[test]
fn non_integer_field_names_file_line_and_column() {
    let out_dir = temp_dir("format");
    let overlay = out_dir.join("overlay.csv");
    let overlay_tile = out_dir.join("tile.csv");
    fs::copy(fixture_dir("basic").join(OVERLAY_FILE), &overlay).expect("overlay copy");
    fs::write(
        &overlay_tile,
        "ID,RowIndex,ColIndex,LayerIndex,FileDataID,WorldMapOverlayID\n1,0,0,0,500,1\n2,0,0,0,n/a,1\n",
    )
    .expect("tile csv should be written");

    let output = run_with_flags(&overlay, &overlay_tile, &out_dir.join("out.lua"));

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[FORMAT_ERROR]"), "{}", stderr);
    assert!(stderr.contains("tile.csv:3"), "{}", stderr);
    assert!(stderr.contains("FileDataID"), "{}", stderr);
}

#[test]
fn missing_input_fails_with_io_error() {
    let out_dir = temp_dir("missing");
    let output = run_with_flags(
        &out_dir.join("nope.csv"),
        &out_dir.join("nope-tile.csv"),
        &out_dir.join("out.lua"),
    );

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[IO_ERROR]"));
}

fn serde_config(overlay: &Path, overlay_tile: &Path, output: &Path) -> String {
    serde_json::json!({
        "config": {
            "world_map_overlay": overlay,
            "world_map_overlay_tile": overlay_tile,
            "output": output,
        }
    })
    .to_string()
}
