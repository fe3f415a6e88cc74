use std::process::Command;

fn plategen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plategen"))
}

#[test]
fn exit_code_usage_is_1_for_missing_args() {
    let status = plategen().args(["build"]).status().expect("run plategen");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_usage_is_1_for_unknown_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("layout.json");
    std::fs::write(&layout, r#"[["a"]]"#).expect("write layout");

    let status = plategen()
        .args(["build", layout.to_str().unwrap(), "--format", "step"])
        .status()
        .expect("run plategen build");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn help_is_not_an_error() {
    let status = plategen().args(["--help"]).status().expect("run plategen");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn exit_code_input_is_2_for_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    let output = dir.path().join("output");

    let status = plategen()
        .args([
            "build",
            missing.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("run plategen build");
    assert_eq!(status.code(), Some(2));
    assert!(!output.exists());
}

#[test]
fn exit_code_input_is_2_for_malformed_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("bad.json");
    std::fs::write(&layout, r#"[["a", {w:]]"#).expect("write layout");

    let out = plategen()
        .args(["build", layout.to_str().unwrap()])
        .current_dir(dir.path())
        .output()
        .expect("run plategen build");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("could not parse layout"), "{stderr}");
}

#[test]
fn exit_code_input_is_2_for_unsupported_variant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("layout.json");
    std::fs::write(&layout, r#"[["a"]]"#).expect("write layout");
    let options = dir.path().join("options.yaml");
    std::fs::write(&options, "stabilizerCutoutType: costar\n").expect("write options");

    let out = plategen()
        .args([
            "build",
            layout.to_str().unwrap(),
            "-c",
            options.to_str().unwrap(),
        ])
        .current_dir(dir.path())
        .output()
        .expect("run plategen build");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("costar"), "{stderr}");
}

#[test]
fn exit_code_processing_is_3_for_empty_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("empty.json");
    std::fs::write(&layout, "[]").expect("write layout");

    let status = plategen()
        .args(["build", layout.to_str().unwrap()])
        .current_dir(dir.path())
        .status()
        .expect("run plategen build");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn exit_code_processing_is_3_for_oversized_plate_radius() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("layout.json");
    std::fs::write(&layout, r#"[["a"]]"#).expect("write layout");
    let options = dir.path().join("options.json");
    std::fs::write(&options, r#"{"plateRadius": 50}"#).expect("write options");

    let status = plategen()
        .args([
            "build",
            layout.to_str().unwrap(),
            "--options",
            options.to_str().unwrap(),
        ])
        .current_dir(dir.path())
        .status()
        .expect("run plategen build");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn exit_code_processing_is_3_for_out_of_range_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = dir.path().join("far.json");
    std::fs::write(&layout, r#"[[{x:5e27},"a"]]"#).expect("write layout");

    let out = plategen()
        .args(["build", layout.to_str().unwrap()])
        .current_dir(dir.path())
        .output()
        .expect("run plategen build");
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("key 0"), "{stderr}");
}
