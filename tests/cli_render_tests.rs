//! End-to-end tests for the `calligram` CLI.

use std::fs;
use std::process::Command;

/// Path to the calligram binary
fn calligram_bin() -> &'static str {
    env!("CARGO_BIN_EXE_calligram")
}

#[test]
fn test_render_basic_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("heart.svg");

    let output = Command::new(calligram_bin())
        .args([
            "render",
            "--text",
            "so much depends upon a red wheel barrow",
            "--shape",
            "heart",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Render should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(out_path.exists(), "SVG should exist at: {}", out_path.display());

    let content = fs::read_to_string(&out_path).expect("Failed to read SVG");
    assert!(content.contains("<svg"));
    assert!(content.contains("<rect"));
    assert!(content.contains("<text"));
    // default theme colors
    assert!(content.contains("#FFFFFF"));
    assert!(content.contains("#000000"));
}

#[test]
fn test_render_applies_theme_and_style_flags() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("styled.svg");

    let output = Command::new(calligram_bin())
        .args([
            "render",
            "--text",
            "ocean words",
            "--shape",
            "wave",
            "--theme",
            "ocean",
            "--font-size",
            "20",
            "--font-family",
            "Courier New",
            "--font-weight",
            "bold",
            "--font-style",
            "italic",
            "--letter-spacing",
            "4",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("#EBF5FB"), "ocean background missing");
    assert!(content.contains("#1A5276"), "ocean text color missing");
    assert!(content.contains("font-size=\"20px\""));
    assert!(content.contains("Courier New"));
    assert!(content.contains("font-weight=\"bold\""));
    assert!(content.contains("font-style=\"italic\""));
    assert!(content.contains("letter-spacing=\"4px\""));
}

#[test]
fn test_render_from_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("poem.txt");
    fs::write(&text_path, "a poem\nacross   lines").unwrap();
    let out_path = dir.path().join("file.svg");

    let output = Command::new(calligram_bin())
        .args([
            "render",
            "--text-file",
            text_path.to_str().unwrap(),
            "--shape",
            "circle",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(out_path.exists());
}

#[test]
fn test_render_unknown_shape_fails_with_validation_code() {
    let output = Command::new(calligram_bin())
        .args(["render", "--text", "hi", "--shape", "hexagon"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hexagon"));
    assert!(stderr.contains("heart"), "error should list valid shapes");
}

#[test]
fn test_render_unknown_theme_fails() {
    let output = Command::new(calligram_bin())
        .args(["render", "--text", "hi", "--theme", "neon"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_render_out_of_range_font_size_fails() {
    let output = Command::new(calligram_bin())
        .args(["render", "--text", "hi", "--font-size", "99"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_render_malformed_color_is_validation_error() {
    // multi-byte input must be rejected cleanly, not crash
    for color in ["a\u{20A4}ab", "#FFF", "not-a-color"] {
        let output = Command::new(calligram_bin())
            .args(["render", "--text", "hi", "--color", color])
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(2), "input: {color}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid hex color"));
    }
}

#[test]
fn test_render_without_text_fails() {
    let output = Command::new(calligram_bin())
        .args(["render", "--shape", "star"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_render_missing_text_file_is_io_error() {
    let output = Command::new(calligram_bin())
        .args(["render", "--text-file", "/nonexistent/poem.txt"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_shapes_lists_all_ten() {
    let output = Command::new(calligram_bin())
        .args(["shapes"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "heart", "dove", "circle", "wave", "spiral", "custom", "tag", "star", "butterfly",
        "tree",
    ] {
        assert!(stdout.contains(id), "missing shape {id}");
    }
}

#[test]
fn test_themes_lists_all_ten_with_colors() {
    let output = Command::new(calligram_bin())
        .args(["themes"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "default",
        "dark",
        "pastel",
        "vintage",
        "ocean",
        "forest",
        "sunset",
        "monochrome",
        "elegant",
        "vibrant",
    ] {
        assert!(stdout.contains(id), "missing theme {id}");
    }
    assert!(stdout.contains("#121212"));
}
