use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidreport_cmd() -> Command {
    Command::cargo_bin("vidreport").expect("Failed to find vidreport binary")
}

// The files below hold no real media, so every probe fails (with or without
// ffprobe installed) and durations are 0.00; sizes are still reported.

#[test]
fn test_report_basic() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("a"))?;
    fs::write(root.path().join("a").join("video1.mp4"), vec![0u8; 2048])?;
    fs::write(root.path().join("a").join("notes.txt"), "not media")?;

    vidreport_cmd()
        .arg(root.path())
        .assert()
        .success()
        .stdout(contains("=== Video Duration Report ==="))
        .stdout(contains("a/\n    video1.mp4 (0.00 minutes, 2.00 KB)\n"))
        .stdout(contains("  Total in folder: 0.00 minutes, 2.00 KB\n"))
        .stdout(contains("Total size of all videos: 2.00 KB\n"))
        .stdout(contains("notes.txt").not());

    Ok(())
}

#[test]
fn test_report_respects_depth() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested)?;
    fs::write(root.path().join("a").join("video1.mp4"), vec![0u8; 2048])?;
    fs::write(nested.join("video2.mp4"), vec![0u8; 2_097_152])?;

    vidreport_cmd()
        .arg(root.path())
        .args(["--depth", "1"])
        .assert()
        .success()
        .stdout(contains("a/b/").not())
        .stdout(contains("Total size of all videos: 2.00 KB\n"));

    vidreport_cmd()
        .arg(root.path())
        .args(["--depth", "2", "--jobs", "2"])
        .assert()
        .success()
        .stdout(contains("a/b/\n    video2.mp4 (0.00 minutes, 2.00 MB)\n"))
        .stdout(contains("Total size of all videos: 2.00 MB\n"));

    Ok(())
}

#[test]
fn test_report_non_existent_root() -> Result<(), Box<dyn Error>> {
    let non_existent = PathBuf::from("surely/this/does/not/exist");

    vidreport_cmd()
        .arg(&non_existent)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("is not a valid folder"));

    Ok(())
}

#[test]
fn test_output_defaults_to_resume_md() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    fs::write(root.path().join("clip.mkv"), vec![0u8; 10])?;

    vidreport_cmd()
        .arg(root.path())
        .arg("--output")
        .assert()
        .success();

    let markdown = fs::read_to_string(root.path().join("resume.md"))?;
    assert!(markdown.starts_with("## ./\n- clip.mkv (0.00 minutes, 10 bytes)\n"));
    assert!(markdown.contains("**Total duration of all videos: 0.00 minutes**"));
    Ok(())
}

#[test]
fn test_output_to_explicit_path() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let out_dir = tempdir()?;
    let out_file = out_dir.path().join("r.md");

    vidreport_cmd()
        .arg(root.path())
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success();

    assert!(out_file.exists());
    assert!(!root.path().join("resume.md").exists());
    Ok(())
}

#[test]
fn test_output_write_failure_keeps_report() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let unwritable = root.path().join("no_such_dir").join("r.md");

    vidreport_cmd()
        .arg(root.path())
        .arg("--output")
        .arg(&unwritable)
        .assert()
        .success()
        .stdout(contains("Total duration of all videos: 0.00 minutes"))
        .stderr(contains("Failed to write report"));

    Ok(())
}

#[test]
fn test_output_write_failure_reported_once() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let unwritable = root.path().join("no_such_dir").join("r.md");

    let output = vidreport_cmd()
        .arg(root.path())
        .arg("--output")
        .arg(&unwritable)
        .args(["--verbose"])
        .output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("Failed to write report").count(), 1, "stderr was: {stderr}");
    Ok(())
}

#[test]
fn test_invalid_jobs_rejected() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;

    vidreport_cmd()
        .arg(root.path())
        .args(["--jobs", "0"])
        .assert()
        .failure();

    Ok(())
}
