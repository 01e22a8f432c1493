use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_darkroom-gen")
}

#[test]
fn test_cli_generates_admin_pair() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .args(["generate", "admin", "galleries", "--crud"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let orm = dir.path().join("pages/api/admin/galleries.ts");
    let simple = dir.path().join("pages/api/admin/galleries-simple.ts");
    assert!(orm.exists(), "primary file missing");
    assert!(simple.exists(), "counterpart file missing");
    assert!(fs::read_to_string(&orm).unwrap().contains("PrismaClient"));
    assert!(fs::read_to_string(&simple).unwrap().contains("pool.connect()"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Next steps"));
}

#[test]
fn test_cli_pattern_override_emits_single_file() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .args([
            "generate",
            "admin",
            "galleries",
            "--crud",
            "--force-simple-pattern",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    // Explicit override: one file, no alternate suffix.
    assert!(dir.path().join("pages/api/admin/galleries.ts").exists());
    assert!(!dir.path().join("pages/api/admin/galleries-simple.ts").exists());
}

#[test]
fn test_cli_rejects_invalid_area_without_writing() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .args(["generate", "marketing", "galleries"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(!dir.path().join("pages").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid area"));
}

#[test]
fn test_cli_rejects_conflicting_pattern_flags() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .args([
            "generate",
            "admin",
            "galleries",
            "--force-simple-pattern",
            "--force-orm-pattern",
        ])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn test_cli_download_resource_is_nested_dynamic() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bin())
        .current_dir(dir.path())
        .args(["generate", "client", "download"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let path = dir
        .path()
        .join("pages/api/client/[slug]/download/[imageId].ts");
    assert!(path.exists(), "expected {path:?}");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("status(429)"));
    assert!(content.contains("getClientAddress"));
}

#[test]
fn test_cli_rerun_without_force_keeps_first_output() {
    let dir = TempDir::new().unwrap();
    let args = ["generate", "client", "galleries"];
    let first = Command::new(bin())
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("run cli");
    assert!(first.status.success());
    let path = dir.path().join("pages/api/client/galleries.ts");
    let original = fs::read_to_string(&path).unwrap();

    let second = Command::new(bin())
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("run cli");
    // A tolerated conflict still exits zero.
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Skipping existing handler file"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    let forced = Command::new(bin())
        .current_dir(dir.path())
        .args(["generate", "client", "galleries", "--force"])
        .output()
        .expect("run cli");
    assert!(forced.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
