use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create a throwaway git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);

    (temp_dir, repo_path)
}

/// Write a file and commit it
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    if let Some(parent) = repo_path.join(file).parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(repo_path.join(file), content).expect("Failed to write file");

    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// Write a file and stage it without committing
pub fn stage_file(repo_path: &Path, file: &str, content: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
}

fn git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
