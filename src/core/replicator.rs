use crate::domain::model::CopyReport;
use crate::domain::ports::Replicator;
use crate::utils::error::{Result, StageError};
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Mirror-by-overwrite copy against the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsReplicator;

#[async_trait]
impl Replicator for FsReplicator {
    async fn replicate(&self, source: &Path, destination: &Path) -> Result<CopyReport> {
        let mut report = CopyReport::new(destination.to_path_buf());
        copy_tree(source, destination, &mut report)?;
        Ok(report)
    }
}

fn copy_tree(source: &Path, destination: &Path, report: &mut CopyReport) -> Result<()> {
    // Source is opened before the destination is created, so an unreadable
    // source leaves the destination untouched.
    let entries = fs::read_dir(source)
        .map_err(|e| StageError::from_io("reading directory", source, e))?;

    if !destination.is_dir() {
        fs::create_dir_all(destination)
            .map_err(|e| StageError::from_io("creating directory", destination, e))?;
        report.dirs_created += 1;
    }

    for entry in entries {
        let entry = entry.map_err(|e| StageError::from_io("reading directory", source, e))?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        // Follows symlinks, so a linked directory is copied as its content.
        let metadata =
            fs::metadata(&from).map_err(|e| StageError::from_io("inspecting", &from, e))?;

        if metadata.is_dir() {
            copy_tree(&from, &to, report)?;
        } else {
            let bytes =
                fs::copy(&from, &to).map_err(|e| StageError::from_io("copying file", &from, e))?;
            report.files_copied += 1;
            report.bytes_copied += bytes;
            tracing::debug!("copied {} -> {}", from.display(), to.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_nested_tree_preserving_structure() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("dependencies");
        let dest = tmp.path().join("bin").join("Debug");
        write_file(&source.join("readme.txt"), b"hello");
        write_file(&source.join("lib").join("a.dll"), b"binary-a");

        let mut report = CopyReport::new(dest.clone());
        copy_tree(&source, &dest, &mut report).unwrap();

        assert_eq!(fs::read(dest.join("readme.txt")).unwrap(), b"hello");
        assert_eq!(fs::read(dest.join("lib/a.dll")).unwrap(), b"binary-a");
        assert_eq!(report.files_copied, 2);
        assert_eq!(report.bytes_copied, 13);
    }

    #[test]
    fn test_overwrites_stale_files_and_keeps_unrelated_ones() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("dependencies");
        let dest = tmp.path().join("out");
        write_file(&source.join("lib").join("a.dll"), b"fresh");
        write_file(&dest.join("lib").join("a.dll"), b"stale-old-content");
        write_file(&dest.join("local.config"), b"keep me");

        let mut report = CopyReport::new(dest.clone());
        copy_tree(&source, &dest, &mut report).unwrap();

        assert_eq!(fs::read(dest.join("lib/a.dll")).unwrap(), b"fresh");
        assert_eq!(fs::read(dest.join("local.config")).unwrap(), b"keep me");
    }

    #[test]
    fn test_running_twice_matches_running_once() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("dependencies");
        let dest = tmp.path().join("out");
        write_file(&source.join("a.txt"), b"one");
        write_file(&source.join("sub").join("b.txt"), b"two");

        for _ in 0..2 {
            let mut report = CopyReport::new(dest.clone());
            copy_tree(&source, &dest, &mut report).unwrap();
        }

        assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"one");
        assert_eq!(fs::read(dest.join("sub/b.txt")).unwrap(), b"two");
    }

    #[test]
    fn test_missing_source_fails_without_creating_files() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("no-such-dir");
        let dest = tmp.path().join("out");

        let mut report = CopyReport::new(dest.clone());
        let result = copy_tree(&source, &dest, &mut report);

        assert!(matches!(result, Err(StageError::Io { .. })));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_replicator_port_reports_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("dependencies");
        let dest = tmp.path().join("bin").join("Release");
        write_file(&source.join("a.dll"), b"payload");

        let report = FsReplicator.replicate(&source, &dest).await.unwrap();

        assert_eq!(report.destination, PathBuf::from(&dest));
        assert_eq!(report.files_copied, 1);
        assert!(report.dirs_created >= 1);
    }
}
