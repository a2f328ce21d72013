use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use glob::glob;
use tracing::debug;

const DUMP_STATE_PATTERN: &str = "dumpState_*.log";

/// Fixed location of the append-only battery service history.
pub fn history_path(base: &Path) -> PathBuf {
    base.join("battery_service").join("battery_service_main_history")
}

/// dumpState snapshots directly under `base`, most recently written first so
/// the freshest data is attempted first. A missing directory or a directory
/// without snapshots yields no candidates rather than an error.
pub fn dump_state_candidates(base: &Path) -> Vec<PathBuf> {
    let pattern = base.join(DUMP_STATE_PATTERN);
    let Some(pattern) = pattern.to_str() else {
        return Vec::new();
    };

    let mut candidates: Vec<(PathBuf, SystemTime)> = match glob(pattern) {
        Ok(paths) => paths
            .filter_map(Result::ok)
            .map(|path| {
                let mtime = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (path, mtime)
            })
            .collect(),
        Err(e) => {
            debug!("bad candidate pattern {}: {}", pattern, e);
            Vec::new()
        }
    };

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.into_iter().map(|(path, _)| path).collect()
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::time::Duration;

    use super::*;

    fn touch(dir: &Path, name: &str, age: Duration) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
        path
    }

    #[test]
    fn test_history_path_layout() {
        assert_eq!(
            history_path(Path::new("/storage/emulated/0/log")),
            PathBuf::from("/storage/emulated/0/log/battery_service/battery_service_main_history")
        );
    }

    #[test]
    fn test_missing_dir_yields_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(dump_state_candidates(&gone).is_empty());
    }

    #[test]
    fn test_only_matching_names_are_candidates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dumpState_2024.log", Duration::from_secs(10));
        touch(dir.path(), "dumpState_2024.txt", Duration::from_secs(10));
        touch(dir.path(), "logcat_2024.log", Duration::from_secs(10));

        let candidates = dump_state_candidates(dir.path());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].file_name().unwrap().to_str().unwrap(),
            "dumpState_2024.log"
        );
    }

    #[test]
    fn test_candidates_ordered_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dumpState_old.log", Duration::from_secs(3600));
        touch(dir.path(), "dumpState_new.log", Duration::from_secs(60));
        touch(dir.path(), "dumpState_mid.log", Duration::from_secs(600));

        let names: Vec<String> = dump_state_candidates(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["dumpState_new.log", "dumpState_mid.log", "dumpState_old.log"]
        );
    }
}
