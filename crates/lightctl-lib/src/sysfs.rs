//! Sysfs actuator — trait seam + real backend.
//!
//! The wire format is the sysfs text convention: ASCII decimal integer
//! followed by a newline.

use std::collections::HashSet;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ── Error type ──

/// Actuator I/O errors, carrying the OS errno for HAL-style return codes.
#[derive(Debug)]
pub enum SysfsError {
    Open { path: PathBuf, errno: i32 },
    Write { path: PathBuf, errno: i32 },
}

impl SysfsError {
    /// The negated OS error code for this failure.
    pub fn errno(&self) -> i32 {
        match self {
            SysfsError::Open { errno, .. } | SysfsError::Write { errno, .. } => -errno,
        }
    }
}

impl fmt::Display for SysfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysfsError::Open { path, errno } => {
                write!(f, "failed to open {} (errno {errno})", path.display())
            }
            SysfsError::Write { path, errno } => {
                write!(f, "failed to write {} (errno {errno})", path.display())
            }
        }
    }
}

impl std::error::Error for SysfsError {}

pub type Result<T> = std::result::Result<T, SysfsError>;

// ── Trait ──

/// The actuator seam: everything the arbitration core needs from the device
/// files. `Send + Sync` so a HAL instance can be shared across caller threads.
pub trait SysfsLights: Send + Sync {
    /// Write a decimal level to the target path.
    fn write_level(&self, path: &Path, value: u32) -> Result<()>;

    /// Write the hardware blink flag. Same wire format as a level write.
    fn write_blink(&self, path: &Path, enable: bool) -> Result<()> {
        self.write_level(path, enable as u32)
    }

    /// Whether the target path currently exists on this device.
    fn exists(&self, path: &Path) -> bool;
}

// ── Real backend ──

/// Backend writing to the real device files.
///
/// Open failures are warned once per distinct path; repeats are silent so an
/// absent LED node cannot flood the log on every update.
#[derive(Debug, Default)]
pub struct SysfsBackend {
    warned: Mutex<HashSet<PathBuf>>,
}

impl SysfsBackend {
    pub fn new() -> Self {
        SysfsBackend::default()
    }

    fn warn_once(&self, path: &Path, err: &std::io::Error) {
        let mut warned = self.warned.lock().unwrap();
        if warned.insert(path.to_path_buf()) {
            log::warn!("failed to open {}: {err}", path.display());
        }
    }
}

impl SysfsLights for SysfsBackend {
    fn write_level(&self, path: &Path, value: u32) -> Result<()> {
        let mut file = match OpenOptions::new().read(true).write(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                self.warn_once(path, &e);
                return Err(SysfsError::Open {
                    path: path.to_path_buf(),
                    errno: e.raw_os_error().unwrap_or(libc::EIO),
                });
            }
        };
        file.write_all(format!("{value}\n").as_bytes())
            .map_err(|e| SysfsError::Write {
                path: path.to_path_buf(),
                errno: e.raw_os_error().unwrap_or(libc::EIO),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

// ── Mock backend for testing ──

/// In-memory backend for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;

    /// Records every write in order and lets tests inject missing paths and
    /// write failures. Interior mutability is `Mutex`-based so concurrent
    /// callers can share one instance.
    #[derive(Debug, Default)]
    pub struct MockLights {
        /// Full write history: (path, value), in call order.
        pub writes: Mutex<Vec<(PathBuf, u32)>>,
        /// Paths reported as nonexistent; writes to them fail with ENOENT.
        pub missing: Mutex<HashSet<PathBuf>>,
        /// Paths whose writes fail with EIO despite existing.
        pub failing: Mutex<HashSet<PathBuf>>,
    }

    impl MockLights {
        pub fn new() -> Self {
            MockLights::default()
        }

        pub fn mark_missing(&self, path: &Path) {
            self.missing.lock().unwrap().insert(path.to_path_buf());
        }

        pub fn fail_writes_to(&self, path: &Path) {
            self.failing.lock().unwrap().insert(path.to_path_buf());
        }

        /// All values written to `path`, in order.
        pub fn values_for(&self, path: &Path) -> Vec<u32> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .filter(|(p, _)| p == path)
                .map(|&(_, v)| v)
                .collect()
        }

        /// The most recent value written to `path`, if any.
        pub fn last_value(&self, path: &Path) -> Option<u32> {
            self.values_for(path).last().copied()
        }

        pub fn write_count(&self, path: &Path) -> usize {
            self.values_for(path).len()
        }

        pub fn clear_writes(&self) {
            self.writes.lock().unwrap().clear();
        }
    }

    impl SysfsLights for MockLights {
        fn write_level(&self, path: &Path, value: u32) -> Result<()> {
            if self.missing.lock().unwrap().contains(path) {
                return Err(SysfsError::Open {
                    path: path.to_path_buf(),
                    errno: libc::ENOENT,
                });
            }
            if self.failing.lock().unwrap().contains(path) {
                return Err(SysfsError::Write {
                    path: path.to_path_buf(),
                    errno: libc::EIO,
                });
            }
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), value));
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            !self.missing.lock().unwrap().contains(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockLights;
    use super::*;

    // ── SysfsBackend (real files via tempdir) ──

    #[test]
    fn backend_writes_decimal_and_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brightness");
        std::fs::write(&path, "0\n").unwrap();

        let backend = SysfsBackend::new();
        backend.write_level(&path, 149).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("149\n"), "got: {contents:?}");
    }

    #[test]
    fn backend_blink_writes_one_and_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blink");
        std::fs::write(&path, "0\n").unwrap();

        let backend = SysfsBackend::new();
        backend.write_blink(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("1\n"));
    }

    #[test]
    fn backend_missing_path_returns_enoent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-node");

        let backend = SysfsBackend::new();
        let err = backend.write_level(&path, 1).unwrap_err();
        assert_eq!(err.errno(), -libc::ENOENT);
        assert!(matches!(err, SysfsError::Open { .. }));

        // Second failure for the same path takes the silent branch.
        let err = backend.write_level(&path, 1).unwrap_err();
        assert_eq!(err.errno(), -libc::ENOENT);
    }

    #[test]
    fn backend_exists_probes_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present");
        std::fs::write(&present, "0\n").unwrap();

        let backend = SysfsBackend::new();
        assert!(backend.exists(&present));
        assert!(!backend.exists(&dir.path().join("absent")));
    }

    // ── Error type ──

    #[test]
    fn errno_is_negated() {
        let e = SysfsError::Write {
            path: "/x".into(),
            errno: libc::EIO,
        };
        assert_eq!(e.errno(), -libc::EIO);
        assert!(e.to_string().contains("/x"));
    }

    // ── MockLights ──

    #[test]
    fn mock_records_writes_in_order() {
        let mock = MockLights::new();
        let p = Path::new("/sys/test");
        mock.write_level(p, 1).unwrap();
        mock.write_level(p, 2).unwrap();
        assert_eq!(mock.values_for(p), vec![1, 2]);
        assert_eq!(mock.last_value(p), Some(2));
        assert_eq!(mock.write_count(p), 2);
    }

    #[test]
    fn mock_missing_path_fails_and_does_not_exist() {
        let mock = MockLights::new();
        let p = Path::new("/sys/gone");
        mock.mark_missing(p);
        assert!(!mock.exists(p));
        let err = mock.write_level(p, 1).unwrap_err();
        assert_eq!(err.errno(), -libc::ENOENT);
    }

    #[test]
    fn mock_injected_write_failure() {
        let mock = MockLights::new();
        let p = Path::new("/sys/bad");
        mock.fail_writes_to(p);
        assert!(mock.exists(p), "failing path still exists");
        let err = mock.write_level(p, 1).unwrap_err();
        assert_eq!(err.errno(), -libc::EIO);
        assert_eq!(mock.write_count(p), 0, "failed write must not be recorded");
    }
}
