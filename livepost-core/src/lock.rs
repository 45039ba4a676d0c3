// File: livepost-core/src/lock.rs

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Error;

/// Exclusive guard for one invocation.
///
/// Holds an advisory `flock(LOCK_EX)` on the lock file for as long as the
/// guard lives. The file itself stays on disk; only the lock matters, and the
/// kernel releases it when the descriptor closes, including when the process
/// dies without unwinding.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
    _file: File,
}

impl RunLock {
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        if !try_lock_exclusive(&file)? {
            return Err(Error::AlreadyRunning(path.display().to_string()));
        }

        // Owner pid, for whoever inspects the file.
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        debug!("Acquired run lock {:?}", path);
        Ok(Self { path, _file: file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Non-blocking exclusive `flock`. `Ok(false)` means another descriptor
/// holds it.
#[cfg(unix)]
#[allow(unsafe_code)]
fn try_lock_exclusive(file: &File) -> io::Result<bool> {
    let fd = file.as_raw_fd();
    // SAFETY: `fd` comes from an open `File` that outlives this call, and
    // `LOCK_EX | LOCK_NB` is a valid `flock` operation.
    let rc = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if rc == 0 {
        return Ok(true);
    }
    let err = io::Error::last_os_error();
    if err.kind() == io::ErrorKind::WouldBlock || err.raw_os_error() == Some(libc::EWOULDBLOCK) {
        return Ok(false);
    }
    Err(err)
}

#[cfg(not(unix))]
fn try_lock_exclusive(_: &File) -> io::Result<bool> {
    Ok(true)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_release() {
        let dir = tempfile::tempdir().unwrap();
        let lock_path = dir.path().join("livepost.db.lock");

        let first = RunLock::acquire(&lock_path).unwrap();
        assert!(lock_path.exists());
        assert!(matches!(RunLock::acquire(&lock_path), Err(Error::AlreadyRunning(_))));

        drop(first);
        let again = RunLock::acquire(&lock_path).unwrap();
        assert_eq!(again.path(), lock_path.as_path());
    }

    #[test]
    fn leftover_lock_file_does_not_block() {
        let dir = tempfile::tempdir().unwrap();
        let lock_path = dir.path().join("state/livepost.db.lock");
        std::fs::create_dir_all(lock_path.parent().unwrap()).unwrap();
        // What a killed run leaves behind: the file, with no lock held on it.
        std::fs::write(&lock_path, "99999999\n").unwrap();

        let lock = RunLock::acquire(&lock_path).unwrap();
        let contents = std::fs::read_to_string(lock.path()).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());
    }

    #[test]
    fn released_lock_leaves_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let lock_path = dir.path().join("livepost.db.lock");

        drop(RunLock::acquire(&lock_path).unwrap());
        assert!(lock_path.exists());
        drop(RunLock::acquire(&lock_path).unwrap());
    }
}
