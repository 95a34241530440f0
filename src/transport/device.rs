//! # Raw Device Transport
//!
//! This module writes printer data to a raw byte sink named by a path:
//! a local device node (`/dev/lp0`, `LPT1`), a spool file, or a Windows
//! network share (`\\server\printer`).
//!
//! The sink is opened the way a print job expects: write-only, created if
//! missing, truncated if present. Writes are synchronous and blocking with
//! no internal buffering, timeouts, or retries; a wedged printer stalls the
//! calling thread with the sink's own blocking semantics.
//!
//! ## Sharing
//!
//! One job owns one transport. The transport is exclusively held between
//! `open` and `shutdown`; serializing access across jobs is the caller's
//! responsibility.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::MatrizError;

/// # Printer Device Transport
///
/// Manages an open connection to a printer device or share.
///
/// ## Example
///
/// ```no_run
/// use matriz::transport::DeviceTransport;
/// use matriz::protocol::commands;
///
/// let mut transport = DeviceTransport::open("/dev/lp0")?;
/// transport.write_all(&commands::init())?;
/// transport.shutdown()?;
/// # Ok::<(), matriz::MatrizError>(())
/// ```
#[derive(Debug)]
pub struct DeviceTransport {
    file: File,
    path: PathBuf,
}

impl DeviceTransport {
    /// Open a connection to the printer.
    ///
    /// ## Parameters
    ///
    /// - `path`: device node, spool file, or network share path
    ///
    /// ## Errors
    ///
    /// Returns an error if the target cannot be opened for writing
    /// (unreachable share, missing device, permission denied).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MatrizError> {
        let path = path.as_ref();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                MatrizError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;

        debug!(path = %path.display(), "printer device opened");

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// The path this transport was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write data to the printer, blocking until the sink accepts it all.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), MatrizError> {
        self.file.write_all(data).map_err(|e| {
            MatrizError::Transport(format!("Write to {} failed: {}", self.path.display(), e))
        })
    }

    /// Flush and release the connection.
    ///
    /// Consumes the transport; the underlying handle is closed when it is
    /// dropped after the flush.
    pub fn shutdown(mut self) -> Result<(), MatrizError> {
        self.file.flush().map_err(|e| {
            MatrizError::Transport(format!("Flush of {} failed: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "printer device released");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_unreachable_path() {
        let path = std::env::temp_dir()
            .join("matriz-no-such-dir")
            .join("printer.prn");

        let result = DeviceTransport::open(&path);
        assert!(result.is_err());

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to open"));
    }

    #[test]
    fn test_write_and_shutdown() {
        let path = std::env::temp_dir().join(format!(
            "matriz-transport-{}.prn",
            std::process::id()
        ));

        let mut transport = DeviceTransport::open(&path).unwrap();
        assert_eq!(transport.path(), path.as_path());

        transport.write_all(&[0x1B, 0x40]).unwrap();
        transport.shutdown().unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written, vec![0x1B, 0x40]);
    }

    // Tests against a real printer device require hardware and are run
    // manually.
}
