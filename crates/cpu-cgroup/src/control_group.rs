// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Read/write access to the control files of one cgroup hierarchy.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

/// Default mount point of the cgroup controller hierarchies.
pub const DEFAULT_MOUNT: &str = "/sys/fs/cgroup";

/// A directory of readable/writable control files for one subsystem.
///
/// Control files are text pseudo-files; reads and writes go straight to the
/// filesystem with whatever atomicity the kernel interface provides.
/// Concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct ControlGroup {
    path: PathBuf,
}

impl ControlGroup {
    /// Addresses the `subsystem` hierarchy under `mount`,
    /// e.g. `/sys/fs/cgroup/cpu`.
    #[must_use]
    pub fn new(mount: impl Into<PathBuf>, subsystem: &str) -> Self {
        Self {
            path: mount.into().join(subsystem),
        }
    }

    /// Reads the named control file, with trailing whitespace trimmed.
    pub fn read(&self, name: &str) -> io::Result<String> {
        let contents = fs::read_to_string(self.path.join(name))?;
        Ok(contents.trim_end().to_string())
    }

    /// Writes `value` to the named control file.
    pub fn write(&self, name: &str, value: &str) -> io::Result<()> {
        let file = self.path.join(name);
        fs::write(&file, value)?;
        debug!(value, "Wrote control file {}", file.display());
        Ok(())
    }
}
