// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! CFS quota operations over the `cpu` controller.

use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::control_group::ControlGroup;

/// Subsystem name of the CPU controller.
pub const CPU_SUBSYSTEM: &str = "cpu";

/// CFS scheduler period, in microseconds.
pub const CFS_PERIOD_US: &str = "cpu.cfs_period_us";

/// CFS scheduler quota, in microseconds. `-1` means unlimited.
pub const CFS_QUOTA_US: &str = "cpu.cfs_quota_us";

/// Expresses a cgroup's CPU limit as a fraction of cores by reading and
/// writing the CFS quota files.
///
/// No internal state, no retries: each operation is one or two control-file
/// accesses, and I/O errors (missing subsystem, permission denied) surface
/// directly.
#[derive(Debug, Clone)]
pub struct CpuController {
    group: ControlGroup,
}

impl CpuController {
    #[must_use]
    pub fn new(group: ControlGroup) -> Self {
        Self { group }
    }

    /// CPU controller of the hierarchy mounted at `mount`.
    #[must_use]
    pub fn from_mount(mount: impl Into<PathBuf>) -> Self {
        Self::new(ControlGroup::new(mount, CPU_SUBSYSTEM))
    }

    /// Caps the group at `cores` CPUs by writing
    /// quota = floor(period × cores).
    ///
    /// `cores` is not validated; a non-positive value is written as-is.
    pub fn set_limit_cores(&self, cores: f64) -> io::Result<()> {
        let period: u64 = self.read_value(CFS_PERIOD_US)?;
        let quota = (period as f64 * cores).floor() as i64;
        self.group.write(CFS_QUOTA_US, &quota.to_string())
    }

    /// Current limit as a fraction of one core.
    ///
    /// Negative when the quota is unset (the kernel's `-1` convention), and
    /// may exceed the machine's core count; both are returned as-is.
    pub fn get_limit_cores(&self) -> io::Result<f64> {
        let period: u64 = self.read_value(CFS_PERIOD_US)?;
        let quota: i64 = self.read_value(CFS_QUOTA_US)?;
        Ok(quota as f64 / period as f64)
    }

    /// Removes the quota by writing the `-1` sentinel.
    pub fn reset_limit(&self) -> io::Result<()> {
        self.group.write(CFS_QUOTA_US, "-1")
    }

    fn read_value<T>(&self, name: &str) -> io::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.group.read(name)?;
        raw.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to parse {name} value {raw:?}: {e}"),
            )
        })
    }
}
