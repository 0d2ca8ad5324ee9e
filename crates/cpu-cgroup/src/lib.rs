// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! CPU quota control for cgroup v1 hierarchies.
//!
//! Reads and writes the CFS scheduler control files of a cgroup to express a
//! CPU limit as a fraction of cores (quota-per-period). Stateless: every
//! operation is a plain read or write of a control file, and any I/O error
//! is propagated to the caller untranslated. Discovering or mounting the
//! hierarchy is the caller's concern.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod control_group;
pub mod cpu;

pub use control_group::ControlGroup;
pub use cpu::CpuController;
