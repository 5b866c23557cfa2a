// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Subsystem API crate providing common interfaces for Marquee subsystems
//!
//! This crate contains the lifecycle trait that long-running components (the
//! HTTP server) implement so the binary can start and stop them uniformly.

pub mod subsystem;

pub use subsystem::{BoxError, HealthStatus, Subsystem, SubsystemError};
