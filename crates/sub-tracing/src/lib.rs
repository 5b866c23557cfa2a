// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Process-wide tracing subscriber for Marquee binaries.
//!
//! ```ignore
//! use marquee_sub_tracing::{LogFormat, TracingBuilder};
//!
//! TracingBuilder::new().with_level("debug").with_format(LogFormat::Json).init()?;
//! ```

mod builder;

pub use builder::{LogFormat, TracingBuilder, TracingError};
