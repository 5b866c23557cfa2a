// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Runtime primitives shared by every Marquee crate.
//!
//! - [`SharedRuntime`]: a cloneable handle to the multi-threaded tokio runtime
//!   that serves requests.
//! - [`hash`]: xxHash3 digests used to fingerprint catalog bodies.

pub mod hash;
mod shared;

pub use hash::{Hash128, xxh3_128};
pub use shared::SharedRuntime;
