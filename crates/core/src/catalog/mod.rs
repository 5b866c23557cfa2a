// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

mod assemble;
mod descriptor;
mod response;
mod table;

pub use assemble::{Assembler, AssemblerConfig, Identifiers};
pub use descriptor::{CatalogDescriptor, MediaType, UnsupportedMediaType};
pub use response::{CatalogResponse, Fingerprint};
pub use table::CatalogTable;
