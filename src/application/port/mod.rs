// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`link`]: Handing `https:`/`mailto:` links to the host operating system
//!
//! # Design Notes
//!
//! - Ports use only plain Rust types (no Iced handles, no OS types)
//! - Traits are `Send + Sync` so adapters can be shared freely

pub mod link;

pub use link::{ExternalLink, LinkDispatcher, LinkScheme};
