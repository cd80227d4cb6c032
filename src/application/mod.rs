// SPDX-License-Identifier: MPL-2.0
//! Application layer - boundaries the portfolio talks to.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Screens and the app shell depend on ports, never on adapters
//! - Infrastructure implements the ports
//! - The app root picks the adapter at startup

pub mod port;
