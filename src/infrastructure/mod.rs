// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`link`]: Opens links with the host's registered handler via the `open`
//!   crate (implements [`LinkDispatcher`])
//!
//! [`LinkDispatcher`]: crate::application::port::LinkDispatcher

pub mod link;

pub use link::SystemLinkDispatcher;
