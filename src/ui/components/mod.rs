// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`modal`] - Dialog layered over a screen with a dismissable backdrop,
//!   plus the open/closed bookkeeping screens use for their dialogs
//! - [`section`] - Card with a title, used by the home and contact screens
//! - [`badge`] - Status badge and technology tags

pub mod badge;
pub mod modal;
pub mod section;
