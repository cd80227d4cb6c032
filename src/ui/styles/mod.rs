// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions.
//!
//! Every function takes the calling screen's [`StyleSet`](crate::ui::theme::StyleSet)
//! so colors come from one place.

pub mod button;
pub mod container;
pub mod tooltip;
