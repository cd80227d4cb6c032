// SPDX-License-Identifier: MPL-2.0
//! `portfolio` is a personal portfolio showcase built with the Iced GUI framework.
//!
//! Three screens (home, projects, contact) render a static content catalog.
//! A single theme store drives light and dark styling, and external links are
//! handed to the operating system through the [`application::port::LinkDispatcher`]
//! port.

pub mod app;
pub mod application;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
