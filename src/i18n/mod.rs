// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Catalog content (biography, project descriptions) is not translated; only the
//! interface chrome is.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time with `rust-embed`
//! - Fallback to the default locale when a key is missing

pub mod fluent;
