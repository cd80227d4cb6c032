// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Profile header, about section, skills and calls to action
//! - [`projects`] - GitHub projects and school documents behind two tabs
//! - [`contact`] - Social links, with a confirmation step for email
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (modal, badges, section cards)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Style set computed from the theme flag
//! - [`theming`] - Theme mode and the theme store
//! - [`navbar`] - Bottom navigation bar

pub mod components;
pub mod contact;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod projects;
pub mod styles;
pub mod theme;
pub mod theming;
