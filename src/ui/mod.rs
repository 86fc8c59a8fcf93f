// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`grid`] - Staggered thumbnail rows with the reveal controls
//! - [`lightbox`] - Full-screen overlay with navigation and the anchored
//!   open/close transition
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons (visual primitives)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod icons;
pub mod lightbox;
pub mod styles;
pub mod theming;
