// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`capture`] - Live viewfinder with shutter button and permission states
//! - [`filmstrip`] - Horizontal strip of captured photo thumbnails
//! - [`detail`] - Full-screen photo view with caption
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized widget styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod capture;
pub mod design_tokens;
pub mod detail;
pub mod filmstrip;
pub mod notifications;
pub mod styles;
pub mod theming;
