// SPDX-License-Identifier: MPL-2.0
//! `iced_shutter` is a minimal camera app built with the Iced GUI framework.
//!
//! It renders a live viewfinder, captures photos into an in-memory session
//! gallery, and shows them in a filmstrip with a full-screen detail view.
//! Captured photos do not survive the session; the only persistence is the
//! `settings.toml` preferences file.

pub mod app;
pub mod camera;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
