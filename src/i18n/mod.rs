// SPDX-License-Identifier: MPL-2.0
//! Internationalization with Fluent.

pub mod fluent;
