// SPDX-License-Identifier: MPL-2.0
//! Test-pattern capture backend.
//!
//! Stands in for a real device in tests and on machines without one
//! (`--synthetic-camera`). Generates a moving colour-bar pattern at a fixed
//! resolution and frame pace so the viewfinder and capture paths can be
//! exercised end to end.

use super::backend::{CameraBackend, RawFrame};
use crate::error::CameraError;
use std::time::Duration;

pub const SYNTHETIC_WIDTH: u32 = 640;
pub const SYNTHETIC_HEIGHT: u32 = 480;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const BAR_COLORS: [[u8; 3]; 7] = [
    [235, 235, 235], // white
    [235, 235, 16],  // yellow
    [16, 235, 235],  // cyan
    [16, 235, 16],   // green
    [235, 16, 235],  // magenta
    [235, 16, 16],   // red
    [16, 16, 235],   // blue
];

pub struct SyntheticBackend {
    width: u32,
    height: u32,
    tick: u64,
    open: bool,
}

impl SyntheticBackend {
    pub fn new() -> Self {
        Self {
            width: SYNTHETIC_WIDTH,
            height: SYNTHETIC_HEIGHT,
            tick: 0,
            open: false,
        }
    }

    /// Renders the colour bars, shifted by the tick so the preview visibly
    /// moves.
    fn render(&self) -> Vec<u8> {
        let width = self.width as usize;
        let height = self.height as usize;
        let bar_width = width / BAR_COLORS.len();
        let shift = (self.tick as usize * 2) % width;

        let mut rgba = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            // darken the lower quarter so captures have some structure
            let dim = if y * 4 >= height * 3 { 96 } else { 0 };
            for x in 0..width {
                let shifted = (x + shift) % width;
                let bar = (shifted / bar_width.max(1)).min(BAR_COLORS.len() - 1);
                let [r, g, b] = BAR_COLORS[bar];
                rgba.extend_from_slice(&[
                    r.saturating_sub(dim),
                    g.saturating_sub(dim),
                    b.saturating_sub(dim),
                    255,
                ]);
            }
        }
        rgba
    }
}

impl Default for SyntheticBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraBackend for SyntheticBackend {
    fn open(&mut self) -> Result<(), CameraError> {
        self.open = true;
        Ok(())
    }

    fn frame(&mut self) -> Result<RawFrame, CameraError> {
        if !self.open {
            return Err(CameraError::StreamFailed(
                "synthetic stream not opened".to_string(),
            ));
        }

        // pace like a 30fps device so the worker loop behaves realistically
        std::thread::sleep(FRAME_INTERVAL);
        self.tick = self.tick.wrapping_add(1);

        Ok(RawFrame {
            width: self.width,
            height: self.height,
            rgba: self.render(),
        })
    }
}
