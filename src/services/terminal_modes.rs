//! Terminal mode management
//!
//! Enables raw mode, the alternate screen and (optionally) mouse capture,
//! and tracks what was enabled so `undo()` can restore the terminal on exit,
//! on drop, or from the panic hook via `emergency_cleanup()`.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{self, stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalModes {
    /// Create a new TerminalModes with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable raw mode, the alternate screen and, if requested, mouse capture.
    ///
    /// On error, automatically undoes any partially enabled modes. Failing to
    /// capture the mouse is not fatal; the viewer stays usable from the
    /// keyboard.
    pub fn enable(mouse: bool) -> io::Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e);
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e);
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        if mouse {
            if let Err(e) = stdout().execute(EnableMouseCapture) {
                tracing::warn!("Failed to enable mouse capture: {}", e);
            } else {
                modes.mouse_capture = true;
                tracing::debug!("Enabled mouse capture");
            }
        }

        Ok(modes)
    }

    /// Restore terminal to original state by disabling all enabled modes.
    ///
    /// Safe to call multiple times.
    pub fn undo(&mut self) {
        if self.mouse_capture {
            let _ = stdout().execute(DisableMouseCapture);
            self.mouse_capture = false;
            tracing::debug!("Disabled mouse capture");
        }

        // Raw mode goes before the alternate screen for cleaner output
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }

    pub fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture
    }

    pub fn alternate_screen_enabled(&self) -> bool {
        self.alternate_screen
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// For panic hooks, which have no access to the `TerminalModes` instance.
pub fn emergency_cleanup() {
    let _ = stdout().execute(DisableMouseCapture);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
