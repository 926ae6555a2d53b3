//! Raw-mode terminal session.
//!
//! While a [`TerminalSession`] is active the terminal is in raw mode on the
//! alternate screen with mouse capture on and the cursor hidden. Dropping the
//! session, or panicking, puts everything back.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Guard owning the terminal's interactive state.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Switches the terminal into UI mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        setup()?;
        tracing::debug!("terminal session started");
        Ok(Self { active: true })
    }

    /// Hands the terminal back to the shell, e.g. for an editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn suspend(&mut self) -> io::Result<()> {
        if self.active {
            restore()?;
            self.active = false;
        }
        Ok(())
    }

    /// Takes the terminal back after [`suspend`](Self::suspend).
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// re-entered.
    pub fn resume(&mut self) -> io::Result<()> {
        if !self.active {
            setup()?;
            self.active = true;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
            tracing::debug!("terminal session ended");
        }
    }
}

fn setup() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
}

fn restore() -> io::Result<()> {
    let screen = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    screen
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            hook(info);
        }));
    });
}
