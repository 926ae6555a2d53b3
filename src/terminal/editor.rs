//! External editor resolution and launch.

use crate::domain::error::{Result, YapError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Editor used when neither `$EDITOR` nor the config names one.
pub const DEFAULT_EDITOR: &str = "nvim";

/// Picks the editor command: `$EDITOR`, then the configured editor, then
/// [`DEFAULT_EDITOR`]. Blank values are skipped.
///
/// ```
/// use yappad::terminal::editor::resolve_editor;
///
/// assert_eq!(resolve_editor(Some("vim".into()), Some("hx")), "vim");
/// assert_eq!(resolve_editor(None, Some("hx")), "hx");
/// assert_eq!(resolve_editor(Some("  ".into()), None), "nvim");
/// ```
#[must_use]
pub fn resolve_editor(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|e| !e.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|e| !e.trim().is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Runs `editor` on `path` with the terminal's stdio and waits for it.
///
/// The editor string may carry arguments (`code --wait`); it is split on
/// whitespace and the path is appended last.
///
/// # Errors
///
/// Returns [`YapError::Editor`] if the command is empty, cannot be spawned,
/// or exits unsuccessfully.
pub fn launch(editor: &str, path: &Path) -> Result<()> {
    let _span = tracing::debug_span!("launch_editor", editor, path = %path.display()).entered();

    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| YapError::Editor("no editor command".to_string()))?;

    let status = Command::new(program)
        .args(words)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| YapError::Editor(format!("failed to launch {program}: {e}")))?;

    if !status.success() {
        return Err(YapError::Editor(format!("{program} exited with {status}")));
    }

    tracing::debug!("editor exited");
    Ok(())
}
