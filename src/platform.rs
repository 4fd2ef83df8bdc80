//! Platform-specific configuration

use crossterm::event::KeyModifiers;
use std::process::Command;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the contact form hint line
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Build the command that hands a URI to the system's default handler.
/// For `mailto:` URIs this opens the user's mail composer.
#[cfg(target_os = "macos")]
pub fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(uri);
    cmd
}

#[cfg(target_os = "windows")]
pub fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", uri]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn opener_command(uri: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(uri);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_carries_uri() {
        let cmd = opener_command("mailto:someone@example.com");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
        assert!(args.iter().any(|a| a.contains("mailto:someone@example.com")));
    }
}
