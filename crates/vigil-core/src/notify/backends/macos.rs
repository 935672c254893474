//! macOS notification backend using osascript.

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;

/// macOS notification backend via `osascript` display notification.
pub struct MacOsNotificationBackend;

impl NotificationBackend for MacOsNotificationBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && which::which("osascript").is_ok()
    }

    fn send(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        // AppleScript string literals escape only backslash and quote.
        let escaped_title = escape_applescript(title);
        let escaped_message = escape_applescript(message);
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escaped_message, escaped_title
        );

        let output = std::process::Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|e| NotifyError::SendFailed {
                message: format!("osascript exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(NotifyError::SendFailed {
                message: format!("osascript exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
