use crate::error::{Result, TabdeckError};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(&["pbcopy"], text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(&["clip.exe"], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(TabdeckError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    // Prefer xclip, fall back to xsel.
    if pipe_to(&["xclip", "-selection", "clipboard"], text).is_ok() {
        return Ok(());
    }
    pipe_to(&["xsel", "--clipboard", "--input"], text)
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(command: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(command[0])
        .args(&command[1..])
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| TabdeckError::Api(format!("Failed to spawn {}: {}", command[0], e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| TabdeckError::Api(format!("Failed to write to {}: {}", command[0], e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| TabdeckError::Api(format!("Failed to wait for {}: {}", command[0], e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(TabdeckError::Api(format!(
            "{} exited with error",
            command[0]
        )))
    }
}
