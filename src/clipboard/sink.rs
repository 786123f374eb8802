//! Clipboard sinks.
//!
//! A [`ClipboardSink`] is where copied text ends up. Writes may block; the
//! controller runs them on the blocking thread pool.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::error::{EstimatorError, EstimatorResult};

/// A destination for copied text.
pub trait ClipboardSink: Send + Sync {
    /// Places `text` on the clipboard.
    fn write_text(&self, text: &str) -> EstimatorResult<()>;
}

/// An in-process clipboard, for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    failure: Option<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard whose writes always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            failure: Some(message.into()),
        }
    }

    /// Returns the last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> EstimatorResult<()> {
        if let Some(message) = &self.failure {
            return Err(EstimatorError::ClipboardError {
                message: message.clone(),
            });
        }

        let mut guard = self
            .contents
            .lock()
            .map_err(|_| EstimatorError::ClipboardError {
                message: "clipboard lock poisoned".to_string(),
            })?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Pipes copied text into a system clipboard tool such as `wl-copy`,
/// `xclip` or `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Creates a sink running `program` with `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses a whitespace-separated command line such as
    /// `"xclip -selection clipboard"`.
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// The usual clipboard tool for the target platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    /// Returns the program this sink runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&self, text: &str) -> EstimatorResult<()> {
        let clipboard_error = |message: String| EstimatorError::ClipboardError { message };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| clipboard_error(format!("failed to start '{}': {}", self.program, e)))?;

        // Dropping stdin closes the pipe so the tool sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            // The child is always reaped, even when it stopped reading early.
            let _ = child.kill();
            let _ = child.wait();
            return Err(clipboard_error(format!(
                "failed to write to '{}': {}",
                self.program, e
            )));
        }

        let status = child
            .wait()
            .map_err(|e| clipboard_error(format!("'{}' did not finish: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(clipboard_error(format!("'{}' exited with {}", self.program, status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_text() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.write_text("Rolle: Full-Stack").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("Rolle: Full-Stack"));
    }

    #[test]
    fn test_failing_memory_clipboard() {
        let clipboard = MemoryClipboard::failing("insecure context");

        match clipboard.write_text("text") {
            Err(EstimatorError::ClipboardError { message }) => {
                assert_eq!(message, "insecure context")
            }
            other => panic!("Expected ClipboardError, got {:?}", other),
        }
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_command_line_parsing() {
        let sink = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(sink.program(), "xclip");
        assert_eq!(sink.args, vec!["-selection", "clipboard"]);

        assert!(CommandClipboard::from_command_line("   ").is_none());
    }

    #[test]
    fn test_missing_program_is_clipboard_error() {
        let sink = CommandClipboard::new("definitely-not-a-clipboard-tool", Vec::new());

        match sink.write_text("text") {
            Err(EstimatorError::ClipboardError { message }) => {
                assert!(message.contains("definitely-not-a-clipboard-tool"))
            }
            other => panic!("Expected ClipboardError, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    fn zombie_children_named(name: &str) -> usize {
        let own_pid = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| std::fs::read_to_string(entry.path().join("stat")).ok())
            .filter(|stat| {
                // Format: pid (comm) state ppid ...
                let Some(close) = stat.rfind(')') else {
                    return false;
                };
                let comm = stat[..close].split_once('(').map(|(_, c)| c);
                let mut rest = stat[close + 1..].split_whitespace();
                let state = rest.next();
                let ppid = rest.next();
                comm == Some(name) && state == Some("Z") && ppid == Some(own_pid.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_program_ignoring_stdin_is_reaped() {
        let sink = CommandClipboard::new("true", Vec::new());
        let payload = "x".repeat(4 * 1024 * 1024);

        match sink.write_text(&payload) {
            Err(EstimatorError::ClipboardError { message }) => {
                assert!(message.contains("'true'"), "unexpected message: {}", message)
            }
            other => panic!("Expected ClipboardError, got {:?}", other),
        }
        assert_eq!(zombie_children_named("true"), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_pipes_to_program() {
        let sink = CommandClipboard::new("cat", Vec::new());
        assert!(sink.write_text("Level: MID").is_ok());

        let failing = CommandClipboard::new("false", Vec::new());
        assert!(failing.write_text("Level: MID").is_err());
    }
}
