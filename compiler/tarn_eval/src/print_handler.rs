//! Output sink for `print` and interactive echo.
//!
//! Scripts write to stdout. Tests and embedding hosts capture into a
//! buffer instead, and a silent sink drops everything. Dispatch is a plain
//! enum match.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed lines go.
pub enum PrintHandlerImpl {
    Stdout,
    /// Accumulates lines for later inspection.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Write one line followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout is not the program's error.
                let _ = writeln!(out, "{line}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for sinks that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }

    pub fn captures(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }
}

/// Print sink shared between the interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("one");
        handler.println("two");
        assert_eq!(handler.get_output(), "one\ntwo\n");
        assert!(handler.captures());
    }

    #[test]
    fn buffer_clear() {
        let handler = buffer_handler();
        handler.println("gone");
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn silent_and_stdout_capture_nothing() {
        let silent = silent_handler();
        silent.println("dropped");
        assert_eq!(silent.get_output(), "");
        assert!(!silent.captures());
        assert!(!stdout_handler().captures());
    }

    #[test]
    fn shared_handles_see_the_same_buffer() {
        let handler = buffer_handler();
        let alias = Arc::clone(&handler);
        alias.println("via alias");
        assert_eq!(handler.get_output(), "via alias\n");
    }
}
