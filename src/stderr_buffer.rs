use std::io;
use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering. While active, log lines are stored instead of
/// printed to stderr.
pub fn activate() {
    if let Ok(mut guard) = BUFFER.lock() {
        *guard = Some(Vec::new());
    }
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .ok()
        .and_then(|mut guard| guard.take())
        .unwrap_or_default()
}

/// Write a warning message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    match BUFFER.lock() {
        Ok(mut guard) => {
            if let Some(buf) = guard.as_mut() {
                buf.push(msg);
            } else {
                drop(guard);
                eprintln!("{}", msg);
            }
        }
        Err(_) => eprintln!("{}", msg),
    }
}

/// `io::Write` sink for the tracing subscriber that routes each formatted
/// event through [`warn`].
pub struct BufferedStderr;

impl io::Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let line = line.trim_end_matches('\n');
        if !line.is_empty() {
            warn(line.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `MakeWriter` constructor for `tracing_subscriber::fmt().with_writer(..)`
pub fn writer() -> BufferedStderr {
    BufferedStderr
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Single test: the buffer is process-global.
    #[test]
    fn test_buffering_holds_messages_until_drained() {
        activate();
        warn("first".to_string());
        writer().write_all(b"second\n").unwrap();
        writer().write_all(b"\n").unwrap();

        assert_eq!(drain(), vec!["first", "second"]);
        assert!(drain().is_empty());
    }
}
