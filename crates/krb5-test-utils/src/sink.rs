//! Byte sinks with scripted behaviour.

use std::io::{self, Write};

/// A sink that fails on its n-th `write` call (1-based) and on every call
/// after it. Records what was accepted and how often it was called.
#[derive(Debug)]
pub struct FailingSink {
    fail_on: usize,
    kind: io::ErrorKind,
    /// Number of `write` calls seen, including failed ones.
    pub calls: usize,
    /// Bytes accepted before the failure.
    pub written: Vec<u8>,
}

impl FailingSink {
    pub fn new(fail_on: usize) -> Self {
        Self::with_kind(fail_on, io::ErrorKind::Other)
    }

    pub fn with_kind(fail_on: usize, kind: io::ErrorKind) -> Self {
        Self {
            fail_on,
            kind,
            calls: 0,
            written: Vec::new(),
        }
    }

    /// The message carried by the scripted error.
    pub fn message(&self) -> String {
        format!("scripted failure on write {}", self.fail_on)
    }

    pub fn written_text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls >= self.fail_on {
            return Err(io::Error::new(self.kind, self.message()));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that accepts at most `chunk` bytes per `write` call.
#[derive(Debug)]
pub struct ShortWriteSink {
    chunk: usize,
    pub written: Vec<u8>,
}

impl ShortWriteSink {
    pub fn new(chunk: usize) -> Self {
        Self {
            chunk: chunk.max(1),
            written: Vec::new(),
        }
    }
}

impl Write for ShortWriteSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.chunk);
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
