//! Cancellable producer of decoded code values.
//!
//! The capture device is modeled as a [`DecodeSource`] drained by one
//! background loop. The core's contract with it: at most one loop is
//! active at a time, stopping is idempotent and guarantees no further
//! decode events are observed, and the newest decode overwrites older
//! ones until consumed.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::error::{Result, ScansheetError};

/// A stream of decoded code values.
pub trait DecodeSource: Send + 'static {
    /// The next decoded value; `None` when the stream ends.
    fn next_code(&mut self) -> Result<Option<String>>;
}

/// Decode source reading newline-delimited values, e.g. from a wedge
/// scanner on stdin or a serial line. Blank lines are skipped.
pub struct LineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send + 'static> DecodeSource for LineSource<R> {
    fn next_code(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| ScansheetError::Device(format!("Read from device failed: {}", e)))?;

            if read == 0 {
                return Ok(None);
            }

            let code = line.trim_end_matches(['\r', '\n']);
            if !code.is_empty() {
                return Ok(Some(code.to_string()));
            }
        }
    }
}

/// Drives one background decode loop and buffers the latest decode.
pub struct Scanner {
    live: Arc<AtomicBool>,
    rx: Option<Receiver<String>>,
    worker: Option<JoinHandle<()>>,
    advisory: Arc<Mutex<Option<String>>>,
    current: String,
}

impl Scanner {
    /// A scanner with no active loop.
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(false)),
            rx: None,
            worker: None,
            advisory: Arc::new(Mutex::new(None)),
            current: String::new(),
        }
    }

    /// Whether a decode loop is currently running.
    pub fn is_scanning(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Spawn the decode loop over a source.
    ///
    /// Starting while a loop is already running is a no-op (`false`).
    /// The loop ends when the source ends, errors, or the scanner is
    /// stopped; the liveness flag is checked before every emission.
    pub fn start(&mut self, mut source: impl DecodeSource) -> bool {
        if self.is_scanning() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let live = Arc::new(AtomicBool::new(true));

        let advisory = Arc::clone(&self.advisory);
        if let Ok(mut slot) = advisory.lock() {
            *slot = None;
        }

        let live_worker = Arc::clone(&live);
        let worker = thread::spawn(move || {
            loop {
                match source.next_code() {
                    Ok(Some(code)) => {
                        if !live_worker.load(Ordering::Acquire) {
                            break;
                        }
                        if tx.send(code).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        if let Ok(mut slot) = advisory.lock() {
                            *slot = Some(e.to_string());
                        }
                        break;
                    }
                }
            }
        });

        self.live = live;
        self.rx = Some(rx);
        self.worker = Some(worker);
        true
    }

    /// Stop the decode loop. Idempotent.
    ///
    /// After this returns no further decode event is observable: the
    /// channel end is dropped and the loop exits at its next emission
    /// check. The buffered current value survives.
    pub fn stop(&mut self) {
        self.live.store(false, Ordering::Release);
        self.rx = None;
        self.worker = None;
    }

    /// Block for the next raw decode event, in arrival order.
    ///
    /// `None` once the loop has ended and the channel is drained. Used by
    /// drivers that route every event; latest-wins consumers use
    /// [`Scanner::poll_latest`] instead.
    pub fn next_event(&mut self) -> Option<String> {
        self.rx.as_ref()?.recv().ok()
    }

    /// Drain pending decodes into the buffer, newest winning, and return
    /// the current value if any.
    pub fn poll_latest(&mut self) -> Option<&str> {
        if let Some(rx) = &self.rx {
            while let Ok(code) = rx.try_recv() {
                self.current = code;
            }
        }

        (!self.current.is_empty()).then_some(self.current.as_str())
    }

    /// Buffer a decoded value directly (latest decode wins).
    pub fn push_decode(&mut self, code: &str) {
        self.current = code.to_string();
    }

    /// Consume the buffered value.
    pub fn take_current(&mut self) -> Option<String> {
        if self.current.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.current))
    }

    /// Device advisory from the decode loop, if it failed.
    pub fn advisory(&self) -> Option<String> {
        self.advisory.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailingSource;

    impl DecodeSource for FailingSource {
        fn next_code(&mut self) -> Result<Option<String>> {
            Err(ScansheetError::Device("camera denied".to_string()))
        }
    }

    fn wait_idle(scanner: &Scanner) {
        while scanner.is_scanning() {
            thread::yield_now();
        }
    }

    #[test]
    fn test_line_source_skips_blank_lines() {
        let mut source = LineSource::new(Cursor::new("123\n\n  \n456\r\n"));

        assert_eq!(source.next_code().unwrap(), Some("123".to_string()));
        assert_eq!(source.next_code().unwrap(), Some("456".to_string()));
        assert_eq!(source.next_code().unwrap(), None);
    }

    #[test]
    fn test_latest_decode_wins() {
        let mut scanner = Scanner::new();
        assert!(scanner.start(LineSource::new(Cursor::new("111\n222\n333\n"))));
        wait_idle(&scanner);

        assert_eq!(scanner.poll_latest(), Some("333"));
        assert_eq!(scanner.take_current(), Some("333".to_string()));
        assert_eq!(scanner.take_current(), None);
    }

    #[test]
    fn test_second_start_is_a_no_op() {
        let mut scanner = Scanner::new();
        // A source that never ends until the channel closes
        let (tx, rx) = mpsc::channel::<String>();
        struct Pending(Receiver<String>);
        impl DecodeSource for Pending {
            fn next_code(&mut self) -> Result<Option<String>> {
                Ok(self.0.recv().ok())
            }
        }

        assert!(scanner.start(Pending(rx)));
        assert!(!scanner.start(LineSource::new(Cursor::new("x\n"))));

        drop(tx);
        scanner.stop();
    }

    #[test]
    fn test_stop_is_idempotent_and_silences_events() {
        let mut scanner = Scanner::new();
        scanner.start(LineSource::new(Cursor::new("111\n")));
        wait_idle(&scanner);

        scanner.stop();
        scanner.stop();

        assert_eq!(scanner.next_event(), None);
        assert!(!scanner.is_scanning());
    }

    #[test]
    fn test_restart_after_stop() {
        let mut scanner = Scanner::new();
        scanner.start(LineSource::new(Cursor::new("111\n")));
        wait_idle(&scanner);
        scanner.stop();

        assert!(scanner.start(LineSource::new(Cursor::new("222\n"))));
        wait_idle(&scanner);
        assert_eq!(scanner.poll_latest(), Some("222"));
    }

    #[test]
    fn test_events_arrive_in_order() {
        let mut scanner = Scanner::new();
        scanner.start(LineSource::new(Cursor::new("a\nb\nc\n")));

        assert_eq!(scanner.next_event(), Some("a".to_string()));
        assert_eq!(scanner.next_event(), Some("b".to_string()));
        assert_eq!(scanner.next_event(), Some("c".to_string()));
        assert_eq!(scanner.next_event(), None);
    }

    #[test]
    fn test_device_failure_becomes_an_advisory() {
        let mut scanner = Scanner::new();
        scanner.start(FailingSource);
        wait_idle(&scanner);

        let advisory = scanner.advisory().unwrap();
        assert!(advisory.contains("camera denied"));
        assert_eq!(scanner.poll_latest(), None);
    }
}
