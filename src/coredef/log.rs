//! Diagnostic logging.
//!
//! The list never prints on its own. Rejected calls, verifier flaws and storage
//! growth are reported through an optional shared `Logger` carried in `Options`.
use std::{cell::RefCell, io, io::Write, rc::Rc};

pub struct Logger(pub Box<dyn Write>);

pub type SharedLogger = Rc<RefCell<Logger>>;

pub fn stderr() -> Logger {
    Logger(Box::new(io::stderr()))
}

pub fn shared(logger: Logger) -> SharedLogger {
    Rc::new(RefCell::new(logger))
}

#[macro_export]
macro_rules! log {
    ($l:expr) => ($l.as_ref().map(|l| l.borrow_mut().0.write("\n".as_bytes()).is_ok()));
    ($l:expr, $fmt:expr) => (
        $l.as_ref().map(|l| l.borrow_mut().0.write(concat!($fmt, "\n").as_bytes()).is_ok()));
    ($l:expr, $fmt:expr, $($arg:tt)*) => (
        $l.as_ref().map(
            |l| l.borrow_mut().0.write_fmt(format_args!(concat!($fmt, "\n"), $($arg)*)).is_ok()));
}

/// In-memory sink whose contents stay readable after being handed to a `Logger`
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemorySink(pub Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl MemorySink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log;

    #[test]
    fn test_log_macro() {
        let sink = MemorySink::default();
        let logger = Some(shared(Logger(Box::new(sink.clone()))));
        log!(logger, "resized from {} to {}", 8, 17);
        log!(logger, "plain");
        assert_eq!(sink.contents(), "resized from 8 to 17\nplain\n");
    }

    #[test]
    fn test_log_macro_without_logger() {
        let logger: Option<SharedLogger> = None;
        assert_eq!(log!(logger, "nothing {}", 1), None);
    }
}
