use super::{
    log::{shared, Logger, SharedLogger},
    types::DEFAULT_CAPACITY,
};

#[derive(Clone)]
pub struct Options {
    /// Number of usable slots allocated up front, the sentinel not included
    pub capacity: usize,

    /// Run the verifier before every public call and refuse on a flaw
    pub verify_calls: bool,

    pub log: Option<SharedLogger>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            capacity: DEFAULT_CAPACITY,
            verify_calls: true,
            log: None,
        }
    }
}

impl Options {
    pub fn with_capacity(capacity: usize) -> Self {
        Options {
            capacity,
            ..Default::default()
        }
    }

    /// Skips the pre-flight verification, trading corruption containment for speed
    pub fn unchecked() -> Self {
        Options {
            verify_calls: false,
            ..Default::default()
        }
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.log = Some(shared(logger));
        self
    }
}
