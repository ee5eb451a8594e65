use std::sync::atomic::{AtomicBool, Ordering};

/// Advisory busy flag for the export trigger.
///
/// The rendering layer reads it to disable the export action while one is
/// running. It enforces nothing: a second export started while the flag is
/// set simply runs, and whichever finishes last clears the flag.
#[derive(Debug, Default)]
pub struct ExportFlag {
    busy: AtomicBool,
}

impl ExportFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) {
        self.busy.store(true, Ordering::SeqCst);
    }

    pub fn finish(&self) {
        self.busy.store(false, Ordering::SeqCst);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert!(!ExportFlag::new().is_busy());
    }

    #[test]
    fn begin_and_finish_toggle_the_flag() {
        let flag = ExportFlag::new();
        flag.begin();
        assert!(flag.is_busy());
        flag.finish();
        assert!(!flag.is_busy());
    }

    #[test]
    fn a_second_begin_is_not_an_error() {
        let flag = ExportFlag::new();
        flag.begin();
        flag.begin();
        assert!(flag.is_busy());
        flag.finish();
        assert!(!flag.is_busy());
    }
}
