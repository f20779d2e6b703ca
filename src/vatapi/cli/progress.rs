use console::{style, Term};

const FRAME: &str = "⠋";

/// In-progress line on stderr, shown only when stderr is a terminal.
///
/// The line is erased when the indicator is dropped, so it is gone before the
/// caller prints either a result or an error.
pub struct Progress {
    term: Term,
    visible: bool,
}

impl Progress {
    pub fn start(message: &str) -> Self {
        let term = Term::stderr();
        let visible = term.is_term()
            && term
                .write_str(&format!("{} {}", style(FRAME).cyan(), message))
                .is_ok();
        Self { term, visible }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if self.visible {
            let _ = self.term.clear_line();
        }
    }
}

pub fn with_progress<T, E>(message: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let progress = Progress::start(message);
    let result = f();
    drop(progress);
    result
}
