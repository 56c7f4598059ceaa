use crate::models::{CycleEntry, CycleResult};

/// Auto-dismiss delay implementors should apply to notifications.
pub const NOTIFY_TIMEOUT_MS: u64 = 2200;

/// The UI surface the tracker talks to. The core never touches widget
/// state directly; rendering, toasts, and the confirm dialog all live
/// behind this trait.
///
/// `confirm` blocks the (single-threaded) caller until the user resolves
/// the dialog; cancel and backdrop dismissal both answer `false`. A
/// `notify` arriving while a previous one is still showing replaces it
/// and restarts the dismiss timer.
pub trait Presenter {
    fn notify(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    fn render_result(&mut self, result: &CycleResult);
    fn clear_result(&mut self);
    fn render_progress(&mut self, pct: u8);
    fn render_history(&mut self, entries: &[CycleEntry]);
}

/// Test double: records every call and answers `confirm` from a script
/// (defaulting to true when the script runs out).
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub notices: Vec<String>,
    pub confirms: Vec<String>,
    pub confirm_answers: Vec<bool>,
    pub results: Vec<CycleResult>,
    pub cleared: usize,
    pub progress: Vec<u8>,
    pub history_renders: Vec<Vec<CycleEntry>>,
}

#[cfg(test)]
impl RecordingPresenter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            confirm_answers: answers.to_vec(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Presenter for RecordingPresenter {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        if self.confirm_answers.is_empty() {
            true
        } else {
            self.confirm_answers.remove(0)
        }
    }

    fn render_result(&mut self, result: &CycleResult) {
        self.results.push(result.clone());
    }

    fn clear_result(&mut self) {
        self.cleared += 1;
    }

    fn render_progress(&mut self, pct: u8) {
        self.progress.push(pct);
    }

    fn render_history(&mut self, entries: &[CycleEntry]) {
        self.history_renders.push(entries.to_vec());
    }
}
