use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::calc;
use crate::history;
use crate::models::{CycleEntry, CycleInput, CycleResult, Settings, Theme};
use crate::presenter::Presenter;
use crate::settings;
use crate::storage::{KeyValueStore, StorageError, LAST_DATE_KEY};

/// Ties user actions to the calculator, the persisted stores, and the
/// presenter. Single-threaded by design; mutations only run after a
/// confirm dialog has resolved.
pub struct Tracker<S: KeyValueStore, P: Presenter> {
    store: S,
    presenter: P,
    theme: Theme,
}

impl<S: KeyValueStore, P: Presenter> Tracker<S, P> {
    pub fn new(store: S, presenter: P) -> Self {
        let theme = match settings::load(&store) {
            Ok(s) => s.theme,
            Err(err) => {
                warn!(%err, "could not read settings, starting with defaults");
                Theme::default()
            }
        };
        Self {
            store,
            presenter,
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Run the calculator and render the outcome. Validation failures
    /// toast only when `announce` is set (button press vs. background
    /// recompute). A successful run also mirrors the raw date into its
    /// legacy key.
    pub fn calculate(
        &mut self,
        input: &CycleInput,
        today: NaiveDate,
        announce: bool,
    ) -> Option<CycleResult> {
        match calc::compute(input, today) {
            Ok(res) => {
                self.presenter.render_result(&res);
                self.presenter.render_progress(res.progress_pct);
                let mirrored = self.store.set(LAST_DATE_KEY, &input.last_date);
                self.report_if_failed(mirrored);
                Some(res)
            }
            Err(_) => {
                if announce {
                    self.presenter.notify("Select your last period start date.");
                }
                None
            }
        }
    }

    /// Compute and append a snapshot entry. A re-save after `edit_load`
    /// prepends a new entry and leaves the edited one in place.
    pub fn save_to_history(&mut self, input: &CycleInput, today: NaiveDate) {
        let Some(res) = self.calculate(input, today, true) else {
            self.presenter.notify("Cannot save, fill details.");
            return;
        };
        let entry = CycleEntry {
            start: input.last_date.clone(),
            cycle: res.cycle,
            period_len: res.period_len,
            phase: res.phase.to_string(),
            created: Local::now().to_rfc3339(),
        };
        let appended = history::append(&mut self.store, entry);
        self.report_if_failed(appended);
        self.save_settings(input);
        self.render_history();
        self.presenter.notify("Saved to history.");
    }

    /// Load the entry at `index` back into an input for the form, without
    /// touching the store. A stale index toasts and changes nothing.
    pub fn edit_load(&mut self, index: usize, today: NaiveDate) -> Option<CycleInput> {
        let entry = match history::entry_at(&self.store, index) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                self.presenter.notify("That entry no longer exists.");
                return None;
            }
            Err(err) => {
                warn!(%err, "could not read history");
                self.presenter.notify("Could not read history.");
                return None;
            }
        };
        let input = CycleInput {
            last_date: entry.start,
            cycle: entry.cycle.to_string(),
            period_len: entry.period_len.to_string(),
        };
        self.calculate(&input, today, false);
        self.save_settings(&input);
        Some(input)
    }

    pub fn delete_entry(&mut self, index: usize) {
        match history::entry_at(&self.store, index) {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.presenter.notify("That entry no longer exists.");
                return;
            }
            Err(err) => {
                warn!(%err, "could not read history");
                self.presenter.notify("Could not read history.");
                return;
            }
        }
        if !self.presenter.confirm("Delete this entry?") {
            return;
        }
        let deleted = history::delete_at(&mut self.store, index);
        self.report_if_failed(deleted);
        self.render_history();
        self.presenter.notify("Entry deleted.");
    }

    pub fn clear_history(&mut self) {
        if !self.presenter.confirm("Clear all history?") {
            return;
        }
        let cleared = history::clear(&mut self.store);
        self.report_if_failed(cleared);
        self.render_history();
        self.presenter.notify("History cleared.");
    }

    /// Blank the displayed result and forget the entered date. History is
    /// untouched.
    pub fn reset(&mut self, input: &CycleInput) {
        if !self
            .presenter
            .confirm("Reset the displayed date and clear result?")
        {
            return;
        }
        self.presenter.clear_result();
        self.presenter.render_progress(0);
        let cleared = CycleInput {
            last_date: String::new(),
            ..input.clone()
        };
        self.save_settings(&cleared);
        self.presenter.notify("Reset done.");
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let mut current = self.load_settings();
        current.theme = self.theme;
        let saved = settings::save(&mut self.store, &current);
        self.report_if_failed(saved);
        self.presenter.notify(match self.theme {
            Theme::Dark => "Dark mode enabled",
            Theme::Light => "Light mode enabled",
        });
    }

    /// Date input changed: mirror the raw value, persist settings, and
    /// recompute quietly.
    pub fn date_changed(&mut self, input: &CycleInput, today: NaiveDate) {
        let mirrored = self.store.set(LAST_DATE_KEY, &input.last_date);
        self.report_if_failed(mirrored);
        self.save_settings(input);
        self.calculate(input, today, false);
    }

    /// Startup path: render the saved history and rehydrate the last-used
    /// inputs, preferring the settings record over the raw mirror key.
    /// Returns the input the form should show, if any date was saved.
    pub fn restore(&mut self, today: NaiveDate) -> Option<CycleInput> {
        self.render_history();
        let saved = self.load_settings();
        self.theme = saved.theme;

        let last_date = if saved.last_date.is_empty() {
            match self.store.get(LAST_DATE_KEY) {
                Ok(raw) => raw.unwrap_or_default(),
                Err(err) => {
                    warn!(%err, "could not read last-date mirror");
                    String::new()
                }
            }
        } else {
            saved.last_date
        };
        if last_date.is_empty() {
            return None;
        }

        let input = CycleInput {
            last_date,
            cycle: saved.cycle,
            period_len: if saved.period_len.is_empty() {
                calc::DEFAULT_PERIOD_LEN.to_string()
            } else {
                saved.period_len
            },
        };
        self.calculate(&input, today, false);
        Some(input)
    }

    fn save_settings(&mut self, input: &CycleInput) {
        let record = Settings {
            theme: self.theme,
            last_date: input.last_date.clone(),
            cycle: input.cycle.clone(),
            period_len: input.period_len.clone(),
        };
        let saved = settings::save(&mut self.store, &record);
        self.report_if_failed(saved);
    }

    fn render_history(&mut self) {
        match history::list(&self.store) {
            Ok(entries) => self.presenter.render_history(&entries),
            Err(err) => {
                warn!(%err, "could not load history");
                self.presenter.render_history(&[]);
            }
        }
    }

    fn load_settings(&mut self) -> Settings {
        match settings::load(&self.store) {
            Ok(s) => s,
            Err(err) => {
                warn!(%err, "could not read settings, using defaults");
                Settings::default()
            }
        }
    }

    fn report_if_failed(&mut self, result: Result<(), StorageError>) {
        if let Err(err) = result {
            warn!(%err, "persistence failed");
            self.presenter.notify("Could not persist data.");
        }
    }
}
