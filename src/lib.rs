//! Client-side menstrual cycle tracker core.
//!
//! Pure date math and phase classification, a bounded newest-first
//! history, and a settings record, all persisted through an injected
//! [`storage::KeyValueStore`]. UI concerns (toasts, confirm dialogs,
//! rendering) sit behind the [`presenter::Presenter`] trait; the
//! [`app::Tracker`] wires the two sides together.

pub mod app;
pub mod calc;
pub mod datemath;
pub mod history;
pub mod models;
pub mod phase;
pub mod presenter;
pub mod settings;
pub mod storage;

pub use app::Tracker;
pub use calc::{compute, CalcError};
pub use models::{CycleEntry, CycleInput, CycleResult, Settings, Theme};
pub use phase::{classify, Phase};
pub use presenter::Presenter;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
