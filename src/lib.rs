//! app-support - Client-side support utilities for the desktop app shell
//!
//! Generic helpers shared across the application: deep merging of
//! dynamic configuration mappings, serialization round-trip cloning,
//! debounced and repeating timers, short random identifiers, dotted-path
//! lookup into nested mappings, and environment-derived formatting.

pub mod attempt;
pub mod ident;
pub mod merge;
pub mod platform;
pub mod settings;
pub mod timing;
pub mod value;

pub use attempt::{attempt, attempt_labeled};
pub use ident::{random_tag, sample_id};
pub use merge::{deep_merge_all, deep_merge_into, merge_layers, Merger};
pub use platform::{font_family, Os};
pub use settings::{default_user_agent, AppSettings, SettingsError, APP_TITLE, APP_VERSION};
pub use timing::{sleep_ms, Debouncer, Repeater};
pub use value::{deep_clone, get_bool, get_f64, get_path, get_str, get_u64, CloneError};
