pub mod catalog;
pub mod host;
pub mod registry;
pub mod selection;
pub mod sound;
pub mod types;
pub mod update;

pub use catalog::{AppCatalog, AppCatalogEntry};
pub use registry::{BindingOutcome, InitReport, ShortcutRegistry};
pub use selection::{Choice, SelectionController, SelectionList};
pub use types::{AppConfig, AppId, Config, ShortcutSlot};
