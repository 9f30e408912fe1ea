pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, ShortcutsConfig, UpdateConfig};

pub(crate) mod app_id;
pub use app_id::{AppId, AppIdError, MAX_APP_ID_LENGTH, NO_SHORTCUT};

pub(crate) mod slot;
pub use slot::{KEYCODE_F1, SLOT_COUNT, ShortcutSlot};

pub(crate) mod assignment;
