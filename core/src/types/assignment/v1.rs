use serde::{Deserialize, Serialize};

use super::AssignmentVariant;
use crate::types::AppId;

/// `app == None` is an explicit "no shortcut" choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub app: Option<AppId>,
}

impl AssignmentVariant for Assignment {
    const VERSION: u8 = 1;
}
