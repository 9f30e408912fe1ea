use nutype::nutype;

pub const MAX_APP_ID_LENGTH: usize = 255;

/// Value older settings builds wrote in place of a package name for an empty slot.
pub const NO_SHORTCUT: &str = "No shortcut";

/// Identifier of an installed application (a package name on Android).
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = MAX_APP_ID_LENGTH,
        predicate = |s: &str| s != NO_SHORTCUT
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct AppId(String);
