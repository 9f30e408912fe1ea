use super::*;

#[test]
fn slot_keycodes_are_f7_through_f10() {
    let keycodes: Vec<u32> = ShortcutSlot::ALL.iter().map(|s| s.keycode()).collect();
    assert_eq!(keycodes, vec![137, 138, 139, 140]);
}

#[test]
fn slot_from_keycode() {
    for slot in ShortcutSlot::ALL {
        assert_eq!(ShortcutSlot::from_keycode(slot.keycode()), Some(slot));
    }
    assert_eq!(ShortcutSlot::from_keycode(KEYCODE_F1), None);
    assert_eq!(ShortcutSlot::from_keycode(141), None);
}

#[test]
fn slot_preference_keys() {
    assert_eq!(ShortcutSlot::F7.preference_key(), "shortcut_f7");
    assert_eq!(ShortcutSlot::F10.preference_key(), "shortcut_f10");

    for slot in ShortcutSlot::ALL {
        assert_eq!(
            ShortcutSlot::from_preference_key(slot.preference_key()),
            Some(slot)
        );
    }
    assert_eq!(ShortcutSlot::from_preference_key("shortcut_f6"), None);
    assert_eq!(ShortcutSlot::from_preference_key(""), None);
}

#[test]
fn slot_index_matches_position() {
    for (i, slot) in ShortcutSlot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}

#[test]
fn slot_display() {
    assert_eq!(ShortcutSlot::F7.to_string(), "F7");
    assert_eq!(ShortcutSlot::F10.to_string(), "F10");
}
