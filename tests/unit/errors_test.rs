use streamhub::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::DatabaseError("disk full".to_string()).to_string(),
        "Platform store database error: disk full"
    );
    assert_eq!(
        StoreError::SerializationError("bad json".to_string()).to_string(),
        "Platform store serialization error: bad json"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, StoreError::DatabaseError(_)));
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::DatabaseError("x".to_string()));
    assert!(err.source().is_none());
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::NotFound("refresh".to_string()).to_string(),
        "Shortcut not found for action: refresh"
    );
    assert_eq!(
        ShortcutError::Conflict("'F11' is already bound to 'fullscreen'".to_string()).to_string(),
        "Shortcut conflict: 'F11' is already bound to 'fullscreen'"
    );
    assert_eq!(
        ShortcutError::InvalidKeys("".to_string()).to_string(),
        "Invalid shortcut keys: "
    );
    assert_eq!(
        ShortcutError::UnknownAction("new_tab".to_string()).to_string(),
        "Unknown shortcut action: new_tab"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected u64".to_string()).to_string(),
        "Invalid settings value: expected u64"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::InvalidKey("k".to_string()));
    assert_eq!(err.to_string(), "Invalid settings key: k");
}
