use parley_core::{Core, CoreError, DEFAULT_MESSAGE_LIMIT, SessionState, ValidationError};

fn core() -> Core {
    Core::open_in_memory().unwrap()
}

#[test]
fn register_then_authenticate_roundtrip() {
    let core = core();
    core.register("Alice", "alice@x.com", "secret1", Some("555"))
        .unwrap();

    let session = core.authenticate("alice@x.com", "secret1").unwrap().unwrap();
    assert_eq!(session.display_name(), "Alice");
    assert_eq!(session.email(), "alice@x.com");
}

#[test]
fn auth_failures_are_indistinguishable() {
    let core = core();
    core.register("Alice", "alice@x.com", "secret1", None)
        .unwrap();

    assert!(core.authenticate("alice@x.com", "wrong").unwrap().is_none());
    assert!(core.authenticate("nobody@x.com", "secret1").unwrap().is_none());
}

#[test]
fn credentials_are_trimmed_on_both_ends() {
    let core = core();
    core.register("  Alice ", " alice@x.com ", " secret1 ", Some(" 555 "))
        .unwrap();

    // Stored trimmed, and padded logins match the trimmed account.
    let session = core.authenticate("alice@x.com", "secret1").unwrap().unwrap();
    assert_eq!(session.display_name(), "Alice");
    assert!(
        core.authenticate(" alice@x.com ", " secret1 ")
            .unwrap()
            .is_some()
    );

    let profile = core.get_profile("alice@x.com").unwrap().unwrap();
    assert_eq!(profile.phone.as_deref(), Some("555"));
}

#[test]
fn duplicate_email_rejected_first_registration_kept() {
    let core = core();
    core.register("Alice", "alice@x.com", "secret1", None)
        .unwrap();

    let err = core
        .register("Impostor", "alice@x.com", "secret2", None)
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateEmail));

    // The original account still authenticates under its own name.
    let session = core.authenticate("alice@x.com", "secret1").unwrap().unwrap();
    assert_eq!(session.display_name(), "Alice");
    assert!(core.authenticate("alice@x.com", "secret2").unwrap().is_none());
}

#[test]
fn registration_validation_runs_before_store() {
    let core = core();

    let err = core.register("Alice", "no-at-sign", "secret1", None).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::MalformedEmail)
    ));

    let err = core.register("Alice", "alice@x.com", "short", None).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::ShortPassword)
    ));

    // Nothing was written.
    assert!(core.list_users().is_empty());
}

#[test]
fn appended_message_is_last_in_recent() {
    let core = core();
    core.append_message("Alice", "hi").unwrap();
    core.append_message("Bob", "hello").unwrap();

    let recent = core.recent_messages(DEFAULT_MESSAGE_LIMIT);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].user_name, "Alice");
    assert_eq!(recent[0].body, "hi");
    assert_eq!(recent[1].user_name, "Bob");
    assert_eq!(recent[1].body, "hello");
}

#[test]
fn recent_is_a_bounded_window() {
    let core = core();
    for i in 0..60 {
        core.append_message("Alice", &format!("msg {i}")).unwrap();
    }

    let recent = core.recent_messages(50);
    assert_eq!(recent.len(), 50);
    assert_eq!(recent.first().unwrap().body, "msg 10");
    assert_eq!(recent.last().unwrap().body, "msg 59");
}

#[test]
fn empty_message_body_rejected() {
    let core = core();
    let err = core.append_message("Alice", "   ").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::EmptyBody)
    ));
    assert!(core.recent_messages(50).is_empty());
}

#[test]
fn bio_upsert_is_idempotent_overwrite() {
    let core = core();
    core.register("Alice", "alice@x.com", "secret1", None)
        .unwrap();

    core.upsert_bio("alice@x.com", "hello").unwrap();
    let profile = core.get_profile("alice@x.com").unwrap().unwrap();
    assert_eq!(profile.bio.as_deref(), Some("hello"));
    let first_join = profile.join_date;
    assert!(first_join.is_some());

    core.upsert_bio("alice@x.com", "world").unwrap();
    let profile = core.get_profile("alice@x.com").unwrap().unwrap();
    assert_eq!(profile.bio.as_deref(), Some("world"));
    assert_eq!(profile.join_date, first_join);
}

#[test]
fn bio_for_unknown_email_is_not_found() {
    let core = core();
    let err = core.upsert_bio("ghost@x.com", "boo").unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
}

#[test]
fn profile_view_flows_from_session() {
    let core = core();
    core.register("Alice", "alice@x.com", "secret1", Some("555"))
        .unwrap();

    let mut state = SessionState::new();
    let session = core.authenticate("alice@x.com", "secret1").unwrap().unwrap();
    state.login(session);

    // The profile view path: session name -> email -> profile.
    let name = state.current().unwrap().display_name().to_string();
    let email = core.email_for_name(&name).unwrap().unwrap();
    let profile = core.get_profile(&email).unwrap().unwrap();
    assert_eq!(profile.name, "Alice");
    assert_eq!(profile.phone.as_deref(), Some("555"));
    assert_eq!(profile.bio, None);

    state.logout();
    assert!(state.current().is_none());
}

#[test]
fn scenario_from_on_disk_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parley.db");

    {
        let core = Core::open(&path).unwrap();
        core.register("Alice", "alice@x.com", "secret1", Some("555"))
            .unwrap();
        let session = core.authenticate("alice@x.com", "secret1").unwrap().unwrap();
        assert_eq!(session.display_name(), "Alice");
        assert!(core.authenticate("alice@x.com", "wrong").unwrap().is_none());
        core.append_message(session.display_name(), "hi").unwrap();
    }

    // Everything except the session survives a reopen.
    let core = Core::open(&path).unwrap();
    let recent = core.recent_messages(50);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].user_name, "Alice");
    assert_eq!(recent[0].body, "hi");

    let users = core.list_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].email, "alice@x.com");
}
