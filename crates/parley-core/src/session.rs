/// Identity established by a successful [`Core::authenticate`] call.
/// The caller holds it; dropping it is logging out.
///
/// [`Core::authenticate`]: crate::Core::authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    email: String,
}

impl Session {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    /// The authenticated user's display name, used to attribute messages.
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Single-slot session holder for a presentation layer that wants
/// login/logout semantics. One session per process instance: `login`
/// overwrites whatever was there, `logout` clears unconditionally.
///
/// This is plain local state. Share it across threads only behind your
/// own synchronization.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, session: Session) {
        self.current = Some(session);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}
