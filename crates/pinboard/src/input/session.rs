//! Scoped gesture sessions
//!
//! A gesture that follows the pointer outside its origin element needs
//! listeners on the whole document. Each gesture owns exactly one such
//! registration: it is attached when the gesture begins and detached
//! exactly once when it ends, whatever ends it.

use std::fmt;

use serde::Serialize;

/// Identifier of one gesture's listener registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionHandle(u64);

impl SessionHandle {
    /// Raw numeric id
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host side of listener registration.
///
/// The browser glue implements this to add and remove document-level
/// pointer-move / pointer-up listeners.
pub trait ListenerHost {
    /// Register listeners for `session`
    fn attach(&mut self, session: SessionHandle);
    /// Remove the listeners registered for `session`
    fn detach(&mut self, session: SessionHandle);
}

/// Listener host with nothing to register
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListenerHost;

impl ListenerHost for NoopListenerHost {
    fn attach(&mut self, _session: SessionHandle) {}
    fn detach(&mut self, _session: SessionHandle) {}
}

/// Owner of the single active gesture session
pub struct GestureSessions {
    host: Box<dyn ListenerHost>,
    active: Option<SessionHandle>,
    next_id: u64,
}

impl Default for GestureSessions {
    fn default() -> Self {
        Self::new(Box::new(NoopListenerHost))
    }
}

impl fmt::Debug for GestureSessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureSessions")
            .field("active", &self.active)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl GestureSessions {
    /// Create sessions backed by `host`
    pub fn new(host: Box<dyn ListenerHost>) -> Self {
        Self {
            host,
            active: None,
            next_id: 1,
        }
    }

    /// Swap the listener host, ending any active session on the old one
    pub fn set_host(&mut self, host: Box<dyn ListenerHost>) {
        self.end_active();
        self.host = host;
    }

    /// Active session, if any
    #[inline]
    pub fn active(&self) -> Option<SessionHandle> {
        self.active
    }

    /// Check if a session is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a new session, ending the previous one first
    pub fn begin(&mut self) -> SessionHandle {
        self.end_active();

        let handle = SessionHandle(self.next_id);
        self.next_id += 1;
        self.host.attach(handle);
        self.active = Some(handle);
        log::trace!("gesture session {} attached", handle.0);
        handle
    }

    /// End the active session, if any
    pub fn end_active(&mut self) -> Option<SessionHandle> {
        let handle = self.active.take()?;
        self.host.detach(handle);
        log::trace!("gesture session {} detached", handle.0);
        Some(handle)
    }
}

impl Drop for GestureSessions {
    fn drop(&mut self) {
        self.end_active();
    }
}
