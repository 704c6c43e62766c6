//! Navigation Bridge for StreamHub.
//!
//! An injected command bus between the navigation bar / shortcuts and the
//! mounted browser control. Listener sets are mounted under an owner name;
//! mounting again under the same owner drops the previous listener first,
//! so a recreated browser control never sees a command twice.

use crate::types::navigation::NavCommand;

/// Handle returned by [`NavigationBridge::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

type Listener = Box<dyn FnMut(NavCommand)>;

struct Mount {
    id: MountId,
    owner: String,
    listener: Listener,
}

/// Fire-and-forget fan-out of [`NavCommand`]s.
pub struct NavigationBridge {
    mounts: Vec<Mount>,
    next_id: u64,
}

impl NavigationBridge {
    pub fn new() -> Self {
        Self {
            mounts: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `listener` for `owner`, replacing any listener the owner
    /// already had.
    pub fn mount<F>(&mut self, owner: &str, listener: F) -> MountId
    where
        F: FnMut(NavCommand) + 'static,
    {
        let before = self.mounts.len();
        self.mounts.retain(|m| m.owner != owner);
        if self.mounts.len() != before {
            tracing::debug!(owner, "replaced previous navigation listener");
        }

        self.next_id += 1;
        let id = MountId(self.next_id);
        self.mounts.push(Mount {
            id,
            owner: owner.to_string(),
            listener: Box::new(listener),
        });
        id
    }

    /// Removes a mount. Returns whether it was still registered.
    pub fn unmount(&mut self, id: MountId) -> bool {
        let before = self.mounts.len();
        self.mounts.retain(|m| m.id != id);
        self.mounts.len() != before
    }

    /// Delivers `command` to every mounted listener. Returns the number of
    /// listeners reached.
    pub fn publish(&mut self, command: NavCommand) -> usize {
        if self.mounts.is_empty() {
            tracing::debug!(?command, "navigation command with no listener");
        }
        for mount in self.mounts.iter_mut() {
            (mount.listener)(command);
        }
        self.mounts.len()
    }

    pub fn listener_count(&self) -> usize {
        self.mounts.len()
    }
}

impl Default for NavigationBridge {
    fn default() -> Self {
        Self::new()
    }
}
