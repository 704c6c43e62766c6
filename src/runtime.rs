//! Couples the shell to a browser control.
//!
//! The runtime owns the [`Shell`], the mounted browser and the
//! [`NavigationBridge`] between them. It feeds messages into
//! [`Shell::update`] and carries out the effects that concern the browser.
//! Effects that concern the window (fullscreen) are handed back to the
//! caller, which owns the window.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Instant;

use crate::browser::BrowserControl;
use crate::ipc_handler;
use crate::managers::navigation_bridge::{MountId, NavigationBridge};
use crate::managers::platform_store::PlatformStoreTrait;
use crate::managers::shortcut_manager::ShortcutManager;
use crate::shell::{Effect, Msg, Shell, ViewModel};
use crate::types::navigation::{BrowserEvent, NavCommand};

/// Owner name the browser's listeners are mounted under.
const BROWSER_OWNER: &str = "browser";

pub struct ShellRuntime<S: PlatformStoreTrait, B: BrowserControl + 'static> {
    shell: Shell<S>,
    browser: Rc<RefCell<B>>,
    bridge: NavigationBridge,
    shortcuts: ShortcutManager,
    mount: MountId,
}

impl<S: PlatformStoreTrait, B: BrowserControl + 'static> ShellRuntime<S, B> {
    pub fn new(shell: Shell<S>, browser: B, shortcuts: ShortcutManager) -> Self {
        let mut bridge = NavigationBridge::new();
        let browser = Rc::new(RefCell::new(browser));
        let mount = Self::mount_listener(&mut bridge, &browser);
        Self {
            shell,
            browser,
            bridge,
            shortcuts,
            mount,
        }
    }

    fn mount_listener(bridge: &mut NavigationBridge, browser: &Rc<RefCell<B>>) -> MountId {
        let target = Rc::clone(browser);
        bridge.mount(BROWSER_OWNER, move |command| {
            let mut browser = target.borrow_mut();
            match command {
                NavCommand::GoBack => browser.go_back(),
                NavCommand::GoForward => browser.go_forward(),
                NavCommand::Refresh => browser.reload(),
            }
        })
    }

    /// Swaps in a recreated browser control. Its listener replaces the old
    /// one, so commands are never delivered twice.
    pub fn remount(&mut self, browser: B) {
        self.browser = Rc::new(RefCell::new(browser));
        self.mount = Self::mount_listener(&mut self.bridge, &self.browser);
        tracing::debug!(listeners = self.bridge.listener_count(), "browser remounted");
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn shell(&self) -> &Shell<S> {
        &self.shell
    }

    pub fn browser(&self) -> Ref<'_, B> {
        self.browser.borrow()
    }

    pub fn browser_mut(&self) -> RefMut<'_, B> {
        self.browser.borrow_mut()
    }

    pub fn bridge(&self) -> &NavigationBridge {
        &self.bridge
    }

    pub fn shortcuts(&self) -> &ShortcutManager {
        &self.shortcuts
    }

    /// Runs one update and applies its browser effects. Returns the effects
    /// left for the window layer.
    pub fn dispatch(&mut self, msg: Msg, now: Instant) -> Vec<Effect> {
        let effects = self.shell.update(msg, now);
        let mut remaining = Vec::new();

        for effect in effects {
            match effect {
                Effect::Load(url) => self.browser.borrow_mut().load(&url),
                Effect::Navigate(command) => {
                    self.bridge.publish(command);
                }
                other => remaining.push(other),
            }
        }

        remaining
    }

    /// Forwards a lifecycle notification: the browser observes it first,
    /// then the shell gets it along with fresh back/forward availability.
    pub fn browser_event(&mut self, event: BrowserEvent, now: Instant) -> Vec<Effect> {
        let history = {
            let mut browser = self.browser.borrow_mut();
            browser.observe(&event);
            browser.availability()
        };

        let msg = match event {
            BrowserEvent::Started { url } => Msg::NavigationStarted { url, history },
            BrowserEvent::Finished { url } => Msg::NavigationFinished { url, history },
            BrowserEvent::Failed { url, error } => Msg::NavigationFailed { url, error, history },
        };
        self.dispatch(msg, now)
    }

    /// Parses and dispatches an IPC message from the shell page.
    pub fn handle_ipc(&mut self, message: &str, now: Instant) -> Vec<Effect> {
        match ipc_handler::parse_message(message, &self.shortcuts) {
            Some(msg) => self.dispatch(msg, now),
            None => Vec::new(),
        }
    }

    /// Dispatches an IPC message from the content view. Pages there are
    /// untrusted and can only trigger bound shortcuts.
    pub fn handle_content_ipc(&mut self, message: &str, now: Instant) -> Vec<Effect> {
        match ipc_handler::parse_content_message(message, &self.shortcuts) {
            Some(msg) => self.dispatch(msg, now),
            None => Vec::new(),
        }
    }

    /// Fires the debounced load if it is due.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.dispatch(Msg::Tick, now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.shell.next_deadline()
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::from_shell(&self.shell)
    }
}
