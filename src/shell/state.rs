use std::time::Instant;

use super::{Effect, Msg};
use crate::managers::load_scheduler::{FireOutcome, LoadScheduler};
use crate::managers::platform_store::PlatformStoreTrait;
use crate::types::navigation::{HistoryAvailability, NavCommand};
use crate::types::platform::PlatformEntry;

/// Contents of the add-platform modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub url: String,
}

impl AddForm {
    /// Both fields are required; nothing else is checked.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.url.is_empty()
    }
}

/// The whole application state.
pub struct Shell<S: PlatformStoreTrait> {
    store: S,
    selected: Option<String>,
    loading: bool,
    history: HistoryAvailability,
    fullscreen: bool,
    sidebar_visible: bool,
    add_form: Option<AddForm>,
    scheduler: LoadScheduler,
    /// URL of the last `Effect::Load`, until that navigation settles. The
    /// engine may report it normalized or redirected.
    issued: Option<String>,
    in_flight: Option<String>,
}

impl<S: PlatformStoreTrait> Shell<S> {
    pub fn new(store: S, scheduler: LoadScheduler) -> Self {
        Self {
            store,
            selected: None,
            loading: false,
            history: HistoryAvailability::default(),
            fullscreen: false,
            sidebar_visible: true,
            add_form: None,
            scheduler,
            issued: None,
            in_flight: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn platforms(&self) -> &[PlatformEntry] {
        self.store.list()
    }

    pub fn selected(&self) -> Option<&PlatformEntry> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    /// Navigation bar title: the selected platform's name.
    pub fn title(&self) -> Option<&str> {
        self.selected().map(|p| p.name.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> HistoryAvailability {
        self.history
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn add_form(&self) -> Option<&AddForm> {
        self.add_form.as_ref()
    }

    pub fn scheduler(&self) -> &LoadScheduler {
        &self.scheduler
    }

    /// When the runtime should next send [`Msg::Tick`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    pub fn update(&mut self, msg: Msg, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        match msg {
            Msg::SelectPlatform(id) => match self.store.get(&id) {
                Some(entry) => {
                    tracing::debug!(name = %entry.name, "platform selected");
                    let url = entry.url.clone();
                    self.selected = Some(id);
                    self.scheduler.schedule(&url, now);
                }
                None => tracing::debug!(%id, "selection of unknown platform ignored"),
            },

            Msg::ClearSelection => {
                self.selected = None;
                self.scheduler.cancel();
            }

            Msg::AddPlatform { name, url } => self.add_platform(&name, &url),

            Msg::RemovePlatform(id) => {
                if let Err(e) = self.store.remove(&id) {
                    tracing::error!(error = %e, "failed to persist platform removal");
                }
                if self.selected.as_deref() == Some(id.as_str()) && self.store.get(&id).is_none() {
                    self.selected = None;
                    self.scheduler.cancel();
                }
            }

            Msg::OpenAddForm => {
                if self.add_form.is_none() {
                    self.add_form = Some(AddForm::default());
                }
            }

            Msg::EditAddForm { name, url } => {
                if let Some(form) = self.add_form.as_mut() {
                    form.name = name;
                    form.url = url;
                }
            }

            Msg::SubmitAddForm => {
                let ready = self.add_form.as_ref().filter(|f| f.can_submit()).cloned();
                if let Some(form) = ready {
                    self.add_platform(&form.name, &form.url);
                    self.add_form = None;
                }
            }

            Msg::CancelAddForm => self.add_form = None,

            Msg::GoBack => {
                if self.selected.is_some() && self.history.can_go_back {
                    effects.push(Effect::Navigate(NavCommand::GoBack));
                }
            }

            Msg::GoForward => {
                if self.selected.is_some() && self.history.can_go_forward {
                    effects.push(Effect::Navigate(NavCommand::GoForward));
                }
            }

            Msg::Refresh => {
                if self.selected.is_some() {
                    effects.push(Effect::Navigate(NavCommand::Refresh));
                }
            }

            Msg::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                effects.push(Effect::SetFullscreen(self.fullscreen));
            }

            Msg::FullscreenChanged(fullscreen) => self.fullscreen = fullscreen,

            Msg::ToggleSidebar => self.sidebar_visible = !self.sidebar_visible,

            Msg::NavigationStarted { url, history } => {
                self.loading = true;
                self.history = history;
                self.in_flight = Some(self.issued.clone().unwrap_or(url));
            }

            Msg::NavigationFinished { url, history } => {
                tracing::debug!(%url, "navigation finished");
                self.loading = false;
                self.history = history;
                self.settle(&mut effects);
            }

            Msg::NavigationFailed { url, error, history } => {
                tracing::warn!(%url, %error, "navigation failed");
                self.loading = false;
                self.history = history;
                self.settle(&mut effects);
            }

            Msg::Tick => {
                if let Some(outcome) = self.scheduler.poll(now, self.in_flight.as_deref()) {
                    match outcome {
                        FireOutcome::Load(url) => {
                            tracing::info!(%url, "loading");
                            self.issued = Some(url.clone());
                            effects.push(Effect::Load(url));
                        }
                        FireOutcome::Deferred => {
                            tracing::debug!("load deferred until current navigation settles")
                        }
                        FireOutcome::Skipped => tracing::debug!("load skipped, already in flight"),
                        FireOutcome::Stale => {}
                    }
                }
            }
        }

        effects
    }

    fn add_platform(&mut self, name: &str, url: &str) {
        if let Err(e) = self.store.add(name, url) {
            tracing::error!(error = %e, "failed to persist new platform");
        }
    }

    fn settle(&mut self, effects: &mut Vec<Effect>) {
        self.in_flight = None;
        self.issued = None;
        if let Some(url) = self.scheduler.settle() {
            tracing::info!(%url, "loading deferred request");
            self.issued = Some(url.clone());
            effects.push(Effect::Load(url));
        }
    }
}
