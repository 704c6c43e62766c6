//! Tests for the shell's update function: selection, the add form, removal,
//! history commands and navigation outcomes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rstest::rstest;
use streamhub::database::Database;
use streamhub::logging;
use streamhub::managers::load_scheduler::LoadScheduler;
use streamhub::managers::platform_store::{PlatformStore, PlatformStoreTrait};
use streamhub::shell::{Effect, Msg, Shell};
use streamhub::types::errors::StoreError;
use streamhub::types::navigation::{HistoryAvailability, NavCommand};
use streamhub::types::platform::{default_platforms, PlatformEntry};

const DELAY: Duration = Duration::from_millis(300);

fn shell() -> Shell<PlatformStore> {
    logging::init_test();
    let db = Arc::new(Database::open_in_memory().expect("open_in_memory failed"));
    Shell::new(PlatformStore::load(db), LoadScheduler::new(DELAY))
}

fn id_at(shell: &Shell<PlatformStore>, i: usize) -> String {
    shell.platforms()[i].id.clone()
}

const BOTH: HistoryAvailability = HistoryAvailability {
    can_go_back: true,
    can_go_forward: true,
};

#[test]
fn test_initial_state() {
    let shell = shell();
    assert_eq!(shell.platforms().len(), 7);
    assert!(shell.selected().is_none());
    assert!(shell.title().is_none());
    assert!(!shell.is_loading());
    assert!(!shell.is_fullscreen());
    assert!(shell.is_sidebar_visible());
    assert!(shell.add_form().is_none());
    assert_eq!(shell.next_deadline(), None);
}

#[test]
fn test_select_schedules_debounced_load() {
    let mut shell = shell();
    let t0 = Instant::now();
    let id = id_at(&shell, 1);

    let effects = shell.update(Msg::SelectPlatform(id), t0);
    assert!(effects.is_empty(), "selection must not load immediately");
    assert_eq!(shell.title(), Some("Netflix"));
    assert_eq!(shell.next_deadline(), Some(t0 + DELAY));

    assert!(shell.update(Msg::Tick, t0 + Duration::from_millis(10)).is_empty());
    assert_eq!(
        shell.update(Msg::Tick, t0 + DELAY),
        vec![Effect::Load("https://www.netflix.com".to_string())]
    );
}

#[test]
fn test_two_rapid_selections_load_once() {
    let mut shell = shell();
    let t0 = Instant::now();
    let a = id_at(&shell, 0);
    let b = id_at(&shell, 2);

    shell.update(Msg::SelectPlatform(a), t0);
    shell.update(Msg::SelectPlatform(b), t0 + Duration::from_millis(50));

    let mut loads = Vec::new();
    for ms in (0..1000).step_by(25) {
        loads.extend(shell.update(Msg::Tick, t0 + Duration::from_millis(ms)));
    }
    assert_eq!(loads, vec![Effect::Load("https://www.jiocinema.com".to_string())]);
}

#[test]
fn test_unknown_selection_is_ignored() {
    let mut shell = shell();
    shell.update(Msg::SelectPlatform("missing".into()), Instant::now());
    assert!(shell.selected().is_none());
    assert_eq!(shell.next_deadline(), None);
}

#[test]
fn test_add_form_submission() {
    let mut shell = shell();
    let now = Instant::now();

    shell.update(Msg::OpenAddForm, now);
    assert!(shell.add_form().is_some());

    shell.update(Msg::EditAddForm { name: "Mubi".into(), url: String::new() }, now);
    assert!(!shell.add_form().unwrap().can_submit());
    shell.update(Msg::SubmitAddForm, now);
    assert!(shell.add_form().is_some(), "incomplete form stays open");
    assert_eq!(shell.platforms().len(), 7);

    shell.update(Msg::EditAddForm { name: "Mubi".into(), url: "mubi.com".into() }, now);
    shell.update(Msg::SubmitAddForm, now);
    assert!(shell.add_form().is_none());
    assert_eq!(shell.platforms().len(), 8);
    assert_eq!(shell.platforms()[7].url, "https://mubi.com");
}

#[test]
fn test_cancel_discards_form() {
    let mut shell = shell();
    let now = Instant::now();
    shell.update(Msg::OpenAddForm, now);
    shell.update(Msg::EditAddForm { name: "X".into(), url: "x.tv".into() }, now);
    shell.update(Msg::CancelAddForm, now);
    assert!(shell.add_form().is_none());
    assert_eq!(shell.platforms().len(), 7);

    shell.update(Msg::OpenAddForm, now);
    assert_eq!(shell.add_form().unwrap().name, "");
}

#[test]
fn test_edit_without_open_form_is_ignored() {
    let mut shell = shell();
    shell.update(Msg::EditAddForm { name: "X".into(), url: "x".into() }, Instant::now());
    assert!(shell.add_form().is_none());
}

#[test]
fn test_removing_selected_entry_clears_selection() {
    let mut shell = shell();
    let t0 = Instant::now();
    shell.update(Msg::AddPlatform { name: "Mine".into(), url: "mine.tv".into() }, t0);
    let id = id_at(&shell, 7);

    shell.update(Msg::SelectPlatform(id.clone()), t0);
    shell.update(Msg::RemovePlatform(id), t0);

    assert!(shell.selected().is_none());
    assert_eq!(shell.next_deadline(), None, "pending load is cancelled");
    assert!(shell.update(Msg::Tick, t0 + DELAY).is_empty());
}

#[test]
fn test_removing_other_entry_keeps_selection() {
    let mut shell = shell();
    let t0 = Instant::now();
    shell.update(Msg::AddPlatform { name: "Mine".into(), url: "mine.tv".into() }, t0);
    let custom = id_at(&shell, 7);
    let netflix = id_at(&shell, 1);

    shell.update(Msg::SelectPlatform(netflix), t0);
    shell.update(Msg::RemovePlatform(custom), t0);
    assert_eq!(shell.title(), Some("Netflix"));
}

#[test]
fn test_builtin_cannot_be_removed_through_shell() {
    let mut shell = shell();
    let id = id_at(&shell, 0);
    shell.update(Msg::SelectPlatform(id.clone()), Instant::now());
    shell.update(Msg::RemovePlatform(id), Instant::now());
    assert_eq!(shell.platforms().len(), 7);
    assert_eq!(shell.title(), Some("Prime Video"));
}

#[rstest]
#[case(Msg::GoBack)]
#[case(Msg::GoForward)]
#[case(Msg::Refresh)]
fn test_history_commands_ignored_without_selection(#[case] msg: Msg) {
    let mut shell = shell();
    let now = Instant::now();
    shell.update(
        Msg::NavigationFinished { url: "https://x.tv".into(), history: BOTH },
        now,
    );
    assert!(shell.update(msg, now).is_empty());
}

#[test]
fn test_back_forward_follow_availability() {
    let mut shell = shell();
    let now = Instant::now();
    shell.update(Msg::SelectPlatform(id_at(&shell, 1)), now);

    assert!(shell.update(Msg::GoBack, now).is_empty());
    assert!(shell.update(Msg::GoForward, now).is_empty());
    assert_eq!(shell.update(Msg::Refresh, now), vec![Effect::Navigate(NavCommand::Refresh)]);

    shell.update(
        Msg::NavigationFinished {
            url: "https://www.netflix.com/browse".into(),
            history: HistoryAvailability { can_go_back: true, can_go_forward: false },
        },
        now,
    );
    assert_eq!(shell.update(Msg::GoBack, now), vec![Effect::Navigate(NavCommand::GoBack)]);
    assert!(shell.update(Msg::GoForward, now).is_empty());
}

#[test]
fn test_navigation_lifecycle_drives_loading() {
    let mut shell = shell();
    let now = Instant::now();
    let history = HistoryAvailability::default();

    shell.update(Msg::NavigationStarted { url: "https://a.tv".into(), history }, now);
    assert!(shell.is_loading());
    shell.update(Msg::NavigationFinished { url: "https://a.tv".into(), history }, now);
    assert!(!shell.is_loading());
}

#[test]
fn test_failure_clears_loading_without_retry() {
    let mut shell = shell();
    let now = Instant::now();
    let history = HistoryAvailability::default();
    shell.update(Msg::SelectPlatform(id_at(&shell, 1)), now);
    shell.update(Msg::Tick, now + DELAY);

    shell.update(
        Msg::NavigationStarted { url: "https://www.netflix.com".into(), history },
        now + DELAY,
    );
    let effects = shell.update(
        Msg::NavigationFailed {
            url: "https://www.netflix.com".into(),
            error: "net::ERR_NAME_NOT_RESOLVED".into(),
            history,
        },
        now + DELAY,
    );
    assert!(effects.is_empty(), "failures are not retried");
    assert!(!shell.is_loading());
    assert_eq!(shell.title(), Some("Netflix"));
}

#[test]
fn test_selection_during_load_is_deferred_until_finish() {
    let mut shell = shell();
    let t0 = Instant::now();
    let history = HistoryAvailability::default();

    shell.update(Msg::SelectPlatform(id_at(&shell, 0)), t0);
    shell.update(Msg::Tick, t0 + DELAY);
    shell.update(
        Msg::NavigationStarted { url: "https://www.primevideo.com".into(), history },
        t0 + DELAY,
    );

    let t1 = t0 + DELAY + Duration::from_millis(10);
    shell.update(Msg::SelectPlatform(id_at(&shell, 3)), t1);
    assert!(shell.update(Msg::Tick, t1 + DELAY).is_empty(), "in-flight load is not interrupted");

    let effects = shell.update(
        Msg::NavigationFinished { url: "https://www.primevideo.com".into(), history },
        t1 + DELAY,
    );
    assert_eq!(effects, vec![Effect::Load("https://www.hotstar.com".to_string())]);
}

#[rstest]
#[case::trailing_slash("https://www.netflix.com/")]
#[case::redirected("https://www.netflix.com/in/")]
fn test_reselecting_loading_platform_does_not_reload(#[case] reported: &str) {
    let mut shell = shell();
    let t0 = Instant::now();
    let history = HistoryAvailability::default();
    let netflix = id_at(&shell, 1);

    shell.update(Msg::SelectPlatform(netflix.clone()), t0);
    let first = shell.update(Msg::Tick, t0 + DELAY);
    assert_eq!(first, vec![Effect::Load("https://www.netflix.com".to_string())]);
    shell.update(Msg::NavigationStarted { url: reported.into(), history }, t0 + DELAY);

    let t1 = t0 + DELAY + Duration::from_millis(10);
    shell.update(Msg::SelectPlatform(netflix), t1);
    assert!(shell.update(Msg::Tick, t1 + DELAY).is_empty());
    assert_eq!(shell.scheduler().deferred_url(), None);

    let on_finish = shell.update(Msg::NavigationFinished { url: reported.into(), history }, t1 + DELAY);
    assert!(on_finish.is_empty(), "same page must not load twice");
}

#[test]
fn test_fullscreen_and_sidebar_toggles() {
    let mut shell = shell();
    let now = Instant::now();

    assert_eq!(shell.update(Msg::ToggleFullscreen, now), vec![Effect::SetFullscreen(true)]);
    assert!(shell.is_fullscreen());
    shell.update(Msg::FullscreenChanged(false), now);
    assert!(!shell.is_fullscreen());

    shell.update(Msg::ToggleSidebar, now);
    assert!(!shell.is_sidebar_visible());
    shell.update(Msg::ToggleSidebar, now);
    assert!(shell.is_sidebar_visible());
}

/// Store whose writes always fail, to check that the in-memory list still
/// changes.
struct ReadOnlyStore {
    platforms: Vec<PlatformEntry>,
}

impl PlatformStoreTrait for ReadOnlyStore {
    fn list(&self) -> &[PlatformEntry] {
        &self.platforms
    }

    fn get(&self, id: &str) -> Option<&PlatformEntry> {
        self.platforms.iter().find(|p| p.id == id)
    }

    fn add(&mut self, name: &str, url: &str) -> Result<PlatformEntry, StoreError> {
        let entry = PlatformEntry::custom(name, url);
        self.platforms.push(entry);
        Err(StoreError::DatabaseError("read-only".to_string()))
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        self.platforms.retain(|p| !(p.is_custom && p.id == id));
        Err(StoreError::DatabaseError("read-only".to_string()))
    }

    fn custom_platforms(&self) -> Vec<&PlatformEntry> {
        self.platforms.iter().filter(|p| p.is_custom).collect()
    }
}

#[test]
fn test_persistence_failure_keeps_in_memory_change() {
    let store = ReadOnlyStore { platforms: default_platforms() };
    let mut shell = Shell::new(store, LoadScheduler::new(DELAY));
    let now = Instant::now();

    shell.update(Msg::AddPlatform { name: "Kept".into(), url: "kept.tv".into() }, now);
    assert_eq!(shell.platforms().len(), 8);

    let id = shell.platforms()[7].id.clone();
    shell.update(Msg::RemovePlatform(id), now);
    assert_eq!(shell.platforms().len(), 7);
}
