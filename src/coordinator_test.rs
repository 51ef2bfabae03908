use super::*;
use crate::state::overlay::{OverlayBody, OverlayState};
use crate::state::theme::DEFAULT_STORAGE_KEY;
use crate::util::storage::MemoryStore;

fn env() -> PageEnv {
    PageEnv { host: "example.com".into(), toggle_host: ToggleHost::Header, ..PageEnv::default() }
}

fn start_at(env: &PageEnv, store: &mut MemoryStore, now: u64) -> PageCoordinator {
    PageCoordinator::start(env, ChromeConfig::default(), store, now).0
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_broadcasts_resolved_theme() {
    let mut store = MemoryStore::new();
    let env = PageEnv { os_prefers_dark: true, ..env() };
    let (coordinator, commands) = PageCoordinator::start(&env, ChromeConfig::default(), &mut store, 0);
    assert_eq!(commands, vec![Command::ThemeChanged(ThemeMode::Dark)]);
    assert_eq!(coordinator.current_mode(), ThemeMode::Dark);
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn start_shows_loader_immediately() {
    let mut store = MemoryStore::new();
    let coordinator = start_at(&env(), &mut store, 0);
    assert_eq!(coordinator.overlay().state(), OverlayState::Active("Loading...".into()));
}

#[test]
fn parsed_document_hides_loader_after_300ms() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 1_000);
    assert_eq!(coordinator.next_deadline(), Some(1_300));

    coordinator.tick(1_299);
    assert!(coordinator.overlay().is_visible());

    coordinator.tick(1_300);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

#[test]
fn loading_document_waits_for_dom_ready_then_500ms() {
    let mut store = MemoryStore::new();
    let env = PageEnv { ready_state: ReadyState::Loading, ..env() };
    let mut coordinator = start_at(&env, &mut store, 0);
    assert!(coordinator.next_deadline().is_none());

    coordinator.tick(10_000);
    assert!(coordinator.overlay().is_visible());

    coordinator.handle(PageEvent::DomContentLoaded, 10_000, &mut store);
    assert_eq!(coordinator.next_deadline(), Some(10_500));

    coordinator.tick(10_500);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

#[test]
fn duplicate_dom_ready_schedules_once() {
    let mut store = MemoryStore::new();
    let env = PageEnv { ready_state: ReadyState::Loading, ..env() };
    let mut coordinator = start_at(&env, &mut store, 0);
    coordinator.handle(PageEvent::DomContentLoaded, 0, &mut store);
    coordinator.handle(PageEvent::DomContentLoaded, 100, &mut store);
    assert_eq!(coordinator.next_deadline(), Some(500));
    coordinator.tick(500);
    assert!(coordinator.next_deadline().is_none());
}

#[test]
fn ready_state_from_dom_strings() {
    assert_eq!(ReadyState::from_dom("loading"), ReadyState::Loading);
    assert_eq!(ReadyState::from_dom("interactive"), ReadyState::Parsed);
    assert_eq!(ReadyState::from_dom("complete"), ReadyState::Parsed);
}

#[test]
fn missing_header_does_not_prevent_startup() {
    let mut store = MemoryStore::with(DEFAULT_STORAGE_KEY, "dark");
    let env = PageEnv { toggle_host: ToggleHost::Missing, ..env() };
    let coordinator = start_at(&env, &mut store, 0);
    assert_eq!(coordinator.current_mode(), ThemeMode::Dark);
    assert!(coordinator.theme().toggle_view().is_none());
}

#[test]
fn missing_overlay_element_disables_loader_only() {
    let mut store = MemoryStore::new();
    let env = PageEnv { overlay_mounted: false, ..env() };
    let mut coordinator = start_at(&env, &mut store, 0);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);

    coordinator.show_notice("still works", None, None, 0);
    assert!(coordinator.notice().is_visible());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn internal_click_is_intercepted_and_navigates_after_300ms() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.tick(1_000);

    let decision = coordinator.on_click(&AnchorClick::new("/internal/page"), 2_000);

    assert_eq!(decision, ClickDecision::Intercept);
    assert_eq!(coordinator.overlay().state(), OverlayState::Active("Navigating...".into()));
    assert!(coordinator.tick(2_299).is_empty());
    assert_eq!(coordinator.tick(2_300), vec![Command::Navigate("/internal/page".into())]);
}

#[test]
fn external_click_passes_through() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.tick(1_000);

    let decision = coordinator.on_click(&AnchorClick::new("https://other.com/x"), 2_000);

    assert_eq!(decision, ClickDecision::PassThrough);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
    assert!(coordinator.next_deadline().is_none());
}

#[test]
fn excluded_links_pass_through() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    for click in [
        AnchorClick::new("#top"),
        AnchorClick::new("javascript:void(0)"),
        AnchorClick::new("/x").with_target("_blank"),
        AnchorClick::new("/x").modified(),
        AnchorClick::default(),
    ] {
        assert_eq!(coordinator.on_click(&click, 0), ClickDecision::PassThrough);
    }
}

#[test]
fn offline_during_navigation_delay_still_navigates() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.tick(1_000);
    coordinator.on_click(&AnchorClick::new("/next"), 1_000);

    coordinator.handle(PageEvent::ConnectionLost, 1_100, &mut store);
    assert_eq!(coordinator.overlay().state(), OverlayState::Offline);

    assert_eq!(coordinator.tick(1_300), vec![Command::Navigate("/next".into())]);
}

// =============================================================
// Network
// =============================================================

#[test]
fn connection_lost_then_restored() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);

    coordinator.handle(PageEvent::ConnectionLost, 10, &mut store);
    assert_eq!(coordinator.overlay().body(), &OverlayBody::Offline);

    coordinator.handle(PageEvent::ConnectionRestored, 20, &mut store);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

#[test]
fn connection_restored_hides_application_error() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.show_error(Some("Failed to load data".into()));
    coordinator.handle(PageEvent::ConnectionRestored, 10, &mut store);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

#[test]
fn overlay_actions_map_to_reload_and_dismiss() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.show_offline();

    let commands = coordinator.handle(PageEvent::Overlay(OverlayAction::Retry), 0, &mut store);
    assert_eq!(commands, vec![Command::Reload]);
    assert_eq!(coordinator.overlay().state(), OverlayState::Offline);

    let commands = coordinator.handle(PageEvent::Overlay(OverlayAction::ContinueOffline), 0, &mut store);
    assert!(commands.is_empty());
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

#[test]
fn startup_grace_hide_is_last_write_wins() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.show_error(None);
    coordinator.tick(300);
    assert_eq!(coordinator.overlay().state(), OverlayState::Hidden);
}

// =============================================================
// Theme + notice through the coordinator
// =============================================================

#[test]
fn toggle_click_flips_theme_and_requests_restyle() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);

    let commands = coordinator.handle(PageEvent::ThemeToggleClicked, 0, &mut store);

    assert_eq!(commands, vec![Command::ThemeChanged(ThemeMode::Dark), Command::RestyleCharts]);
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn notice_supersede_scenario() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.show_notice("A", Some(NoticeKind::Success), Some(1_000), 0);
    coordinator.show_notice("B", Some(NoticeKind::Warning), Some(5_000), 0);

    coordinator.tick(1_500);
    assert!(coordinator.notice().is_visible());
    assert_eq!(coordinator.notice().text(), "B");
    assert_eq!(coordinator.notice().kind(), NoticeKind::Warning);

    coordinator.tick(5_100);
    assert!(!coordinator.notice().is_visible());
}

#[test]
fn notice_defaults_to_success_and_configured_duration() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.tick(1_000);
    coordinator.show_notice("Saved", None, None, 1_000);
    assert_eq!(coordinator.notice().kind(), NoticeKind::Success);
    assert_eq!(coordinator.next_deadline(), Some(4_000));
}

#[test]
fn clicking_notice_hides_it() {
    let mut store = MemoryStore::new();
    let mut coordinator = start_at(&env(), &mut store, 0);
    coordinator.show_notice("Saved", None, None, 0);
    coordinator.handle(PageEvent::NoticeClicked, 10, &mut store);
    assert!(!coordinator.notice().is_visible());
}

#[test]
fn configured_messages_and_delays_are_used() {
    let mut store = MemoryStore::new();
    let config = ChromeConfig {
        loading_message: "Preparing...".into(),
        navigating_message: "Leaving...".into(),
        navigation_delay_ms: 0,
        ..ChromeConfig::default()
    };
    let (mut coordinator, _) = PageCoordinator::start(&env(), config, &mut store, 0);
    assert_eq!(coordinator.overlay().state(), OverlayState::Active("Preparing...".into()));

    coordinator.on_click(&AnchorClick::new("/a"), 50);
    assert_eq!(coordinator.overlay().state(), OverlayState::Active("Leaving...".into()));
    assert_eq!(coordinator.tick(50), vec![Command::Navigate("/a".into())]);
}
