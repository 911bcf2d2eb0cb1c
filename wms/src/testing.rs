use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor::{self, Fetch};
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::scan::LocatorScanner;
use crate::state::{AppState, ScreenId};
use crate::ui::screens::Screen;
use std::sync::Arc;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands are applied synchronously; any fetch they request is recorded
/// instead of issued, so tests can assert on it and inject the response.
#[derive(Default)]
pub struct MockDataHandler {
    pub fetches: Vec<Fetch>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(fetch) = executor::apply_command(command, state) {
            self.fetches.push(fetch);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Create a test app whose scanner always returns `locator`
    pub fn with_fixed_scan(locator: &'static str) -> Self {
        let state = AppState::new().with_scanner(Arc::new(FixedScanner(locator)));
        Self {
            core: AppCore::with_state(state, MockDataHandler::new()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Fetches requested so far, oldest first
    pub fn fetches(&self) -> &[Fetch] {
        &self.core_handler().fetches
    }

    /// Screen targeted by the most recent fetch
    pub fn last_fetch_screen(&self) -> ScreenId {
        self.fetches()
            .last()
            .map(Fetch::screen_id)
            .expect("No fetch has been requested")
    }

    fn core_handler(&self) -> &MockDataHandler {
        self.core.handler()
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct FixedScanner(&'static str);

impl LocatorScanner for FixedScanner {
    fn scan(&self) -> String {
        self.0.to_string()
    }
}
