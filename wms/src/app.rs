use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::AppState;
use crate::ui::screens::Screen;
use wms_api::Client;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::default();
        let logging = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!("wms starting, logging to {}", logging.log_path.display());
        tracing::info!(
            "Backend {} (picker {})",
            self.settings.api.base_url,
            self.settings.api.picker_name
        );

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::from_settings(&self.settings);
        let mut task_manager = BackgroundTaskManager::new();

        let api_client = Arc::new(Client::new(&self.settings.api.base_url));
        let data_loader = DataLoader::new(api_client, data_tx);

        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            // Logs screen would log its own scrolling; login keys are credentials
                            let quiet = matches!(
                                ui_state.current_screen(),
                                Screen::Logs(_) | Screen::Login(_)
                            );
                            if !quiet {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                if !quiet {
                                    tracing::info!("Executing command: {:?}", command);
                                }
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &data_loader,
                                );
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {}", describe(&data_event));
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        // Cancel all background data loading tasks
        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// One-line summary of a data event; full datasets are too noisy for the log
fn describe(event: &crate::events::DataEvent) -> String {
    use crate::events::DataEvent;
    match event {
        DataEvent::PurchaseOrdersLoaded { screen_id, lines } => {
            format!("PurchaseOrdersLoaded {} ({} lines)", screen_id, lines.len())
        }
        DataEvent::PurchaseOrdersLoadFailed { screen_id, error } => {
            format!("PurchaseOrdersLoadFailed {} ({})", screen_id, error)
        }
        DataEvent::OnhandLoaded {
            screen_id,
            onhand,
            lots,
        } => format!(
            "OnhandLoaded {} ({} rows, {} lots)",
            screen_id,
            onhand.len(),
            lots.len()
        ),
        DataEvent::OnhandLoadFailed { screen_id, error } => {
            format!("OnhandLoadFailed {} ({})", screen_id, error)
        }
    }
}
