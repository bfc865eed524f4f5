use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::analysis::AnalysisService;
use crate::config::Config;
use crate::notify::ToastQueue;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::page::{PendingSubmission, RequestController};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive page until the user quits.
///
/// Requests run on `runtime`; their outcomes come back through the event
/// channel so all state changes stay on this thread.
pub fn run(
    config: &Config,
    service: Arc<dyn AnalysisService>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let toasts = ToastQueue::new(config.ui.max_toasts, config.ui.toast_duration());
    let mut app = App::new(RequestController::new(toasts), config.endpoint.url.clone());
    let events = EventHandler::new(tick_rate);
    tracing::info!(endpoint = %config.endpoint.url, "TUI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Submit(pending) = handle_key(&mut app, key) {
                    spawn_analysis(&runtime, Arc::clone(&service), pending, events.sender());
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize) => terminal.autoresize()?,
            Ok(AppEvent::AnalysisFinished {
                generation,
                outcome,
            }) => app.on_analysis_finished(generation, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("TUI stopped");
    Ok(())
}

fn spawn_analysis(
    runtime: &Handle,
    service: Arc<dyn AnalysisService>,
    pending: PendingSubmission,
    events: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let outcome = service.analyze(&pending.request).await;
        // The UI may have exited already.
        let _ = events.send(AppEvent::AnalysisFinished {
            generation: pending.generation,
            outcome,
        });
    });
}
