use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use page_logging::{page_info, page_warn};

use crate::dispatch::{DispatchSettings, Dispatcher, ReqwestDispatcher};
use crate::payload::SubmissionPayload;
use crate::{EngineEvent, SubmissionRequest};

/// Injected wall clock producing the `submittedAt` timestamp.
pub type EngineClock = Arc<dyn Fn() -> String + Send + Sync>;

pub struct EngineConfig {
    pub settings: DispatchSettings,
    pub submitted_utc: EngineClock,
}

impl EngineConfig {
    pub fn new(settings: DispatchSettings, submitted_utc: EngineClock) -> Self {
        Self {
            settings,
            submitted_utc,
        }
    }
}

enum EngineCommand {
    Submit(SubmissionRequest),
}

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    // Shared so a clone of the handle can poll events from its own thread.
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let dispatcher = Arc::new(ReqwestDispatcher::new(config.settings.clone()));
        let clock = config.submitted_utc.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let dispatcher = dispatcher.clone();
                let event_tx = event_tx.clone();
                let clock = clock.clone();
                runtime.spawn(async move {
                    handle_command(dispatcher.as_ref(), command, &clock, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, request: SubmissionRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    dispatcher: &dyn Dispatcher,
    command: EngineCommand,
    clock: &EngineClock,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit(request) => {
            let payload = SubmissionPayload {
                source: request.source,
                page: request.page,
                submitted_at: (clock.as_ref())(),
                form_meta: request.meta,
                data: request.fields,
            };
            page_info!(
                "Dispatch form_id={} fields={} endpoint={}",
                request.form_id,
                payload.data.len(),
                request.endpoint
            );
            let result = dispatcher.dispatch(&request.endpoint, &payload).await;
            if let Err(err) = &result {
                page_warn!("Dispatch for form {} failed: {}", request.form_id, err);
            }
            let _ = event_tx.send(EngineEvent::DispatchCompleted {
                form_id: request.form_id,
                result,
            });
        }
    }
}
