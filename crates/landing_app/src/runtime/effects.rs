use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use landing_core::{DispatchOutcome, Effect, FormId, Msg, PageDescriptor};
use landing_engine::{
    DispatchSettings, EngineConfig, EngineEvent, EngineHandle, FieldMap, FormMeta,
    SubmissionRequest,
};
use page_logging::{page_info, page_warn};

struct FormTarget {
    endpoint: String,
    meta: FormMeta,
}

/// Executes effects produced by the core: submissions go to the engine,
/// timers to sleeper threads, focus/scroll/alert to platform commands
/// (logged in this headless shell).
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    targets: HashMap<FormId, FormTarget>,
    source: String,
    page: String,
}

impl EffectRunner {
    pub fn new(
        descriptor: &PageDescriptor,
        settings: DispatchSettings,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let config = EngineConfig::new(settings, Arc::new(|| Utc::now().to_rfc3339()));
        let engine = EngineHandle::new(config);

        let targets = descriptor
            .forms
            .iter()
            .map(|form| {
                (
                    form.form_id,
                    FormTarget {
                        endpoint: form.endpoint.clone(),
                        meta: FormMeta {
                            id: form.element_id.clone(),
                            name: form.name.clone(),
                        },
                    },
                )
            })
            .collect();

        let runner = Self {
            engine,
            msg_tx: msg_tx.clone(),
            targets,
            source: descriptor.source.clone(),
            page: descriptor.page_path.clone(),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::DispatchSubmission { form_id, fields } => {
                    let Some(target) = self.targets.get(&form_id) else {
                        page_warn!("No dispatch target for form {}", form_id);
                        continue;
                    };
                    page_info!(
                        "DispatchSubmission form_id={} fields={}",
                        form_id,
                        fields.len()
                    );
                    self.engine.submit(SubmissionRequest {
                        form_id,
                        endpoint: target.endpoint.clone(),
                        meta: target.meta.clone(),
                        source: self.source.clone(),
                        page: self.page.clone(),
                        fields: FieldMap::from_pairs(fields),
                    });
                }
                Effect::ScheduleTransition { token, delay_ms } => {
                    let tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(Duration::from_millis(delay_ms));
                        let _ = tx.send(Msg::TransitionElapsed { token });
                    });
                }
                Effect::MoveFocus { element_id } => {
                    page_info!("focus -> #{}", element_id);
                }
                Effect::ShowAlert { message } => {
                    // The page equivalent is a blocking alert().
                    page_warn!("alert: {}", message);
                }
                Effect::ScrollTo { target_id, smooth } => {
                    page_info!("scroll -> #{} smooth={}", target_id, smooth);
                }
                Effect::ClearFieldValue { element_id } => {
                    page_info!("clear -> #{}", element_id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::DispatchCompleted { form_id, result } => {
                        let outcome = match &result {
                            Ok(_) => DispatchOutcome::Success,
                            Err(err) => {
                                page_warn!("Dispatch for form {} failed: {}", form_id, err);
                                DispatchOutcome::Failed
                            }
                        };
                        let _ = msg_tx.send(Msg::DispatchCompleted { form_id, outcome });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_timer_delivers_the_token() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(&PageDescriptor::default(), Default::default(), msg_tx);

        runner.run(vec![Effect::ScheduleTransition {
            token: 9,
            delay_ms: 10,
        }]);

        let msg = msg_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("timer message");
        assert_eq!(msg, Msg::TransitionElapsed { token: 9 });
    }

    #[test]
    fn dispatch_without_target_is_dropped() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(&PageDescriptor::default(), Default::default(), msg_tx);

        runner.run(vec![Effect::DispatchSubmission {
            form_id: 42,
            fields: Vec::new(),
        }]);

        // Nothing reaches the engine, so no completion comes back.
        assert!(msg_rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
