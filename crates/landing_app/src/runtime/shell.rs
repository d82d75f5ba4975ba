use std::sync::mpsc;
use std::time::Duration;

use landing_core::{update, Msg, PageDescriptor, PageState, PageViewModel};
use landing_engine::DispatchSettings;
use page_logging::page_debug;

use super::effects::EffectRunner;
use super::render;

/// Single-threaded message pump binding page events to the core state
/// machine and its effects. Timer and engine callbacks arrive over the
/// same channel, so one callback runs to completion before the next.
pub struct PageShell {
    state: PageState,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    interaction_seq: u64,
}

impl PageShell {
    pub fn new(descriptor: PageDescriptor, settings: DispatchSettings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(&descriptor, settings, msg_tx.clone());
        Self {
            state: PageState::new(descriptor),
            msg_tx,
            msg_rx,
            effects,
            interaction_seq: 0,
        }
    }

    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Feed one page event into the state machine.
    pub fn dispatch(&mut self, msg: Msg) {
        self.interaction_seq += 1;
        page_logging::set_interaction_seq(self.interaction_seq);
        page_debug!("msg #{}: {:?}", self.interaction_seq, msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            render::render(&view);
        }
        self.effects.run(effects);
    }

    /// Drain queued messages (timer and engine callbacks).
    pub fn process_pending(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    /// Block up to `timeout` for the next queued message, then drain the
    /// rest. Returns false when the wait timed out.
    pub fn pump(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                self.process_pending();
                true
            }
            Err(_) => false,
        }
    }

    pub fn view(&self) -> PageViewModel {
        self.state.view()
    }
}
