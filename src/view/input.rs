use std::io::{self, BufRead};

use crossbeam_channel as cbc;
use log::debug;

/// Forwards stdin lines as run triggers. Every line is one press of the
/// start button; end of input ends the thread and, through the channel
/// disconnect, the engine.
pub struct TriggerInput {
    start_tx: cbc::Sender<()>,
}

impl TriggerInput {
    pub fn new(start_tx: cbc::Sender<()>) -> TriggerInput {
        TriggerInput { start_tx }
    }

    pub fn run(self) {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            if self.start_tx.send(()).is_err() {
                break;
            }
        }
        debug!("trigger input closed");
    }
}
