use cluegrid_core::{acquire::acquire_game, event::AppEvent, service::TriviaProvider};
use std::{
    sync::{Arc, atomic::Ordering},
    thread,
};

use super::EventSender;

pub(super) fn spawn_acquisition(
    provider: &Arc<dyn TriviaProvider>,
    sender: &EventSender,
    category_count: usize,
) {
    let provider = Arc::clone(provider);
    let sender = sender.clone();
    log::debug!("spawning acquisition for {category_count} categories");
    thread::spawn(move || {
        if sender.cancel.load(Ordering::Relaxed) {
            return;
        }
        match acquire_game(provider.as_ref(), category_count) {
            Ok(board) => sender.send(AppEvent::GameReady { board }),
            Err(e) => sender.send(AppEvent::AcquisitionFailed {
                error: format!("{e}"),
            }),
        }
    });
}
