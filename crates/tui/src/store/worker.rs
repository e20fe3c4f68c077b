use coursebook_client::Client;
use log::debug;
use std::sync::mpsc::{channel, Receiver, Sender};

use super::{Event, Request};
use crate::event::{Event as CrateEvent, EventBus};

/// Performs fetches it receives from the main thread, and sends the results back.
pub struct StoreWorker {
    client: Client,
    msg_recv: Receiver<Request>,
    event_send: Sender<CrateEvent>,
}

impl StoreWorker {
    /// Spawn the store worker on the given event bus, returning a channel to send requests down.
    pub(crate) fn spawn_on(bus: &EventBus, client: Client) -> Sender<Request> {
        let (cmd_send, cmd_recv) = channel();

        bus.spawn("store_worker", move |_, event_send| {
            StoreWorker {
                client,
                msg_recv: cmd_recv,
                event_send,
            }
            .main()
        });

        cmd_send
    }

    fn main(self) {
        while let Ok(msg) = self.msg_recv.recv() {
            debug!("received request: {:?}", msg);
            let event = match msg {
                Request::Quit => break,
                Request::Courses { seq } => Event::Courses {
                    seq,
                    result: self.client.courses(),
                },
            };

            if self.event_send.send(CrateEvent::Store(event)).is_err() {
                break;
            }
        }

        debug!("shutting down");
    }
}
