use coursebook_client::Course;
use log::{debug, error};
use std::sync::mpsc::Sender;

mod worker;
pub use worker::StoreWorker;

/// What we know about the course list right now.
#[derive(Debug, Default)]
pub enum CoursesState {
    /// Never visited, or discarded on navigation away.
    #[default]
    NotRequested,

    /// A fetch is outstanding.
    Loading,

    /// The snapshot we got back. May be empty.
    Loaded(Vec<Course>),

    /// The fetch failed. Detail goes to the log, not the UI.
    Failed,
}

/// Requests sent to the worker thread
#[derive(Debug)]
pub enum Request {
    Courses { seq: u64 },
    Quit,
}

/// Results sent back by the worker thread
#[derive(Debug)]
pub enum Event {
    Courses {
        seq: u64,
        result: Result<Vec<Course>, coursebook_client::Error>,
    },
}

/// Holds the course list snapshot for the current visit.
///
/// `fetch_seq` names the visit each request belongs to. A result carrying
/// any other seq is from a visit that already ended, and is dropped.
pub struct Store {
    courses: CoursesState,
    fetch_seq: u64,
    worker_channel: Sender<Request>,
}

impl Store {
    pub fn new(worker_channel: Sender<Request>) -> Self {
        Self {
            courses: Default::default(),
            fetch_seq: 0,
            worker_channel,
        }
    }

    pub fn courses(&self) -> &CoursesState {
        &self.courses
    }

    /// Kick off the one fetch for this visit to the course list.
    pub fn request_courses(&mut self) {
        self.fetch_seq += 1;
        self.courses = CoursesState::Loading;
        self.worker_channel
            .send(Request::Courses {
                seq: self.fetch_seq,
            })
            .unwrap()
    }

    /// Drop the snapshot. A fetch still in flight is orphaned; its result
    /// will be ignored when it lands.
    pub fn discard_courses(&mut self) {
        self.fetch_seq += 1;
        self.courses = CoursesState::NotRequested;
    }

    pub fn request_quit(&self) {
        let _ = self.worker_channel.send(Request::Quit);
    }

    pub fn event(&mut self, e: Event) {
        match e {
            Event::Courses { seq, result } => {
                if seq != self.fetch_seq || !matches!(self.courses, CoursesState::Loading) {
                    debug!("dropping result for fetch {} (now at {})", seq, self.fetch_seq);
                    return;
                }

                match result {
                    Ok(courses) => self.courses = CoursesState::Loaded(courses),
                    Err(e) => {
                        error!("course fetch failed: {}", e);
                        self.courses = CoursesState::Failed;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{channel, Receiver, TryRecvError};

    fn test_store() -> (Store, Receiver<Request>) {
        let (send, recv) = channel();
        (Store::new(send), recv)
    }

    fn outstanding_seq(recv: &Receiver<Request>) -> u64 {
        match recv.try_recv() {
            Ok(Request::Courses { seq }) => seq,
            other => panic!("expected a course fetch request, got {:?}", other),
        }
    }

    fn sample_courses() -> Vec<Course> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Intro to Databases", "description": "Relational models and SQL.", "created_at": "2024-03-05T12:30:00Z"},
                {"id": 2, "title": "Compilers", "description": "Lexing through codegen.", "created_at": "2024-09-01T08:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn request_sends_exactly_one_fetch() {
        let (mut store, recv) = test_store();

        store.request_courses();

        assert!(matches!(store.courses(), CoursesState::Loading));
        outstanding_seq(&recv);
        assert!(matches!(recv.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn successful_result_is_stored() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let seq = outstanding_seq(&recv);

        store.event(Event::Courses {
            seq,
            result: Ok(sample_courses()),
        });

        match store.courses() {
            CoursesState::Loaded(courses) => assert_eq!(courses.len(), 2),
            other => panic!("expected loaded courses, got {:?}", other),
        }
    }

    #[test]
    fn empty_result_is_still_loaded() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let seq = outstanding_seq(&recv);

        store.event(Event::Courses {
            seq,
            result: Ok(vec![]),
        });

        assert!(matches!(store.courses(), CoursesState::Loaded(c) if c.is_empty()));
    }

    #[test]
    fn failed_result_is_marked_failed() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let seq = outstanding_seq(&recv);

        store.event(Event::Courses {
            seq,
            result: Err(coursebook_client::Error::BadStatus(500)),
        });

        assert!(matches!(store.courses(), CoursesState::Failed));
    }

    #[test]
    fn result_after_discard_is_a_noop() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let seq = outstanding_seq(&recv);

        store.discard_courses();
        store.event(Event::Courses {
            seq,
            result: Ok(sample_courses()),
        });

        assert!(matches!(store.courses(), CoursesState::NotRequested));
    }

    #[test]
    fn second_result_for_the_same_fetch_is_a_noop() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let seq = outstanding_seq(&recv);

        store.event(Event::Courses {
            seq,
            result: Ok(sample_courses()),
        });
        store.event(Event::Courses {
            seq,
            result: Ok(vec![]),
        });

        assert!(matches!(store.courses(), CoursesState::Loaded(c) if c.len() == 2));
    }

    #[test]
    fn refetch_after_discard_uses_a_fresh_seq() {
        let (mut store, recv) = test_store();

        store.request_courses();
        let first = outstanding_seq(&recv);
        store.discard_courses();
        store.request_courses();
        let second = outstanding_seq(&recv);

        assert_ne!(first, second);

        // only the fresh fetch may land
        store.event(Event::Courses {
            seq: first,
            result: Ok(vec![]),
        });
        assert!(matches!(store.courses(), CoursesState::Loading));

        store.event(Event::Courses {
            seq: second,
            result: Ok(sample_courses()),
        });
        assert!(matches!(store.courses(), CoursesState::Loaded(_)));
    }
}
