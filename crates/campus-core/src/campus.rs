//! [`Campus`] — the six repositories, wired to one backend.

use std::sync::Arc;

use crate::{
  repository::Repository,
  schema::{Assignment, Class, Student, Subject, Submission, Teacher},
  store::{Backend, Clock, IdGenerator, SystemClock, UuidGenerator},
};

/// One repository per entity type, all sharing a clock and an id generator.
///
/// Built once at startup and passed to whatever serves requests.
pub struct Campus<B: Backend> {
  pub students:    Repository<Student, B::Map<Student>>,
  pub subjects:    Repository<Subject, B::Map<Subject>>,
  pub teachers:    Repository<Teacher, B::Map<Teacher>>,
  pub classes:     Repository<Class, B::Map<Class>>,
  pub assignments: Repository<Assignment, B::Map<Assignment>>,
  pub submissions: Repository<Submission, B::Map<Submission>>,
}

impl<B: Backend> Campus<B> {
  /// Wire `backend` with the system clock and random UUIDs.
  pub fn new(backend: &B) -> Self {
    Self::with_parts(
      backend,
      Arc::new(SystemClock::default()),
      Arc::new(UuidGenerator),
    )
  }

  pub fn with_parts(
    backend: &B,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
  ) -> Self {
    Self {
      students:    Repository::new(backend.collection::<Student>(), clock.clone(), ids.clone()),
      subjects:    Repository::new(backend.collection::<Subject>(), clock.clone(), ids.clone()),
      teachers:    Repository::new(backend.collection::<Teacher>(), clock.clone(), ids.clone()),
      classes:     Repository::new(backend.collection::<Class>(), clock.clone(), ids.clone()),
      assignments: Repository::new(backend.collection::<Assignment>(), clock.clone(), ids.clone()),
      submissions: Repository::new(backend.collection::<Submission>(), clock, ids),
    }
  }
}
