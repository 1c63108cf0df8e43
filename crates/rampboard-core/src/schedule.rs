//! Virtual-clock job queue used to play
//! the UI timer choreography without a
//! browser.

use std::collections::BTreeMap;

use tracing::trace;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub struct JobHandle(u64);

#[derive(Debug)]
pub struct Scheduler<J> {
  now_ms: u64,
  next:   u64,
  queue:  BTreeMap<(u64, u64), J>
}

impl<J> Default for Scheduler<J> {
  fn default() -> Self {
    Self {
      now_ms: 0,
      next:   0,
      queue:  BTreeMap::new()
    }
  }
}

impl<J> Scheduler<J> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn now_ms(&self) -> u64 {
    self.now_ms
  }

  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  pub fn schedule(
    &mut self,
    delay_ms: u32,
    job: J
  ) -> JobHandle {
    self.next += 1;
    let due =
      self.now_ms + u64::from(delay_ms);
    trace!(
      id = self.next,
      due,
      "job scheduled"
    );
    self.queue.insert((due, self.next), job);
    JobHandle(self.next)
  }

  /// Drops a pending job. Returns false
  /// if it already ran or was cancelled.
  pub fn cancel(
    &mut self,
    handle: JobHandle
  ) -> bool {
    let key = self
      .queue
      .keys()
      .find(|(_, id)| *id == handle.0)
      .copied();
    match key {
      | Some(key) => {
        self.queue.remove(&key);
        true
      }
      | None => false
    }
  }

  /// Pops the earliest job due at or
  /// before `deadline_ms`, moving the
  /// clock to its due time. Jobs
  /// scheduled while handling the result
  /// are seen by the next call.
  pub fn pop_until(
    &mut self,
    deadline_ms: u64
  ) -> Option<J> {
    let (&(due, id), _) =
      self.queue.first_key_value()?;
    if due > deadline_ms {
      return None;
    }
    self.now_ms = due.max(self.now_ms);
    self.queue.remove(&(due, id))
  }

  /// Moves the clock forward without
  /// running anything.
  pub fn settle(&mut self, to_ms: u64) {
    self.now_ms = self.now_ms.max(to_ms);
  }
}
