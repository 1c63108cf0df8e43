use serde::Serialize;

use crate::status::TaskStatus;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct StatusCounts {
  pub new:         usize,
  pub in_progress: usize,
  pub complete:    usize
}

impl StatusCounts {
  pub fn tally<I>(statuses: I) -> Self
  where
    I: IntoIterator<Item = TaskStatus>
  {
    let mut counts = Self::default();
    for status in statuses {
      match status {
        | TaskStatus::New => {
          counts.new += 1
        }
        | TaskStatus::InProgress => {
          counts.in_progress += 1
        }
        | TaskStatus::Complete => {
          counts.complete += 1
        }
      }
    }
    counts
  }

  pub fn badge(&self) -> Badge {
    Badge::new(self.new)
  }
}

/// Count shown on the `new` filter
/// tab; hidden while zero.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct Badge {
  pub count:   usize,
  pub visible: bool
}

impl Badge {
  pub fn new(count: usize) -> Self {
    Self {
      count,
      visible: count > 0
    }
  }

  /// CSS `display` value for the badge
  /// element.
  pub fn display(&self) -> &'static str {
    if self.visible {
      "inline-flex"
    } else {
      "none"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tallies_each_status() {
    let counts = StatusCounts::tally([
      TaskStatus::New,
      TaskStatus::Complete,
      TaskStatus::New,
      TaskStatus::InProgress
    ]);
    assert_eq!(
      counts,
      StatusCounts {
        new:         2,
        in_progress: 1,
        complete:    1
      }
    );
  }

  #[test]
  fn badge_hidden_exactly_at_zero() {
    let empty = Badge::new(0);
    assert!(!empty.visible);
    assert_eq!(empty.display(), "none");

    let one = Badge::new(1);
    assert!(one.visible);
    assert_eq!(
      one.display(),
      "inline-flex"
    );
  }
}
