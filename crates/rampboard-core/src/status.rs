use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

use crate::error::BoardError;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
  New,
  InProgress,
  Complete
}

impl TaskStatus {
  pub const ALL: [TaskStatus; 3] = [
    TaskStatus::New,
    TaskStatus::InProgress,
    TaskStatus::Complete
  ];

  /// Value used in `data-status` and
  /// `data-filter` attributes.
  pub const fn as_attr(
    self
  ) -> &'static str {
    match self {
      | TaskStatus::New => "new",
      | TaskStatus::InProgress => {
        "in-progress"
      }
      | TaskStatus::Complete => {
        "complete"
      }
    }
  }
}

impl FromStr for TaskStatus {
  type Err = BoardError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "new" => Ok(TaskStatus::New),
      | "in-progress" => {
        Ok(TaskStatus::InProgress)
      }
      | "complete" => {
        Ok(TaskStatus::Complete)
      }
      | other => Err(
        BoardError::UnknownStatus(
          other.to_string()
        )
      )
    }
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.pad(self.as_attr())
  }
}

#[cfg(test)]
mod tests {
  use super::TaskStatus;

  #[test]
  fn parses_attribute_values() {
    for status in TaskStatus::ALL {
      let parsed: TaskStatus = status
        .as_attr()
        .parse()
        .expect("known status");
      assert_eq!(parsed, status);
    }
  }

  #[test]
  fn rejects_unknown_status() {
    assert!(
      "done"
        .parse::<TaskStatus>()
        .is_err()
    );
    assert!(
      "".parse::<TaskStatus>().is_err()
    );
  }
}
