use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::error::BoardError;
use crate::status::TaskStatus;

/// Predicate behind one filter tab.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  try_from = "String",
  into = "String"
)]
pub enum Filter {
  All,
  Status(TaskStatus)
}

impl Filter {
  pub fn admits(
    self,
    status: TaskStatus
  ) -> bool {
    match self {
      | Filter::All => true,
      | Filter::Status(wanted) => {
        wanted == status
      }
    }
  }

  pub const fn as_attr(
    self
  ) -> &'static str {
    match self {
      | Filter::All => "all",
      | Filter::Status(status) => {
        status.as_attr()
      }
    }
  }
}

impl FromStr for Filter {
  type Err = BoardError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    let raw = raw.trim();
    if raw == "all" {
      return Ok(Filter::All);
    }
    raw
      .parse::<TaskStatus>()
      .map(Filter::Status)
      .map_err(|_| {
        BoardError::UnknownFilter(
          raw.to_string()
        )
      })
  }
}

impl TryFrom<String> for Filter {
  type Error = BoardError;

  fn try_from(
    raw: String
  ) -> Result<Self, Self::Error> {
    raw.parse()
  }
}

impl From<Filter> for String {
  fn from(filter: Filter) -> Self {
    filter.as_attr().to_string()
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.pad(self.as_attr())
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct FilterSelector {
  pub filter: Filter,
  #[serde(default)]
  pub badge:  bool
}

impl FilterSelector {
  pub fn new(filter: Filter) -> Self {
    Self {
      filter,
      badge: false
    }
  }

  pub fn with_badge(
    filter: Filter
  ) -> Self {
    Self {
      filter,
      badge: true
    }
  }
}

/// The row of mutually exclusive
/// filter tabs. Exactly one filter is
/// active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
  selectors: Vec<FilterSelector>,
  active:    Filter
}

impl FilterBar {
  pub fn new(
    selectors: Vec<FilterSelector>,
    active: Option<Filter>
  ) -> Self {
    let active = active
      .or_else(|| {
        selectors
          .first()
          .map(|sel| sel.filter)
      })
      .unwrap_or(Filter::All);
    Self {
      selectors,
      active
    }
  }

  pub fn selectors(
    &self
  ) -> &[FilterSelector] {
    &self.selectors
  }

  pub fn active(&self) -> Filter {
    self.active
  }

  pub fn is_active(
    &self,
    filter: Filter
  ) -> bool {
    self.active == filter
  }

  /// Activates `filter`. Returns false
  /// (and changes nothing) when no tab
  /// carries that filter.
  pub fn select(
    &mut self,
    filter: Filter
  ) -> bool {
    if !self
      .selectors
      .iter()
      .any(|sel| sel.filter == filter)
    {
      debug!(%filter, "no tab for filter");
      return false;
    }
    self.active = filter;
    true
  }

  pub fn reset_to_all(&mut self) {
    self.active = Filter::All;
  }

  /// The `new` tab carrying the badge.
  pub fn badge_owner(
    &self
  ) -> crate::error::Result<&FilterSelector>
  {
    let owner = self
      .selectors
      .iter()
      .find(|sel| {
        sel.filter
          == Filter::Status(
            TaskStatus::New
          )
      })
      .ok_or_else(|| {
        BoardError::MissingElement(
          "filter tab \"new\""
            .to_string()
        )
      })?;
    if !owner.badge {
      return Err(
        BoardError::MissingElement(
          "badge on filter tab \"new\""
            .to_string()
        )
      );
    }
    Ok(owner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn standard_bar() -> FilterBar {
    FilterBar::new(
      vec![
        FilterSelector::new(Filter::All),
        FilterSelector::with_badge(
          Filter::Status(TaskStatus::New)
        ),
        FilterSelector::new(
          Filter::Status(
            TaskStatus::InProgress
          )
        ),
        FilterSelector::new(
          Filter::Status(
            TaskStatus::Complete
          )
        ),
      ],
      None
    )
  }

  #[test]
  fn parses_tab_values() {
    assert_eq!(
      "all".parse::<Filter>().ok(),
      Some(Filter::All)
    );
    assert_eq!(
      "in-progress"
        .parse::<Filter>()
        .ok(),
      Some(Filter::Status(
        TaskStatus::InProgress
      ))
    );
    assert!(
      "archived"
        .parse::<Filter>()
        .is_err()
    );
  }

  #[test]
  fn status_filter_admits_only_its_status()
  {
    let filter =
      Filter::Status(TaskStatus::New);
    assert!(
      filter.admits(TaskStatus::New)
    );
    assert!(
      !filter
        .admits(TaskStatus::Complete)
    );
    assert!(
      Filter::All
        .admits(TaskStatus::Complete)
    );
  }

  #[test]
  fn select_switches_single_active_tab() {
    let mut bar = standard_bar();
    assert!(bar.is_active(Filter::All));

    let complete =
      Filter::Status(TaskStatus::Complete);
    assert!(bar.select(complete));
    assert!(bar.is_active(complete));
    assert!(!bar.is_active(Filter::All));

    bar.reset_to_all();
    assert!(bar.is_active(Filter::All));
  }

  #[test]
  fn badge_owner_requires_new_tab_with_badge()
  {
    assert!(
      standard_bar()
        .badge_owner()
        .is_ok()
    );

    let bare = FilterBar::new(
      vec![
        FilterSelector::new(Filter::All),
        FilterSelector::new(
          Filter::Status(TaskStatus::New)
        ),
      ],
      None
    );
    assert!(
      bare.badge_owner().is_err()
    );
  }
}
