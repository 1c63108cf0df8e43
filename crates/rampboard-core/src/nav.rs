use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::error::BoardError;
use crate::toast::Toast;

pub const DEFAULT_NAV_TARGET: &str =
  "tasks";

pub const ADD_TASK_MESSAGE: &str =
  "Add new task...";

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct NavItem {
  pub target: String,
  #[serde(default)]
  pub add:    bool
}

impl NavItem {
  pub fn target(
    target: impl Into<String>
  ) -> Self {
    Self {
      target: target.into(),
      add:    false
    }
  }

  pub fn add_action() -> Self {
    Self {
      target: "add".to_string(),
      add:    true
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
  /// The add selector was pressed;
  /// active state is untouched.
  AddTask(Toast),
  Navigated {
    target: String,
    toast:  Option<Toast>
  }
}

impl NavOutcome {
  pub fn toast(&self) -> Option<&Toast> {
    match self {
      | NavOutcome::AddTask(toast) => {
        Some(toast)
      }
      | NavOutcome::Navigated {
        toast,
        ..
      } => toast.as_ref()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
  items:          Vec<NavItem>,
  active:         Option<usize>,
  default_target: String
}

impl NavBar {
  pub fn new(
    items: Vec<NavItem>,
    active: Option<usize>,
    default_target: impl Into<String>
  ) -> Self {
    let default_target =
      default_target.into();
    let active = active
      .filter(|&idx| {
        items
          .get(idx)
          .is_some_and(|item| !item.add)
      })
      .or_else(|| {
        items.iter().position(|item| {
          !item.add
            && item.target == default_target
        })
      });
    Self {
      items,
      active,
      default_target
    }
  }

  pub fn items(&self) -> &[NavItem] {
    &self.items
  }

  pub fn active(&self) -> Option<usize> {
    self.active
  }

  pub fn active_target(
    &self
  ) -> Option<&str> {
    self
      .active
      .and_then(|idx| self.items.get(idx))
      .map(|item| item.target.as_str())
  }

  pub fn position(
    &self,
    target: &str
  ) -> crate::error::Result<usize> {
    self
      .items
      .iter()
      .position(|item| item.target == target)
      .ok_or_else(|| {
        BoardError::UnknownNavTarget(
          target.to_string()
        )
      })
  }

  pub fn select(
    &mut self,
    idx: usize
  ) -> crate::error::Result<NavOutcome> {
    let item =
      self.items.get(idx).ok_or_else(|| {
        BoardError::UnknownNavTarget(
          format!("#{idx}")
        )
      })?;

    if item.add {
      debug!("add task requested");
      return Ok(NavOutcome::AddTask(
        Toast::success(ADD_TASK_MESSAGE)
      ));
    }

    let target = item.target.clone();
    self.active = Some(idx);
    debug!(%target, "navigated");

    let toast = (target
      != self.default_target)
      .then(|| {
        Toast::success(format!(
          "Navigating to {}...",
          capitalize_first(&target)
        ))
      });
    Ok(NavOutcome::Navigated {
      target,
      toast
    })
  }
}

pub fn capitalize_first(
  value: &str
) -> String {
  let mut chars = value.chars();
  match chars.next() {
    | Some(first) => first
      .to_uppercase()
      .chain(chars)
      .collect(),
    | None => String::new()
  }
}
