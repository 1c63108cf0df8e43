//! Derived display values for the
//! old/new field pairs on a task card.

use serde::{
  Deserialize,
  Serialize
};

use crate::clock::{
  derive_rt,
  normalize
};

/// Raw old/new values as read from the
/// markup. Empty strings count as
/// absent.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct RawPair {
  #[serde(default)]
  pub old: Option<String>,
  #[serde(default)]
  pub new: Option<String>
}

impl RawPair {
  pub fn new(
    old: Option<&str>,
    new: Option<&str>
  ) -> Self {
    Self {
      old: non_empty(old),
      new: non_empty(new)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.old.is_none()
      && self.new.is_none()
  }
}

fn non_empty(
  value: Option<&str>
) -> Option<String> {
  value
    .filter(|v| !v.is_empty())
    .map(str::to_string)
}

/// Values to write into the old/new
/// spans. `None` leaves a span as it
/// is.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct SyncedPair {
  pub old:     Option<String>,
  pub new:     Option<String>,
  pub updated: bool
}

impl SyncedPair {
  fn from_sides(
    old: Option<String>,
    new: Option<String>
  ) -> Self {
    let updated = matches!(
      (&old, &new),
      (Some(o), Some(n)) if o != n
    );
    Self {
      old,
      new,
      updated
    }
  }
}

/// ETD row: both sides normalized for
/// display, updated when the normalized
/// forms differ.
pub fn sync_etd(
  raw: &RawPair
) -> SyncedPair {
  SyncedPair::from_sides(
    raw.old.as_deref().map(normalize),
    raw.new.as_deref().map(normalize)
  )
}

/// RT row or side panel derived from
/// the raw ETD pair. `None` when the
/// card has no ETD value at all.
pub fn sync_rt(
  raw: &RawPair
) -> Option<SyncedPair> {
  if raw.is_empty() {
    return None;
  }
  Some(SyncedPair::from_sides(
    raw.old.as_deref().and_then(derive_rt),
    raw.new.as_deref().and_then(derive_rt)
  ))
}

/// Plain side group: values copied as
/// they are.
pub fn sync_verbatim(
  old: &str,
  new: &str
) -> SyncedPair {
  let updated = !old.is_empty()
    && !new.is_empty()
    && old != new;
  SyncedPair {
    old: Some(old.to_string()),
    new: Some(new.to_string()),
    updated
  }
}

/// Everything the synchronizer writes
/// for one card.
#[derive(
  Debug, Clone, Serialize, PartialEq, Eq,
)]
pub struct CardTimings {
  pub etd: SyncedPair,
  pub rt:  Option<SyncedPair>
}

impl CardTimings {
  pub fn compute(raw: &RawPair) -> Self {
    Self {
      etd: sync_etd(raw),
      rt:  sync_rt(raw)
    }
  }
}
