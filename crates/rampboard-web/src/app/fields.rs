//! One-shot ETD/RT and side-group sync,
//! run at startup.

use rampboard_core::sync::{
  SyncedPair,
  sync_verbatim
};
use tracing::debug;
use web_sys::Element;

use super::App;
use crate::dom::{
  SIDE_NEW_ATTR,
  SIDE_OLD_ATTR,
  set_class,
  set_text
};

fn write_pair(
  row: &Element,
  pair: &SyncedPair,
  old_sel: &str,
  new_sel: &str,
  updated_class: &str
) {
  set_text(row, old_sel, pair.old.as_deref());
  set_text(row, new_sel, pair.new.as_deref());
  if pair.updated {
    set_class(row, updated_class, true);
  }
}

pub(super) fn sync(app: &App) {
  let sel = &app.cfg.dom;
  let board = app.board.borrow();
  let mut touched = 0_usize;

  for (card, nodes) in board
    .cards()
    .iter()
    .zip(&app.nodes.cards)
  {
    let (Some(etd_row), Some(timings)) =
      (&nodes.etd_row, card.timings())
    else {
      continue;
    };
    touched += 1;

    write_pair(
      etd_row,
      &timings.etd,
      &sel.etd_old,
      &sel.etd_new,
      &sel.updated_class
    );

    let Some(rt) = timings.rt else {
      continue;
    };
    if let Some(row) = &nodes.rt_row {
      write_pair(
        row,
        &rt,
        &sel.rt_old,
        &sel.rt_new,
        &sel.updated_class
      );
    }
    if let Some(side) = &nodes.rt_side {
      write_pair(
        side,
        &rt,
        &sel.side_old,
        &sel.side_new,
        &sel.updated_class
      );
    }
  }

  let groups = &app.nodes.side_groups;
  for group in groups {
    let pair = sync_verbatim(
      &group
        .get_attribute(SIDE_OLD_ATTR)
        .unwrap_or_default(),
      &group
        .get_attribute(SIDE_NEW_ATTR)
        .unwrap_or_default()
    );
    write_pair(
      group,
      &pair,
      &sel.side_old,
      &sel.side_new,
      &sel.updated_class
    );
  }

  debug!(
    cards = touched,
    side_groups = groups.len(),
    "fields synced"
  );
}
