//! Writes board state back onto the
//! snapshotted elements.

use rampboard_core::badge::Badge;
use tracing::warn;

use super::App;
use crate::dom::{
  STATUS_ATTR,
  set_class
};

impl App {
  pub(super) fn render_cards(&self) {
    let board = self.board.borrow();
    let sel = &self.cfg.dom;
    for (card, nodes) in board
      .cards()
      .iter()
      .zip(&self.nodes.cards)
    {
      set_class(
        &nodes.root,
        &sel.hidden_class,
        card.hidden
      );
    }
  }

  /// Status and accepted marker of one
  /// card.
  pub(super) fn render_card_state(
    &self,
    idx: usize
  ) {
    let board = self.board.borrow();
    let (Ok(card), Some(nodes)) = (
      board.card(idx),
      self.nodes.cards.get(idx)
    ) else {
      return;
    };
    if let Err(err) = nodes
      .root
      .set_attribute(
        STATUS_ATTR,
        card.status.as_attr()
      )
    {
      warn!(?err, "status attribute update failed");
    }
    set_class(
      &nodes.root,
      &self.cfg.dom.accepted_class,
      card.accepted
    );
  }

  pub(super) fn render_filter_tabs(&self) {
    let board = self.board.borrow();
    for (filter, tab) in
      &self.nodes.filter_tabs
    {
      set_class(
        tab,
        &self.cfg.dom.active_class,
        board.filters().is_active(*filter)
      );
    }
  }

  pub(super) fn render_badge(&self) {
    match self.board.borrow().badge() {
      | Ok(badge) => {
        self.paint_badge(badge)
      }
      | Err(err) => {
        warn!(%err, "badge unavailable")
      }
    }
  }

  pub(super) fn paint_badge(
    &self,
    badge: Badge
  ) {
    let el = &self.nodes.badge;
    el.set_text_content(Some(
      badge.count.to_string().as_str()
    ));
    if let Err(err) = el
      .style()
      .set_property("display", badge.display())
    {
      warn!(?err, "badge display update failed");
    }
  }

  /// Add selectors never carry the active
  /// class.
  pub(super) fn render_nav(&self) {
    let board = self.board.borrow();
    let nav = board.nav();
    for (idx, (item, el)) in nav
      .items()
      .iter()
      .zip(&self.nodes.nav_items)
      .enumerate()
    {
      if item.add {
        continue;
      }
      set_class(
        el,
        &self.cfg.dom.active_class,
        nav.active() == Some(idx)
      );
    }
  }

  pub(super) fn render_sos(&self) {
    let transform =
      self.board.borrow().sos().transform();
    let style = self.nodes.sos.style();
    let res = if transform.is_empty() {
      style
        .remove_property("transform")
        .map(drop)
    } else {
      style.set_property(
        "transform",
        transform
      )
    };
    if let Err(err) = res {
      warn!(?err, "sos transform update failed");
    }
  }
}
