//! Snapshot of the task page and the
//! controller operations over it.
//!
//! The set of cards is fixed when the
//! board is built; controllers only
//! flip visibility, the accepted marker
//! and (once per card) the status.

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

use crate::badge::{
  Badge,
  StatusCounts
};
use crate::error::{
  BoardError,
  Result
};
use crate::filter::{
  Filter,
  FilterBar
};
use crate::nav::{
  NavBar,
  NavOutcome
};
use crate::search::{
  CardText,
  SearchQuery
};
use crate::sos::SosControl;
use crate::status::TaskStatus;
use crate::sync::{
  CardTimings,
  RawPair
};
use crate::toast::Toast;

pub const ACCEPTED_MESSAGE: &str =
  "Task accepted successfully!";

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCard {
  pub status:         TaskStatus,
  #[serde(default)]
  pub hidden:         bool,
  #[serde(default)]
  pub accepted:       bool,
  #[serde(default)]
  pub accept_trigger: bool,
  #[serde(flatten)]
  pub text:           CardText,
  #[serde(default)]
  pub etd:            Option<RawPair>,
  #[serde(default)]
  pub rt_row:         bool,
  #[serde(default)]
  pub rt_side:        bool
}

impl TaskCard {
  pub fn new(status: TaskStatus) -> Self {
    Self {
      status,
      hidden: false,
      accepted: false,
      accept_trigger: false,
      text: CardText::default(),
      etd: None,
      rt_row: false,
      rt_side: false
    }
  }

  /// Synchronizer output, `None` for
  /// cards without an ETD row.
  pub fn timings(
    &self
  ) -> Option<CardTimings> {
    self
      .etd
      .as_ref()
      .map(CardTimings::compute)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptOutcome {
  Accepted {
    previous: TaskStatus,
    badge:    Badge,
    toast:    Toast
  },
  /// Card already carries the accepted
  /// marker.
  AlreadyAccepted,
  /// Card has no accept trigger left.
  NoTrigger
}

#[derive(Debug, Clone)]
pub struct Board {
  cards:   Vec<TaskCard>,
  filters: FilterBar,
  nav:     NavBar,
  sos:     SosControl,
  query:   SearchQuery
}

impl Board {
  pub fn new(
    cards: Vec<TaskCard>,
    filters: FilterBar,
    nav: NavBar
  ) -> Self {
    info!(
      cards = cards.len(),
      filters = filters.selectors().len(),
      nav_items = nav.items().len(),
      "board snapshot"
    );
    Self {
      cards,
      filters,
      nav,
      sos: SosControl::default(),
      query: SearchQuery::default()
    }
  }

  pub fn cards(&self) -> &[TaskCard] {
    &self.cards
  }

  pub fn card(
    &self,
    idx: usize
  ) -> Result<&TaskCard> {
    self
      .cards
      .get(idx)
      .ok_or(BoardError::UnknownCard(idx))
  }

  pub fn filters(&self) -> &FilterBar {
    &self.filters
  }

  pub fn nav(&self) -> &NavBar {
    &self.nav
  }

  pub fn sos(&self) -> &SosControl {
    &self.sos
  }

  pub fn visible(
    &self
  ) -> impl Iterator<Item = usize> + '_ {
    self
      .cards
      .iter()
      .enumerate()
      .filter(|(_, card)| !card.hidden)
      .map(|(idx, _)| idx)
  }

  /// Filter tab click. Returns false
  /// when no tab carries `filter`.
  #[tracing::instrument(skip(self))]
  pub fn select_filter(
    &mut self,
    filter: Filter
  ) -> bool {
    if !self.filters.select(filter) {
      return false;
    }
    for card in &mut self.cards {
      card.hidden = !filter.admits(card.status);
    }
    debug!(
      visible = self.visible().count(),
      "filter applied"
    );
    true
  }

  /// Search box input. A non-empty query
  /// resets the tabs to `all` but the
  /// filter predicate stays suspended
  /// until another tab is clicked.
  ///
  /// Returns true when the tabs were
  /// reset.
  #[tracing::instrument(skip(self))]
  pub fn search(
    &mut self,
    raw: &str
  ) -> bool {
    self.query = SearchQuery::parse(raw);
    for card in &mut self.cards {
      card.hidden =
        !self.query.matches(&card.text);
    }
    let reset = !self.query.is_empty();
    if reset {
      self.filters.reset_to_all();
    }
    debug!(
      query = self.query.as_str(),
      visible = self.visible().count(),
      "search applied"
    );
    reset
  }

  pub fn counts(&self) -> StatusCounts {
    StatusCounts::tally(
      self.cards.iter().map(|c| c.status)
    )
  }

  /// Current `new` badge. Fails when the
  /// page has no `new` tab with a badge.
  pub fn badge(&self) -> Result<Badge> {
    self.filters.badge_owner()?;
    Ok(self.counts().badge())
  }

  #[tracing::instrument(skip(self))]
  pub fn accept(
    &mut self,
    idx: usize
  ) -> Result<AcceptOutcome> {
    let card = self
      .cards
      .get_mut(idx)
      .ok_or(BoardError::UnknownCard(idx))?;

    if card.accepted {
      debug!("card already accepted");
      return Ok(
        AcceptOutcome::AlreadyAccepted
      );
    }
    if !card.accept_trigger {
      return Ok(AcceptOutcome::NoTrigger);
    }

    let previous = card.status;
    card.accepted = true;
    card.status = TaskStatus::Complete;
    card.accept_trigger = false;
    info!(%previous, "task accepted");

    Ok(AcceptOutcome::Accepted {
      previous,
      badge: self.badge()?,
      toast: Toast::success(
        ACCEPTED_MESSAGE
      )
    })
  }

  pub fn navigate(
    &mut self,
    idx: usize
  ) -> Result<NavOutcome> {
    self.nav.select(idx)
  }

  pub fn press_sos(&mut self) -> Toast {
    self.sos.press()
  }

  pub fn release_sos(&mut self) {
    self.sos.release();
  }

  pub fn view(&self) -> Result<BoardView> {
    Ok(BoardView {
      active_filter: self.filters.active(),
      query:         self
        .query
        .as_str()
        .to_string(),
      badge:         self.badge()?,
      counts:        self.counts(),
      nav:           self
        .nav
        .active_target()
        .map(str::to_string),
      sos_pressed:   self.sos.is_pressed(),
      cards:         self
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardView {
          index,
          status: card.status,
          hidden: card.hidden,
          accepted: card.accepted,
          title: card.text.title.clone()
        })
        .collect()
    })
  }
}

/// Serializable summary of the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
  pub active_filter: Filter,
  pub query:         String,
  pub badge:         Badge,
  pub counts:        StatusCounts,
  pub nav:           Option<String>,
  pub sos_pressed:   bool,
  pub cards:         Vec<CardView>
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
  pub index:    usize,
  pub status:   TaskStatus,
  pub hidden:   bool,
  pub accepted: bool,
  pub title:    Option<String>
}
