//! Markup lookups and the one-time
//! snapshot of the page into a
//! [`Board`].

use anyhow::{
  Context,
  anyhow
};
use rampboard_core::config::{
  Config,
  DomSelectors
};
use rampboard_core::filter::{
  Filter,
  FilterBar,
  FilterSelector
};
use rampboard_core::nav::{
  NavBar,
  NavItem
};
use rampboard_core::search::CardText;
use rampboard_core::status::TaskStatus;
use rampboard_core::sync::RawPair;
use rampboard_core::{
  Board,
  BoardError,
  TaskCard
};
use tracing::{
  debug,
  warn
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  HtmlInputElement
};

pub const STATUS_ATTR: &str =
  "data-status";
pub const FILTER_ATTR: &str =
  "data-filter";
pub const NAV_ATTR: &str = "data-nav";
pub const ETD_OLD_ATTR: &str =
  "data-etd-old";
pub const ETD_NEW_ATTR: &str =
  "data-etd-new";
pub const SIDE_OLD_ATTR: &str =
  "data-old";
pub const SIDE_NEW_ATTR: &str =
  "data-new";

pub const CONFIG_SCRIPT_ID: &str =
  "rampboard-config";

/// Anything that answers
/// `querySelector(All)`.
pub trait Scope {
  fn select(
    &self,
    selector: &str
  ) -> Option<Element>;

  fn select_all(
    &self,
    selector: &str
  ) -> Vec<Element>;
}

macro_rules! impl_scope {
  ($ty:ty) => {
    impl Scope for $ty {
      fn select(
        &self,
        selector: &str
      ) -> Option<Element> {
        self
          .query_selector(selector)
          .ok()
          .flatten()
      }

      fn select_all(
        &self,
        selector: &str
      ) -> Vec<Element> {
        let Ok(list) =
          self.query_selector_all(selector)
        else {
          warn!(selector, "invalid selector");
          return vec![];
        };
        (0..list.length())
          .filter_map(|idx| list.item(idx))
          .filter_map(|node| {
            node.dyn_into::<Element>().ok()
          })
          .collect()
      }
    }
  };
}

impl_scope!(Document);
impl_scope!(Element);

pub fn text_of(
  scope: &impl Scope,
  selector: &str
) -> Option<String> {
  scope
    .select(selector)
    .and_then(|el| el.text_content())
}

pub fn set_text(
  scope: &impl Scope,
  selector: &str,
  value: Option<&str>
) {
  if let Some(value) = value
    && let Some(el) = scope.select(selector)
  {
    el.set_text_content(Some(value));
  }
}

pub fn has_class(
  el: &Element,
  class: &str
) -> bool {
  el.class_list().contains(class)
}

pub fn set_class(
  el: &Element,
  class: &str,
  on: bool
) {
  let list = el.class_list();
  let res = if on {
    list.add_1(class)
  } else {
    list.remove_1(class)
  };
  if let Err(err) = res {
    warn!(class, ?err, "class update failed");
  }
}

fn required<T: JsCast>(
  doc: &Document,
  selector: &str
) -> anyhow::Result<T> {
  doc
    .select(selector)
    .ok_or_else(|| {
      BoardError::MissingElement(
        selector.to_string()
      )
    })?
    .dyn_into::<T>()
    .map_err(|_| {
      anyhow!(
        "{selector} has an unexpected \
         element type"
      )
    })
}

/// Reads the inline TOML config block,
/// falling back to defaults.
pub fn load_config(
  doc: &Document
) -> anyhow::Result<Config> {
  let Some(script) =
    doc.get_element_by_id(CONFIG_SCRIPT_ID)
  else {
    debug!("no inline config; using defaults");
    return Ok(Config::default());
  };
  let text =
    script.text_content().unwrap_or_default();
  Config::parse(&text).context(
    "failed to parse inline rampboard \
     config"
  )
}

/// Elements owned by one task card.
pub struct CardNodes {
  pub root:    Element,
  pub accept:  Option<Element>,
  pub etd_row: Option<Element>,
  pub rt_row:  Option<Element>,
  pub rt_side: Option<Element>
}

/// Element handles kept for the life of
/// the page, index-aligned with the
/// board they were read into.
pub struct PageNodes {
  pub cards:       Vec<CardNodes>,
  pub filter_tabs: Vec<(Filter, Element)>,
  pub badge:       HtmlElement,
  pub nav_items:   Vec<Element>,
  pub sos:         HtmlElement,
  pub search:      HtmlInputElement,
  pub side_groups: Vec<Element>
}

#[tracing::instrument(skip_all)]
pub fn snapshot(
  doc: &Document,
  cfg: &Config
) -> anyhow::Result<(Board, PageNodes)> {
  let sel = &cfg.dom;

  let (cards, card_nodes) =
    read_cards(doc, sel)?;
  let (filters, filter_tabs, badge) =
    read_filters(doc, sel)?;
  let (nav, nav_items) =
    read_nav(doc, sel, cfg);

  let sos = required::<HtmlElement>(
    doc,
    &sel.sos_button
  )?;
  let search = required::<HtmlInputElement>(
    doc,
    &sel.search_input
  )?;
  let side_groups =
    doc.select_all(&sel.side_group);

  let board =
    Board::new(cards, filters, nav);
  board
    .badge()
    .context("badge precondition")?;

  Ok((board, PageNodes {
    cards: card_nodes,
    filter_tabs,
    badge,
    nav_items,
    sos,
    search,
    side_groups
  }))
}

fn read_cards(
  doc: &Document,
  sel: &DomSelectors
) -> anyhow::Result<(
  Vec<TaskCard>,
  Vec<CardNodes>
)> {
  let mut cards = vec![];
  let mut nodes = vec![];

  for (idx, root) in doc
    .select_all(&sel.task_card)
    .into_iter()
    .enumerate()
  {
    let status: TaskStatus = root
      .get_attribute(STATUS_ATTR)
      .unwrap_or_default()
      .parse()
      .with_context(|| {
        format!("task card #{idx}")
      })?;

    let etd_row = root.select(&sel.etd_row);
    let rt_row = root.select(&sel.rt_row);
    let rt_side = root.select(&sel.rt_side);
    let accept =
      root.select(&sel.accept_button);

    cards.push(TaskCard {
      status,
      hidden: has_class(
        &root,
        &sel.hidden_class
      ),
      accepted: has_class(
        &root,
        &sel.accepted_class
      ),
      accept_trigger: accept.is_some(),
      text: CardText {
        title:       text_of(&root, &sel.title),
        subtitle:    text_of(
          &root,
          &sel.subtitle
        ),
        flight_code: text_of(
          &root,
          &sel.flight_code
        ),
        flight_dest: text_of(
          &root,
          &sel.flight_dest
        )
      },
      etd: etd_row.as_ref().map(|row| {
        RawPair::new(
          row
            .get_attribute(ETD_OLD_ATTR)
            .as_deref(),
          row
            .get_attribute(ETD_NEW_ATTR)
            .as_deref()
        )
      }),
      rt_row: rt_row.is_some(),
      rt_side: rt_side.is_some()
    });
    nodes.push(CardNodes {
      root,
      accept,
      etd_row,
      rt_row,
      rt_side
    });
  }

  debug!(cards = cards.len(), "cards read");
  Ok((cards, nodes))
}

fn read_filters(
  doc: &Document,
  sel: &DomSelectors
) -> anyhow::Result<(
  FilterBar,
  Vec<(Filter, Element)>,
  HtmlElement
)> {
  let mut selectors = vec![];
  let mut tabs = vec![];
  let mut active = None;
  let mut badge = None;

  for tab in doc.select_all(&sel.filter_tab)
  {
    let raw = tab
      .get_attribute(FILTER_ATTR)
      .unwrap_or_default();
    let filter = match raw.parse::<Filter>() {
      | Ok(filter) => filter,
      | Err(err) => {
        warn!(%err, "skipping filter tab");
        continue;
      }
    };

    let tab_badge = (filter
      == Filter::Status(TaskStatus::New))
      .then(|| tab.select(&sel.badge))
      .flatten()
      .and_then(|el| {
        el.dyn_into::<HtmlElement>().ok()
      });
    let selector = if tab_badge.is_some() {
      FilterSelector::with_badge(filter)
    } else {
      FilterSelector::new(filter)
    };
    if badge.is_none() {
      badge = tab_badge;
    }

    if active.is_none()
      && has_class(&tab, &sel.active_class)
    {
      active = Some(filter);
    }
    selectors.push(selector);
    tabs.push((filter, tab));
  }

  let bar = FilterBar::new(selectors, active);
  bar.badge_owner()?;
  let badge = badge.ok_or_else(|| {
    BoardError::MissingElement(
      sel.badge.clone()
    )
  })?;

  Ok((bar, tabs, badge))
}

fn read_nav(
  doc: &Document,
  sel: &DomSelectors,
  cfg: &Config
) -> (NavBar, Vec<Element>) {
  let elements =
    doc.select_all(&sel.nav_item);
  let mut active = None;

  let items = elements
    .iter()
    .enumerate()
    .map(|(idx, el)| {
      if has_class(el, &sel.nav_add_class) {
        return NavItem::add_action();
      }
      if active.is_none()
        && has_class(el, &sel.active_class)
      {
        active = Some(idx);
      }
      NavItem::target(
        el.get_attribute(NAV_ATTR)
          .unwrap_or_default()
      )
    })
    .collect();

  (
    NavBar::new(
      items,
      active,
      cfg.nav.default_target.clone()
    ),
    elements
  )
}
