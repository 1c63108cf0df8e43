mod accept;
mod fields;
mod filters;
mod navigation;
mod render;
mod search;
mod sos;
mod toaster;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use rampboard_core::Board;
use rampboard_core::config::Config;

use crate::dom::{
  self,
  PageNodes
};
use toaster::Toaster;

/// Page-lifetime state shared by every
/// listener.
pub struct App {
  cfg:         Config,
  board:       RefCell<Board>,
  nodes:       PageNodes,
  toaster:     Toaster,
  sos_release: RefCell<Option<Timeout>>
}

/// Boots now if the document is parsed,
/// otherwise on `DOMContentLoaded`.
pub fn start_when_ready() {
  let document = gloo::utils::document();
  if document.ready_state() == "loading" {
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| boot_or_throw()
    )
    .forget();
  } else {
    boot_or_throw();
  }
}

fn boot_or_throw() {
  if let Err(err) = boot() {
    tracing::error!(
      error = %format!("{err:#}"),
      "startup failed"
    );
    wasm_bindgen::throw_str(&format!(
      "rampboard startup failed: {err:#}"
    ));
  }
}

#[tracing::instrument]
fn boot() -> anyhow::Result<()> {
  let document = gloo::utils::document();
  let cfg = dom::load_config(&document)?;
  let (board, nodes) =
    dom::snapshot(&document, &cfg)
      .context("page snapshot failed")?;

  let app = Rc::new(App {
    toaster: Toaster::new(document),
    cfg,
    board: RefCell::new(board),
    nodes,
    sos_release: RefCell::new(None)
  });

  fields::sync(&app);

  let mut listeners = vec![];
  listeners.extend(filters::wire(&app));
  listeners.extend(accept::wire(&app));
  listeners.extend(navigation::wire(&app));
  listeners.push(sos::wire(&app));
  listeners.push(search::wire(&app));

  app.render_badge();

  tracing::info!(
    listeners = listeners.len(),
    "rampboard ready"
  );
  for listener in listeners {
    listener.forget();
  }
  Ok(())
}
