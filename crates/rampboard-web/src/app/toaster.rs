//! DOM side of the toast slot.
//!
//! Each toast owns its animation frame
//! and timers; replacing the toast drops
//! them, which cancels whatever has not
//! fired yet.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use gloo::render::{
  AnimationFrame,
  request_animation_frame
};
use gloo::timers::callback::Timeout;
use rampboard_core::toast::{
  TOAST_FADE_MS,
  TOAST_VISIBLE_MS,
  Toast,
  ToastSlot,
  ToastTicket
};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlElement
};

struct LiveToast {
  ticket:   ToastTicket,
  element:  HtmlElement,
  _reveal:  AnimationFrame,
  _fade:    Timeout,
  _removal: Option<Timeout>
}

pub struct Toaster {
  document: Document,
  slot:     Rc<RefCell<ToastSlot>>,
  live:     Rc<RefCell<Option<LiveToast>>>
}

fn set_opacity(
  element: &HtmlElement,
  value: &str
) {
  if let Err(err) = element
    .style()
    .set_property("opacity", value)
  {
    warn!(?err, "toast opacity update failed");
  }
}

impl Toaster {
  pub fn new(document: Document) -> Self {
    Self {
      document,
      slot: Rc::new(RefCell::new(
        ToastSlot::new()
      )),
      live: Rc::new(RefCell::new(None))
    }
  }

  pub fn show(&self, toast: Toast) {
    if let Err(err) = self.try_show(toast) {
      warn!(%err, "toast not shown");
    }
  }

  fn try_show(
    &self,
    toast: Toast
  ) -> anyhow::Result<()> {
    let previous = self.live.borrow_mut().take();
    if let Some(previous) = previous {
      previous.element.remove();
    }

    let element = self
      .document
      .create_element("div")
      .map_err(|err| {
        anyhow!("create toast: {err:?}")
      })?
      .dyn_into::<HtmlElement>()
      .map_err(|_| {
        anyhow!("toast is not an HtmlElement")
      })?;
    element.set_class_name(&toast.class_name());
    element.set_text_content(Some(
      toast.message.as_str()
    ));
    let style = element.style();
    for (name, value) in toast.initial_style()
    {
      style
        .set_property(name, value)
        .map_err(|err| {
          anyhow!("toast style {name}: {err:?}")
        })?;
    }

    let body = self
      .document
      .body()
      .ok_or_else(|| anyhow!("document has no body"))?;
    body
      .append_child(&element)
      .map_err(|err| {
        anyhow!("insert toast: {err:?}")
      })?;

    let (ticket, _) =
      self.slot.borrow_mut().show(toast);

    let reveal = {
      let slot = Rc::clone(&self.slot);
      let element = element.clone();
      request_animation_frame(move |_| {
        if slot.borrow_mut().reveal(ticket) {
          set_opacity(&element, "1");
        }
      })
    };

    let fade = {
      let slot = Rc::clone(&self.slot);
      let live = Rc::clone(&self.live);
      let element = element.clone();
      Timeout::new(TOAST_VISIBLE_MS, move || {
        if !slot.borrow_mut().fade(ticket) {
          return;
        }
        set_opacity(&element, "0");
        let removal = {
          let slot = Rc::clone(&slot);
          let element = element.clone();
          Timeout::new(TOAST_FADE_MS, move || {
            if slot.borrow_mut().dismiss(ticket) {
              element.remove();
            }
          })
        };
        if let Some(current) = live
          .borrow_mut()
          .as_mut()
          .filter(|c| c.ticket == ticket)
        {
          current._removal = Some(removal);
        }
      })
    };

    *self.live.borrow_mut() = Some(LiveToast {
      ticket,
      element,
      _reveal: reveal,
      _fade: fade,
      _removal: None
    });
    Ok(())
  }
}
