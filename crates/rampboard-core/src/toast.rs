//! Single-slot toast notifications.
//!
//! At most one toast is live. Showing a
//! new one replaces the current toast
//! immediately, and every lifecycle step
//! is addressed by a [`ToastTicket`] so
//! callbacks belonging to a replaced
//! toast become no-ops.

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  trace
};

/// Time a toast stays fully visible.
pub const TOAST_VISIBLE_MS: u32 = 2_500;

/// Fade-out duration before removal.
pub const TOAST_FADE_MS: u32 = 300;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
  #[default]
  Success,
  Warning
}

impl ToastKind {
  pub const fn as_str(
    self
  ) -> &'static str {
    match self {
      | ToastKind::Success => "success",
      | ToastKind::Warning => "warning"
    }
  }

  pub const fn background(
    self
  ) -> &'static str {
    match self {
      | ToastKind::Warning => "#E74C3C",
      | ToastKind::Success => "#27AE60"
    }
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
pub struct Toast {
  pub message: String,
  #[serde(default)]
  pub kind:    ToastKind
}

impl Toast {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      message: message.into(),
      kind:    ToastKind::Success
    }
  }

  pub fn warning(
    message: impl Into<String>
  ) -> Self {
    Self {
      message: message.into(),
      kind:    ToastKind::Warning
    }
  }

  pub fn class_name(&self) -> String {
    format!(
      "toast toast-{}",
      self.kind.as_str()
    )
  }

  /// Inline style of a freshly created
  /// toast. Opacity starts at zero so the
  /// transition animates on reveal.
  pub fn initial_style(
    &self
  ) -> [(&'static str, &'static str); 14]
  {
    [
      ("position", "fixed"),
      ("top", "20px"),
      ("left", "50%"),
      ("transform", "translateX(-50%)"),
      ("background", self.kind.background()),
      ("color", "white"),
      ("padding", "12px 24px"),
      ("border-radius", "8px"),
      ("font-size", "0.875rem"),
      ("font-weight", "500"),
      (
        "box-shadow",
        "0 4px 12px rgba(0, 0, 0, 0.15)"
      ),
      ("z-index", "1000"),
      ("opacity", "0"),
      ("transition", "opacity 0.3s ease")
    ]
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
  Entering,
  Shown,
  Fading
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone)]
struct LiveToast {
  ticket: ToastTicket,
  toast:  Toast,
  phase:  ToastPhase
}

#[derive(Debug, Default)]
pub struct ToastSlot {
  next: u64,
  live: Option<LiveToast>
}

impl ToastSlot {
  pub fn new() -> Self {
    Self::default()
  }

  /// Installs `toast` as the live one.
  /// Returns its ticket and the ticket
  /// of the toast it replaced, if any.
  pub fn show(
    &mut self,
    toast: Toast
  ) -> (ToastTicket, Option<ToastTicket>)
  {
    self.next += 1;
    let ticket = ToastTicket(self.next);
    debug!(
      message = %toast.message,
      kind = toast.kind.as_str(),
      "showing toast"
    );
    let replaced = self
      .live
      .replace(LiveToast {
        ticket,
        toast,
        phase: ToastPhase::Entering
      })
      .map(|prev| prev.ticket);
    (ticket, replaced)
  }

  pub fn is_live(
    &self,
    ticket: ToastTicket
  ) -> bool {
    self
      .live
      .as_ref()
      .is_some_and(|live| {
        live.ticket == ticket
      })
  }

  fn advance(
    &mut self,
    ticket: ToastTicket,
    phase: ToastPhase
  ) -> bool {
    match self.live.as_mut() {
      | Some(live)
        if live.ticket == ticket =>
      {
        live.phase = phase;
        true
      }
      | _ => {
        trace!(
          ?ticket,
          "stale toast step ignored"
        );
        false
      }
    }
  }

  /// Animation-frame step: fully
  /// visible.
  pub fn reveal(
    &mut self,
    ticket: ToastTicket
  ) -> bool {
    self.advance(
      ticket,
      ToastPhase::Shown
    )
  }

  /// Visible time elapsed: start the
  /// fade.
  pub fn fade(
    &mut self,
    ticket: ToastTicket
  ) -> bool {
    self.advance(
      ticket,
      ToastPhase::Fading
    )
  }

  /// Fade finished: drop the toast.
  pub fn dismiss(
    &mut self,
    ticket: ToastTicket
  ) -> bool {
    if !self.is_live(ticket) {
      return false;
    }
    self.live = None;
    true
  }

  pub fn current(
    &self
  ) -> Option<(&Toast, ToastPhase)> {
    self
      .live
      .as_ref()
      .map(|live| (&live.toast, live.phase))
  }
}
