use tracing::info;

use crate::toast::Toast;

/// How long the pressed transform stays
/// on the SOS button.
pub const SOS_PRESS_MS: u32 = 100;

pub const SOS_PRESS_TRANSFORM: &str =
  "scale(0.9)";

pub const SOS_MESSAGE: &str =
  "SOS Alert Triggered!";

/// Visual state of the SOS button. The
/// warning toast is raised on every
/// press, independent of the release.
#[derive(Debug, Clone, Default)]
pub struct SosControl {
  pressed: bool,
  presses: u32
}

impl SosControl {
  pub fn press(&mut self) -> Toast {
    self.pressed = true;
    self.presses += 1;
    info!(
      presses = self.presses,
      "sos triggered"
    );
    Toast::warning(SOS_MESSAGE)
  }

  pub fn release(&mut self) {
    self.pressed = false;
  }

  pub fn is_pressed(&self) -> bool {
    self.pressed
  }

  pub fn presses(&self) -> u32 {
    self.presses
  }

  /// Inline `transform` for the current
  /// state; empty clears it.
  pub fn transform(&self) -> &'static str {
    if self.pressed {
      SOS_PRESS_TRANSFORM
    } else {
      ""
    }
  }
}
