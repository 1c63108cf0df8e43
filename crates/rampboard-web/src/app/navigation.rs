use std::rc::Rc;

use gloo::events::EventListener;
use rampboard_core::nav::NavOutcome;
use tracing::error;

use super::App;

pub(super) fn wire(
  app: &Rc<App>
) -> Vec<EventListener> {
  app
    .nodes
    .nav_items
    .iter()
    .enumerate()
    .map(|(idx, item)| {
      let app = Rc::clone(app);
      EventListener::new(item, "click", move |_| {
        let outcome =
          app.board.borrow_mut().navigate(idx);
        match outcome {
          | Ok(outcome) => {
            if matches!(
              outcome,
              NavOutcome::Navigated { .. }
            ) {
              app.render_nav();
            }
            if let Some(toast) = outcome.toast() {
              app.toaster.show(toast.clone());
            }
          }
          | Err(err) => {
            error!(idx, %err, "navigation failed")
          }
        }
      })
    })
    .collect()
}
