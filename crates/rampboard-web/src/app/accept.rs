use std::rc::Rc;

use gloo::events::EventListener;
use rampboard_core::AcceptOutcome;
use tracing::{
  debug,
  error
};

use super::App;

pub(super) fn wire(
  app: &Rc<App>
) -> Vec<EventListener> {
  app
    .nodes
    .cards
    .iter()
    .enumerate()
    .filter_map(|(idx, nodes)| {
      let button = nodes.accept.clone()?;
      let target = button.clone();
      let app = Rc::clone(app);
      Some(EventListener::new(
        &target,
        "click",
        move |_| {
          let outcome =
            app.board.borrow_mut().accept(idx);
          match outcome {
            | Ok(AcceptOutcome::Accepted {
              badge,
              toast,
              ..
            }) => {
              button.remove();
              app.render_card_state(idx);
              app.paint_badge(badge);
              app.toaster.show(toast);
            }
            | Ok(other) => {
              debug!(idx, ?other, "accept ignored")
            }
            | Err(err) => {
              error!(idx, %err, "accept failed")
            }
          }
        }
      ))
    })
    .collect()
}
