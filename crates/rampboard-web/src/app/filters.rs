use std::rc::Rc;

use gloo::events::EventListener;
use tracing::debug;

use super::App;

pub(super) fn wire(
  app: &Rc<App>
) -> Vec<EventListener> {
  app
    .nodes
    .filter_tabs
    .iter()
    .map(|(filter, tab)| {
      let app = Rc::clone(app);
      let filter = *filter;
      EventListener::new(tab, "click", move |_| {
        debug!(%filter, "filter tab clicked");
        let applied = app
          .board
          .borrow_mut()
          .select_filter(filter);
        if applied {
          app.render_filter_tabs();
          app.render_cards();
        }
      })
    })
    .collect()
}
