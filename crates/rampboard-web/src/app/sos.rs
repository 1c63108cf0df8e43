use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use rampboard_core::sos::SOS_PRESS_MS;

use super::App;

pub(super) fn wire(
  app: &Rc<App>
) -> EventListener {
  let button = app.nodes.sos.clone();
  let app = Rc::clone(app);
  EventListener::new(&button, "click", move |_| {
    let toast = app.board.borrow_mut().press_sos();
    app.render_sos();

    let release = {
      let app = Rc::clone(&app);
      Timeout::new(SOS_PRESS_MS, move || {
        app.board.borrow_mut().release_sos();
        app.render_sos();
      })
    };
    // Dropping a pending release cancels
    // it.
    drop(app.sos_release.replace(Some(release)));

    app.toaster.show(toast);
  })
}
