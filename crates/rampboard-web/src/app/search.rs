use std::rc::Rc;

use gloo::events::EventListener;

use super::App;

pub(super) fn wire(
  app: &Rc<App>
) -> EventListener {
  let input = app.nodes.search.clone();
  let target = input.clone();
  let app = Rc::clone(app);
  EventListener::new(&target, "input", move |_| {
    let reset =
      app.board.borrow_mut().search(&input.value());
    app.render_cards();
    if reset {
      app.render_filter_tabs();
    }
  })
}
