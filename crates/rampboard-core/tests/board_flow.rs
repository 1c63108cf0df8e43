use rampboard_core::filter::{Filter, FilterBar, FilterSelector};
use rampboard_core::nav::{NavBar, NavItem};
use rampboard_core::search::CardText;
use rampboard_core::status::TaskStatus;
use rampboard_core::sync::RawPair;
use rampboard_core::toast::{ToastKind, ToastSlot};
use rampboard_core::{AcceptOutcome, Board, TaskCard};

fn card(status: TaskStatus, title: &str, code: &str) -> TaskCard {
    let mut card = TaskCard::new(status);
    card.accept_trigger = status != TaskStatus::Complete;
    card.text = CardText {
        title: Some(title.to_string()),
        subtitle: Some("Ramp crew".to_string()),
        flight_code: Some(code.to_string()),
        flight_dest: None,
    };
    card
}

fn board() -> Board {
    let mut delayed = card(TaskStatus::New, "Pushback", "VA 812");
    delayed.etd = Some(RawPair::new(Some("930"), Some("1015")));
    delayed.rt_row = true;

    Board::new(
        vec![
            delayed,
            card(TaskStatus::New, "Fuel check", "QF 401"),
            card(TaskStatus::InProgress, "Baggage offload", "JQ 220"),
            card(TaskStatus::Complete, "Cabin clean", "QF 9"),
        ],
        FilterBar::new(
            vec![
                FilterSelector::new(Filter::All),
                FilterSelector::with_badge(Filter::Status(TaskStatus::New)),
                FilterSelector::new(Filter::Status(TaskStatus::InProgress)),
                FilterSelector::new(Filter::Status(TaskStatus::Complete)),
            ],
            None,
        ),
        NavBar::new(
            vec![
                NavItem::target("tasks"),
                NavItem::target("map"),
                NavItem::add_action(),
            ],
            None,
            "tasks",
        ),
    )
}

fn visible(board: &Board) -> Vec<usize> {
    board.visible().collect()
}

#[test]
fn filter_all_restores_every_card_after_any_sequence() {
    let mut board = board();

    board.select_filter(Filter::Status(TaskStatus::Complete));
    assert_eq!(visible(&board), vec![3]);

    board.search("qf");
    board.select_filter(Filter::Status(TaskStatus::InProgress));
    assert_eq!(visible(&board), vec![2]);

    board.select_filter(Filter::All);
    assert_eq!(visible(&board), vec![0, 1, 2, 3]);
}

#[test]
fn search_overrides_active_filter() {
    let mut board = board();
    board.select_filter(Filter::Status(TaskStatus::Complete));

    board.search("  FUEL ");
    assert_eq!(visible(&board), vec![1]);
    assert_eq!(board.card(1).expect("card").status, TaskStatus::New);
    assert!(board.filters().is_active(Filter::All));
}

#[test]
fn clearing_search_shows_everything_regardless_of_tab() {
    let mut board = board();
    board.select_filter(Filter::Status(TaskStatus::New));
    board.search("offload");
    assert_eq!(visible(&board), vec![2]);

    board.search("");
    assert_eq!(visible(&board), vec![0, 1, 2, 3]);
}

#[test]
fn empty_search_keeps_filter_tab() {
    let mut board = board();
    board.select_filter(Filter::Status(TaskStatus::New));
    assert!(!board.search("   "));
    assert!(board.filters().is_active(Filter::Status(TaskStatus::New)));

    assert!(board.search("fuel"));
    assert!(board.filters().is_active(Filter::All));
}

#[test]
fn accept_is_one_way_and_updates_badge_once() {
    let mut board = board();
    assert_eq!(board.badge().expect("badge").count, 2);

    let (previous, badge, toast) = match board.accept(1).expect("card exists") {
        AcceptOutcome::Accepted {
            previous,
            badge,
            toast,
        } => (previous, badge, toast),
        other => panic!("expected acceptance, got {other:?}"),
    };
    assert_eq!(previous, TaskStatus::New);
    assert_eq!(badge.count, 1);
    assert!(badge.visible);
    assert_eq!(toast.message, "Task accepted successfully!");
    assert_eq!(toast.kind, ToastKind::Success);

    let card = board.card(1).expect("card");
    assert_eq!(card.status, TaskStatus::Complete);
    assert!(card.accepted);
    assert!(!card.accept_trigger);

    assert_eq!(
        board.accept(1).expect("card exists"),
        AcceptOutcome::AlreadyAccepted
    );
    assert_eq!(board.badge().expect("badge").count, 1);
}

#[test]
fn badge_hides_when_last_new_task_is_accepted() {
    let mut board = board();
    board.accept(0).expect("accept first");
    board.accept(1).expect("accept second");

    let badge = board.badge().expect("badge");
    assert_eq!(badge.count, 0);
    assert!(!badge.visible);
    assert_eq!(board.counts().complete, 3);
}

#[test]
fn accept_without_trigger_is_ignored() {
    let mut board = board();
    assert_eq!(board.accept(3).expect("card"), AcceptOutcome::NoTrigger);
    assert!(board.accept(42).is_err());
}

#[test]
fn timings_only_for_cards_with_etd() {
    let board = board();
    let timings = board.card(0).expect("card").timings().expect("etd row");
    assert_eq!(timings.etd.old.as_deref(), Some("0930hrs"));
    assert!(timings.etd.updated);
    let rt = timings.rt.expect("rt");
    assert_eq!(rt.old.as_deref(), Some("0815hrs"));
    assert_eq!(rt.new.as_deref(), Some("0900hrs"));
    assert!(rt.updated);

    assert!(board.card(1).expect("card").timings().is_none());
}

#[test]
fn second_toast_leaves_exactly_one_live() {
    let mut board = board();
    let mut slot = ToastSlot::new();

    let accepted = match board.accept(0).expect("accept") {
        AcceptOutcome::Accepted { toast, .. } => toast,
        other => panic!("unexpected {other:?}"),
    };
    let (first, _) = slot.show(accepted);
    let (_, replaced) = slot.show(board.press_sos());

    assert_eq!(replaced, Some(first));
    let (live, _) = slot.current().expect("one toast");
    assert_eq!(live.message, "SOS Alert Triggered!");
    assert_eq!(live.kind, ToastKind::Warning);
}

#[test]
fn board_without_new_badge_fails_badge_lookup() {
    let board = Board::new(
        vec![TaskCard::new(TaskStatus::New)],
        FilterBar::new(vec![FilterSelector::new(Filter::All)], None),
        NavBar::new(vec![], None, "tasks"),
    );
    assert!(board.badge().is_err());
}

#[test]
fn cards_deserialize_from_fixture_json() {
    let raw = r#"{
        "status": "in-progress",
        "title": "Catering",
        "flight_code": "NZ 104",
        "etd": { "old": "0030" }
    }"#;
    let card: TaskCard = serde_json::from_str(raw).expect("parse card");
    assert_eq!(card.status, TaskStatus::InProgress);
    assert_eq!(card.text.flight_code.as_deref(), Some("NZ 104"));
    assert!(!card.hidden);
    let timings = card.timings().expect("etd");
    assert_eq!(timings.etd.old.as_deref(), Some("0030hrs"));
    assert!(!timings.etd.updated);
}
