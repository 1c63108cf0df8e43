use anyhow::{Context, anyhow};
use rampboard_core::board::BoardView;
use rampboard_core::filter::{Filter, FilterBar, FilterSelector};
use rampboard_core::nav::{NavBar, NavItem};
use rampboard_core::schedule::{JobHandle, Scheduler};
use rampboard_core::sos::SOS_PRESS_MS;
use rampboard_core::sync::CardTimings;
use rampboard_core::toast::{
    TOAST_FADE_MS, TOAST_VISIBLE_MS, Toast, ToastPhase, ToastSlot, ToastTicket,
};
use rampboard_core::{AcceptOutcome, Board, TaskCard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub board: BoardFixture,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct BoardFixture {
    pub cards: Vec<TaskCard>,
    pub filters: Vec<FilterSelector>,
    #[serde(default)]
    pub active_filter: Option<Filter>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub active_nav: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Filter(Filter),
    Search(String),
    Accept(usize),
    Nav(String),
    Sos,
    WaitMs(u32),
}

#[derive(Debug, Clone, Copy)]
enum Job {
    RevealToast(ToastTicket),
    FadeToast(ToastTicket),
    DismissToast(ToastTicket),
    ReleaseSos,
}

/// State left after a scenario ran.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub scenario: String,
    pub elapsed_ms: u64,
    pub board: BoardView,
    pub timings: Vec<(usize, CardTimings)>,
    pub toasts_shown: Vec<Toast>,
    pub live_toast: Option<(Toast, ToastPhase)>,
}

pub struct Replay {
    board: Board,
    toasts: ToastSlot,
    sched: Scheduler<Job>,
    toast_jobs: Vec<JobHandle>,
    sos_release: Option<JobHandle>,
    shown: Vec<Toast>,
}

impl Replay {
    pub fn new(fixture: BoardFixture, default_nav: &str) -> anyhow::Result<Self> {
        let active_nav = fixture
            .active_nav
            .as_deref()
            .and_then(|target| fixture.nav.iter().position(|item| item.target == target));
        let board = Board::new(
            fixture.cards,
            FilterBar::new(fixture.filters, fixture.active_filter),
            NavBar::new(fixture.nav, active_nav, default_nav),
        );
        board.badge().context("fixture must carry a `new` tab with a badge")?;

        Ok(Self {
            board,
            toasts: ToastSlot::new(),
            sched: Scheduler::new(),
            toast_jobs: vec![],
            sos_release: None,
            shown: vec![],
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one step and returns a one-line description of what happened.
    #[tracing::instrument(skip(self))]
    pub fn apply(&mut self, step: &Step) -> anyhow::Result<String> {
        let line = match step {
            Step::Filter(filter) => {
                if self.board.select_filter(*filter) {
                    format!("filter {filter}: {} visible", self.board.visible().count())
                } else {
                    format!("filter {filter}: no such tab")
                }
            }
            Step::Search(raw) => {
                self.board.search(raw);
                format!(
                    "search {raw:?}: {} visible, tab {}",
                    self.board.visible().count(),
                    self.board.filters().active()
                )
            }
            Step::Accept(idx) => match self.board.accept(*idx)? {
                AcceptOutcome::Accepted {
                    previous, badge, toast,
                } => {
                    self.show(toast);
                    format!("accept #{idx}: {previous} -> complete, badge {}", badge.count)
                }
                other => format!("accept #{idx}: ignored ({other:?})"),
            },
            Step::Nav(target) => {
                let idx = self.board.nav().position(target)?;
                let outcome = self.board.navigate(idx)?;
                if let Some(toast) = outcome.toast() {
                    self.show(toast.clone());
                }
                format!(
                    "nav {target}: active {}",
                    self.board.nav().active_target().unwrap_or("-")
                )
            }
            Step::Sos => {
                let toast = self.board.press_sos();
                if let Some(pending) = self.sos_release.take() {
                    self.sched.cancel(pending);
                }
                self.sos_release = Some(self.sched.schedule(SOS_PRESS_MS, Job::ReleaseSos));
                self.show(toast);
                "sos pressed".to_string()
            }
            Step::WaitMs(ms) => {
                self.wait(*ms);
                format!("waited {ms}ms (t={}ms)", self.sched.now_ms())
            }
        };
        debug!(%line, "step applied");
        Ok(line)
    }

    fn show(&mut self, toast: Toast) {
        for handle in self.toast_jobs.drain(..) {
            self.sched.cancel(handle);
        }
        self.shown.push(toast.clone());
        let (ticket, _) = self.toasts.show(toast);
        self.toast_jobs = vec![
            self.sched.schedule(0, Job::RevealToast(ticket)),
            self.sched.schedule(TOAST_VISIBLE_MS, Job::FadeToast(ticket)),
        ];
    }

    fn wait(&mut self, ms: u32) {
        let deadline = self.sched.now_ms() + u64::from(ms);
        while let Some(job) = self.sched.pop_until(deadline) {
            match job {
                Job::RevealToast(ticket) => {
                    self.toasts.reveal(ticket);
                }
                Job::FadeToast(ticket) => {
                    if self.toasts.fade(ticket) {
                        let handle =
                            self.sched.schedule(TOAST_FADE_MS, Job::DismissToast(ticket));
                        self.toast_jobs.push(handle);
                    }
                }
                Job::DismissToast(ticket) => {
                    self.toasts.dismiss(ticket);
                }
                Job::ReleaseSos => {
                    self.sos_release = None;
                    self.board.release_sos();
                }
            }
        }
        self.sched.settle(deadline);
    }

    pub fn finish(self, scenario: &str) -> anyhow::Result<Outcome> {
        let timings = self
            .board
            .cards()
            .iter()
            .enumerate()
            .filter_map(|(idx, card)| card.timings().map(|t| (idx, t)))
            .collect();
        Ok(Outcome {
            scenario: scenario.to_string(),
            elapsed_ms: self.sched.now_ms(),
            board: self.board.view()?,
            timings,
            toasts_shown: self.shown,
            live_toast: self
                .toasts
                .current()
                .map(|(toast, phase)| (toast.clone(), phase)),
        })
    }
}

pub fn run_scenario(scenario: Scenario, default_nav: &str) -> anyhow::Result<(Vec<String>, Outcome)> {
    info!(scenario = %scenario.name, steps = scenario.steps.len(), "replaying scenario");
    let mut replay = Replay::new(scenario.board, default_nav)?;

    let mut lines = Vec::with_capacity(scenario.steps.len());
    for (idx, step) in scenario.steps.iter().enumerate() {
        let line = replay.apply(step).map_err(|err| {
            anyhow!("scenario {} step {}: {err:#}", scenario.name, idx + 1)
        })?;
        lines.push(line);
    }

    debug!(visible = replay.board().visible().count(), "scenario finished");
    let outcome = replay.finish(&scenario.name)?;
    Ok((lines, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampboard_core::status::TaskStatus;
    use rampboard_core::toast::ToastKind;

    fn scenario(steps: serde_json::Value) -> Scenario {
        serde_json::from_value(serde_json::json!({
            "name": "unit",
            "board": {
                "cards": [
                    { "status": "new", "title": "Pushback", "flight_code": "VA 812",
                      "accept_trigger": true, "etd": { "old": "930", "new": "1015" } },
                    { "status": "new", "title": "Fuel check", "flight_code": "QF 401",
                      "accept_trigger": true },
                    { "status": "complete", "title": "Cabin clean", "flight_dest": "Perth" }
                ],
                "filters": [
                    { "filter": "all" },
                    { "filter": "new", "badge": true },
                    { "filter": "in-progress" },
                    { "filter": "complete" }
                ],
                "nav": [
                    { "target": "tasks" },
                    { "target": "map" },
                    { "target": "add", "add": true }
                ]
            },
            "steps": steps
        }))
        .expect("scenario json")
    }

    #[test]
    fn steps_parse_from_json() {
        let parsed = scenario(serde_json::json!([
            { "filter": "complete" },
            { "search": "qf" },
            { "accept": 1 },
            { "nav": "map" },
            "sos",
            { "wait_ms": 100 }
        ]));
        assert_eq!(
            parsed.steps,
            vec![
                Step::Filter(Filter::Status(TaskStatus::Complete)),
                Step::Search("qf".to_string()),
                Step::Accept(1),
                Step::Nav("map".to_string()),
                Step::Sos,
                Step::WaitMs(100),
            ]
        );
    }

    #[test]
    fn accept_then_wait_clears_toast() {
        let (_, outcome) = run_scenario(
            scenario(serde_json::json!([
                { "accept": 0 },
                { "wait_ms": 2500 }
            ])),
            "tasks",
        )
        .expect("replay");
        assert_eq!(outcome.board.badge.count, 1);
        let (_, phase) = outcome.live_toast.clone().expect("still fading");
        assert_eq!(phase, ToastPhase::Fading);

        let (_, outcome) = run_scenario(
            scenario(serde_json::json!([
                { "accept": 0 },
                { "wait_ms": 2800 }
            ])),
            "tasks",
        )
        .expect("replay");
        assert!(outcome.live_toast.is_none());
        assert_eq!(outcome.elapsed_ms, 2800);
    }

    #[test]
    fn new_toast_cancels_pending_fade_of_previous() {
        let (_, outcome) = run_scenario(
            scenario(serde_json::json!([
                { "accept": 0 },
                { "wait_ms": 2000 },
                "sos",
                { "wait_ms": 1000 }
            ])),
            "tasks",
        )
        .expect("replay");
        let (toast, phase) = outcome.live_toast.expect("sos toast live");
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(phase, ToastPhase::Shown);
        assert_eq!(outcome.toasts_shown.len(), 2);
        assert!(!outcome.board.sos_pressed);
    }

    #[test]
    fn sos_release_after_press_delay() {
        let mut replay = Replay::new(scenario(serde_json::json!([])).board, "tasks")
            .expect("replay");
        replay.apply(&Step::Sos).expect("sos");
        assert!(replay.board().sos().is_pressed());
        replay.apply(&Step::WaitMs(99)).expect("wait");
        assert!(replay.board().sos().is_pressed());
        replay.apply(&Step::WaitMs(1)).expect("wait");
        assert!(!replay.board().sos().is_pressed());
    }

    #[test]
    fn search_then_filter_flow() {
        let (lines, outcome) = run_scenario(
            scenario(serde_json::json!([
                { "filter": "complete" },
                { "search": "FUEL" },
                { "nav": "map" },
                { "nav": "add" }
            ])),
            "tasks",
        )
        .expect("replay");
        assert_eq!(lines[1], "search \"FUEL\": 1 visible, tab all");
        let visible: Vec<usize> = outcome
            .board
            .cards
            .iter()
            .filter(|card| !card.hidden)
            .map(|card| card.index)
            .collect();
        assert_eq!(visible, vec![1]);
        assert_eq!(outcome.board.nav.as_deref(), Some("map"));
        let messages: Vec<&str> =
            outcome.toasts_shown.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Navigating to Map...", "Add new task..."]);
    }

    #[test]
    fn unknown_card_fails_with_step_context() {
        let err = run_scenario(scenario(serde_json::json!([{ "accept": 9 }])), "tasks")
            .expect_err("card 9 does not exist");
        assert!(format!("{err:#}").contains("step 1"));
    }
}
