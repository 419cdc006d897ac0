use alloc::vec::Vec;

use arcpager::{FlingModel, Pager};

use crate::{PagerEvent, ScrollState};

/// Corrective snaps allowed after the primary snap of one settle.
pub const DEFAULT_CORRECTION_BUDGET: u8 = 1;

/// A scroll the snap engine asks its coordinator to animate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapCommand {
    /// Animate by a raw delta.
    SmoothScrollBy(f32),
    /// Animate until `position` is centered.
    SmoothScrollToPosition(i64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SnapPhase {
    #[default]
    Idle,
    /// A centering scroll was issued and has not been accepted yet.
    Settling,
}

/// Center snapping for a [`crate::ScrollCoordinator`].
///
/// The engine never moves the pager itself. It inspects the pager on flings and state changes
/// and answers with a [`SnapCommand`] for the coordinator to run.
///
/// When the pager comes to rest off-center it issues one centering scroll. Float rounding can
/// leave a residual after that scroll; at most `correction_budget` further scrolls are issued
/// before the position is accepted and [`PagerEvent::PageSelected`] is reported.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapEngine {
    snap_scroll_one: bool,
    correction_budget: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    corrections_left: u8,
    #[cfg_attr(feature = "serde", serde(skip))]
    phase: SnapPhase,
    #[cfg_attr(feature = "serde", serde(skip))]
    scroll_start: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip))]
    scrolled: bool,
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapEngine {
    pub fn new() -> Self {
        Self {
            snap_scroll_one: false,
            correction_budget: DEFAULT_CORRECTION_BUDGET,
            corrections_left: 0,
            phase: SnapPhase::Idle,
            scroll_start: None,
            scrolled: false,
        }
    }

    /// Limits every fling to the adjacent item.
    pub fn with_snap_scroll_one(mut self, enabled: bool) -> Self {
        self.snap_scroll_one = enabled;
        self
    }

    pub fn with_correction_budget(mut self, budget: u8) -> Self {
        self.correction_budget = budget;
        self
    }

    pub fn snap_scroll_one(&self) -> bool {
        self.snap_scroll_one
    }

    pub fn set_snap_scroll_one(&mut self, enabled: bool) {
        self.snap_scroll_one = enabled;
    }

    pub fn correction_budget(&self) -> u8 {
        self.correction_budget
    }

    /// Corrections still allowed for the settle in progress.
    pub fn corrections_left(&self) -> u8 {
        self.corrections_left
    }

    /// Whether a centering scroll is in flight.
    pub fn is_snapping(&self) -> bool {
        self.phase == SnapPhase::Settling
    }

    /// Position offset recorded when the last drag started.
    pub fn scroll_start(&self) -> Option<i64> {
        self.scroll_start
    }

    /// Picks the position a fling from `start_position_offset` should end on.
    ///
    /// With `snap_scroll_one` the fling moves exactly one item in the direction of `velocity`.
    /// Otherwise the item count comes from the fling distance, truncated toward zero.
    pub fn compute_snap_target(
        &self,
        pager: &Pager,
        start_position_offset: i64,
        velocity: f32,
        fling: &FlingModel,
    ) -> i64 {
        let delta = if self.snap_scroll_one {
            if velocity > 0.0 { 1 } else { -1 }
        } else {
            let distance = fling.distance(velocity);
            (distance / pager.interval() / pager.distance_ratio()) as i64
        };
        if pager.is_reverse_layout() {
            -start_position_offset - delta
        } else {
            start_position_offset + delta
        }
    }

    /// Handles a fling released with main-axis `velocity`.
    ///
    /// Returns `None` when the fling is left to the coordinator: an empty pager, or a bounded
    /// pager already resting on the bound the fling points past.
    pub fn on_fling(
        &mut self,
        pager: &Pager,
        velocity: f32,
        fling: &FlingModel,
    ) -> Option<SnapCommand> {
        if pager.count() == 0 {
            return None;
        }
        let model = pager.offset_model();
        if (velocity > 0.0 && model.is_at_max()) || (velocity < 0.0 && model.is_at_min()) {
            pdebug!(velocity, offset = model.offset(), "fling past bound left unhandled");
            return None;
        }

        let start = self
            .scroll_start
            .unwrap_or_else(|| pager.current_position_offset());
        let mut target = self.compute_snap_target(pager, start, velocity, fling);
        if !pager.is_infinite() {
            target = target.clamp(0, pager.count() as i64 - 1);
        }
        pdebug!(start, target, velocity, "snap fling");
        Some(SnapCommand::SmoothScrollToPosition(target))
    }

    /// Notes movement reported by the coordinator.
    pub fn on_scrolled(&mut self, dx: f32, dy: f32) {
        if dx != 0.0 || dy != 0.0 {
            self.scrolled = true;
        }
    }

    /// Reacts to a coordinator state change.
    ///
    /// Always forwards [`PagerEvent::PageScrollStateChanged`]. A drag records its start position
    /// and abandons any settle in progress. Coming to rest after movement (or after a centering
    /// scroll) either yields the next centering scroll or accepts the position.
    pub fn on_scroll_state_changed(
        &mut self,
        pager: &Pager,
        state: ScrollState,
        events: &mut Vec<PagerEvent>,
    ) -> Option<SnapCommand> {
        if state == ScrollState::Dragging {
            self.scroll_start = Some(pager.current_position_offset());
            self.phase = SnapPhase::Idle;
        }
        events.push(PagerEvent::PageScrollStateChanged(state));

        if state != ScrollState::Idle {
            return None;
        }
        if !self.scrolled && self.phase == SnapPhase::Idle {
            return None;
        }
        self.scrolled = false;
        self.settle(pager, events)
    }

    /// Centers the pager right after the engine is attached.
    pub fn on_attach(
        &mut self,
        pager: &Pager,
        events: &mut Vec<PagerEvent>,
    ) -> Option<SnapCommand> {
        self.reset();
        self.settle(pager, events)
    }

    pub(crate) fn reset(&mut self) {
        self.corrections_left = 0;
        self.phase = SnapPhase::Idle;
        self.scroll_start = None;
        self.scrolled = false;
    }

    fn settle(&mut self, pager: &Pager, events: &mut Vec<PagerEvent>) -> Option<SnapCommand> {
        if pager.count() == 0 {
            self.phase = SnapPhase::Idle;
            return None;
        }

        let delta = pager.offset_to_center();
        match self.phase {
            SnapPhase::Idle if delta != 0.0 => {
                self.phase = SnapPhase::Settling;
                self.corrections_left = self.correction_budget;
                ptrace!(delta, "snap to center");
                return Some(SnapCommand::SmoothScrollBy(delta));
            }
            SnapPhase::Settling if delta != 0.0 && self.corrections_left > 0 => {
                self.corrections_left -= 1;
                ptrace!(delta, left = self.corrections_left, "snap correction");
                return Some(SnapCommand::SmoothScrollBy(delta));
            }
            SnapPhase::Settling if delta != 0.0 => {
                pdebug!(residual = delta, "snap residual accepted");
            }
            _ => {}
        }

        self.phase = SnapPhase::Idle;
        events.push(PagerEvent::PageSelected(pager.current_position()));
        None
    }
}
