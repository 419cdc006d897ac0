use alloc::vec::Vec;

use arcpager::{ConfigError, FlingModel, Invalidation, ItemHost, Pager, PagerOptions, Viewport};

use crate::{
    AttachError, Easing, PagerEvent, ScrollState, SnapCommand, SnapEngine, Tween, Velocity,
};

pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 50.0;
pub const DEFAULT_MAX_FLING_VELOCITY: f32 = 8000.0;

const SMOOTH_SCROLL_BASE_MS: f32 = 300.0;
const MAX_SMOOTH_SCROLL_MS: u64 = 2000;

/// Gesture tuning for a [`ScrollCoordinator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorOptions {
    /// Release velocities at or below this magnitude do not fling.
    pub min_fling_velocity: f32,
    /// Release velocities are clamped to this magnitude.
    pub max_fling_velocity: f32,
    pub fling: FlingModel,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self {
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY,
            fling: FlingModel::default(),
        }
    }

    pub fn with_min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn with_max_fling_velocity(mut self, velocity: f32) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    pub fn with_fling(mut self, fling: FlingModel) -> Self {
        self.fling = fling;
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    tween: Tween,
    /// Raw distance already handed to the pager.
    applied: f32,
}

impl Animation {
    fn new(tween: Tween) -> Self {
        Self {
            tween,
            applied: tween.from,
        }
    }
}

/// A framework-neutral gesture driver that wraps an [`arcpager::Pager`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_down` / `drag_by` / `pointer_up` when input events occur
/// - `tick(now_ms)` each frame while [`ScrollCoordinator::is_animating`] is true
///
/// Notifications are queued and collected with [`ScrollCoordinator::drain_events`]. An attached
/// [`SnapEngine`] sees every state change and every fling, and its commands run as smooth
/// scrolls.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    pager: Pager,
    options: CoordinatorOptions,
    state: ScrollState,
    pointer_down: bool,
    animation: Option<Animation>,
    snap: Option<SnapEngine>,
    events: Vec<PagerEvent>,
    now_ms: u64,
}

impl ScrollCoordinator {
    pub fn new(options: PagerOptions, count: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_pager(Pager::new(options, count)?))
    }

    pub fn from_pager(pager: Pager) -> Self {
        Self {
            pager,
            options: CoordinatorOptions::new(),
            state: ScrollState::Idle,
            pointer_down: false,
            animation: None,
            snap: None,
            events: Vec::new(),
            now_ms: 0,
        }
    }

    pub fn with_options(mut self, options: CoordinatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager {
        self.pager
    }

    pub fn options(&self) -> &CoordinatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CoordinatorOptions) {
        self.options = options;
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn snap(&self) -> Option<&SnapEngine> {
        self.snap.as_ref()
    }

    pub fn snap_mut(&mut self) -> Option<&mut SnapEngine> {
        self.snap.as_mut()
    }

    /// Takes the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<PagerEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Invalidation {
        self.pager.set_viewport(viewport)
    }

    /// Runs a layout pass if the pager has pending changes.
    pub fn layout(&mut self, host: &mut impl ItemHost) {
        if self.pager.pending_invalidation() != Invalidation::None {
            self.pager.layout(host);
        }
    }

    /// Attaches a snap engine, which immediately centers the pager.
    ///
    /// Fails if an engine is already attached; call [`ScrollCoordinator::detach_snap`] first.
    pub fn attach_snap(&mut self, mut snap: SnapEngine, now_ms: u64) -> Result<(), AttachError> {
        if self.snap.is_some() {
            return Err(AttachError::AlreadyAttached);
        }
        self.now_ms = now_ms;
        let command = snap.on_attach(&self.pager, &mut self.events);
        self.snap = Some(snap);
        if let Some(command) = command {
            self.run(command);
        }
        Ok(())
    }

    pub fn detach_snap(&mut self) -> Option<SnapEngine> {
        let mut snap = self.snap.take()?;
        snap.reset();
        Some(snap)
    }

    /// Call this when a pointer goes down. An animation in progress is cancelled.
    pub fn pointer_down(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.pointer_down = true;
        if self.state == ScrollState::Settling {
            self.animation = None;
            self.set_state(ScrollState::Dragging);
        }
    }

    /// Applies a raw drag delta and returns the part the pager consumed.
    ///
    /// Ignored unless the pointer is down. The first nonzero delta enters `Dragging`.
    pub fn drag_by(&mut self, raw_delta: f32) -> f32 {
        if !self.pointer_down || raw_delta == 0.0 {
            return 0.0;
        }
        if self.state != ScrollState::Dragging {
            self.animation = None;
            self.set_state(ScrollState::Dragging);
        }
        let consumed = self.pager.scroll_by(raw_delta);
        self.emit_scrolled(consumed);
        consumed
    }

    /// Call this when the pointer is released.
    ///
    /// A release above the fling threshold is offered to the snap engine first and falls back
    /// to a native fling. Anything else comes to rest immediately.
    pub fn pointer_up(&mut self, velocity: Velocity, now_ms: u64) {
        self.now_ms = now_ms;
        self.pointer_down = false;
        if self.state != ScrollState::Dragging {
            return;
        }

        let max = self.options.max_fling_velocity.abs();
        let v = self
            .pager
            .orientation()
            .main_axis(velocity.x, velocity.y)
            .max(-max)
            .min(max);
        if v.abs() > self.options.min_fling_velocity && self.fling(v, now_ms) {
            return;
        }
        self.set_state(ScrollState::Idle);
    }

    fn fling(&mut self, velocity: f32, now_ms: u64) -> bool {
        let fling = self.options.fling;
        let command = match self.snap.as_mut() {
            Some(snap) => snap.on_fling(&self.pager, velocity, &fling),
            None => None,
        };
        if let Some(command) = command {
            self.run(command);
            return self.state == ScrollState::Settling;
        }

        let distance = fling.distance(velocity);
        if distance == 0.0 {
            return false;
        }
        let duration_ms = fling.duration_ms(velocity);
        pdebug!(velocity, distance, duration_ms, "native fling");
        self.animation = Some(Animation::new(Tween::new(
            0.0,
            distance,
            now_ms,
            duration_ms,
            Easing::Decelerate,
        )));
        self.set_state(ScrollState::Settling);
        true
    }

    /// Advances the running animation.
    ///
    /// Returns the pager offset after this tick, or `None` when nothing is animating. The
    /// animation ends when its tween completes or when the pager can no longer move.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.now_ms = now_ms;
        let mut anim = self.animation?;

        let target = anim.tween.sample(now_ms);
        let step = target - anim.applied;
        anim.applied = target;
        let consumed = self.pager.scroll_by(step);
        self.emit_scrolled(consumed);

        let model = self.pager.offset_model();
        let blocked = consumed == 0.0
            && ((step > 0.0 && model.is_at_max()) || (step < 0.0 && model.is_at_min()));
        if blocked || anim.tween.is_done(now_ms) {
            ptrace!(blocked, offset = self.pager.offset(), "animation finished");
            self.animation = None;
            self.set_state(ScrollState::Idle);
        } else {
            self.animation = Some(anim);
        }
        Some(self.pager.offset())
    }

    /// Stops any animation. A settling pager comes to rest.
    pub fn stop_scroll(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.animation = None;
        if self.state == ScrollState::Settling {
            self.set_state(ScrollState::Idle);
        }
    }

    /// Jumps to `position` without animation.
    pub fn scroll_to_position(&mut self, position: i64, now_ms: u64) {
        self.now_ms = now_ms;
        self.animation = None;
        self.pager.scroll_to_position(position);
        if self.state == ScrollState::Settling {
            self.set_state(ScrollState::Idle);
        }
    }

    /// Animates by a raw delta.
    ///
    /// The duration grows with the distance relative to the viewport, capped at two seconds.
    pub fn smooth_scroll_by(&mut self, raw_delta: f32, now_ms: u64) {
        self.now_ms = now_ms;
        if raw_delta == 0.0 || !raw_delta.is_finite() {
            return;
        }
        let duration_ms = self.smooth_scroll_duration(raw_delta);
        self.animation = Some(Animation::new(Tween::new(
            0.0,
            raw_delta,
            now_ms,
            duration_ms,
            Easing::EaseOutQuint,
        )));
        self.set_state(ScrollState::Settling);
    }

    /// Animates until `position` is centered.
    ///
    /// In bounded mode positions outside `[0, count)` are ignored.
    pub fn smooth_scroll_to_position(&mut self, position: i64, now_ms: u64) {
        let count = self.pager.count() as i64;
        if !self.pager.is_infinite() && (position < 0 || position >= count) {
            pwarn!(position, count, "smooth_scroll_to_position out of range");
            return;
        }
        let delta = self.pager.offset_to_position(position);
        self.smooth_scroll_by(delta, now_ms);
    }

    fn smooth_scroll_duration(&self, raw_delta: f32) -> u64 {
        let viewport = self.pager.viewport().main;
        let screens = if viewport > 0.0 {
            raw_delta.abs() / viewport
        } else {
            0.0
        };
        (((screens + 1.0) * SMOOTH_SCROLL_BASE_MS) as u64).min(MAX_SMOOTH_SCROLL_MS)
    }

    fn run(&mut self, command: SnapCommand) {
        let now_ms = self.now_ms;
        match command {
            SnapCommand::SmoothScrollBy(delta) => self.smooth_scroll_by(delta, now_ms),
            SnapCommand::SmoothScrollToPosition(position) => {
                self.smooth_scroll_to_position(position, now_ms)
            }
        }
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state == state {
            return;
        }
        pdebug!(from = ?self.state, to = ?state, "scroll state");
        self.state = state;
        self.events.push(PagerEvent::ScrollStateChanged(state));

        let command = match self.snap.as_mut() {
            Some(snap) => snap.on_scroll_state_changed(&self.pager, state, &mut self.events),
            None => None,
        };
        if let Some(command) = command {
            self.run(command);
        }
    }

    fn emit_scrolled(&mut self, consumed: f32) {
        if consumed == 0.0 {
            return;
        }
        let (dx, dy) = self.pager.orientation().split(consumed);
        self.events.push(PagerEvent::Scrolled { dx, dy });
        if let Some(snap) = self.snap.as_mut() {
            snap.on_scrolled(dx, dy);
        }
    }
}
