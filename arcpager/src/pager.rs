use alloc::vec::Vec;

use crate::geometry::{GeometryMapping, Shape};
use crate::math;
use crate::options::{validate_interval, validate_move_speed, validate_radius};
use crate::visibility::{DrawOrder, select_visible_into};
use crate::{
    ConfigError, Frame, Gravity, Invalidation, ItemSize, ItemSlot, MaxVisible, OffsetModel,
    Orientation, PagerOptions, PagerState, PlacedItem, RemovalBounds, ShapeKind, Transform,
    Viewport, VisibleItem, ZAlignment,
};

/// Offset deltas below this are treated as no movement.
const MIN_OFFSET_DELTA: f32 = 1e-8;

/// The render boundary a [`Pager`] lays items out into.
///
/// The pager never holds UI objects; it asks the host to measure, place and recycle items by
/// slot.
pub trait ItemHost {
    /// Measures the item backed by `index`.
    fn measure_item(&mut self, index: usize) -> ItemSize;

    /// Applies geometry to an item. Items are placed in draw order.
    fn place_item(&mut self, item: &PlacedItem);

    /// Releases an item that is no longer laid out.
    fn recycle_item(&mut self, slot: ItemSlot);
}

/// A headless pager that lays items out along a path.
///
/// The pager owns the scroll offset and the configuration. Adapters feed it raw scroll deltas
/// (`scroll_by`) and call `layout` whenever [`Pager::pending_invalidation`] is not `None`.
///
/// For gesture handling, flings and snapping, see the `arcpager-adapter` crate.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    bounds: RemovalBounds,
    model: OffsetModel,
    viewport: Viewport,

    item_size: Option<ItemSize>,
    resolved_radius: Option<f32>,

    pending: Invalidation,
    attached: Vec<ItemSlot>,
    scratch: Vec<VisibleItem>,
}

impl Pager {
    /// Creates a pager over `count` items.
    pub fn new(options: PagerOptions, count: usize) -> Result<Self, ConfigError> {
        options.validate()?;
        let bounds = options.removal_bounds()?;
        pdebug!(
            count,
            interval = options.interval,
            infinite = options.infinite,
            "Pager::new"
        );
        let model = OffsetModel::new(
            options.interval,
            count,
            options.reverse_layout,
            options.infinite,
        );
        Ok(Self {
            resolved_radius: options.radius,
            options,
            bounds,
            model,
            viewport: Viewport::default(),
            item_size: None,
            pending: Invalidation::Rebuild,
            attached: Vec::new(),
            scratch: Vec::new(),
        })
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn offset_model(&self) -> &OffsetModel {
        &self.model
    }

    pub fn count(&self) -> usize {
        self.model.count()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation()
    }

    pub fn interval(&self) -> f32 {
        self.model.interval()
    }

    pub fn is_infinite(&self) -> bool {
        self.model.is_infinite()
    }

    pub fn is_reverse_layout(&self) -> bool {
        self.model.is_reversed()
    }

    pub fn offset(&self) -> f32 {
        self.model.offset()
    }

    pub fn max_offset(&self) -> f32 {
        self.model.max_offset()
    }

    pub fn min_offset(&self) -> f32 {
        self.model.min_offset()
    }

    /// Finger distance per unit of offset (`1 / move_speed`, saturating at `f32::MAX`).
    pub fn distance_ratio(&self) -> f32 {
        self.options.distance_ratio()
    }

    pub fn current_position_offset(&self) -> i64 {
        self.model.current_position_offset()
    }

    pub fn current_position(&self) -> usize {
        self.model.current_position()
    }

    /// Radius used by circular layouts, once known.
    ///
    /// `None` while the radius is automatic and no item has been measured yet.
    pub fn radius(&self) -> Option<f32> {
        self.resolved_radius
    }

    /// Measured size of the representative item (item 0), once known.
    pub fn item_size(&self) -> Option<ItemSize> {
        self.item_size
    }

    pub fn removal_bounds(&self) -> RemovalBounds {
        self.bounds
    }

    pub fn shape(&self) -> Shape {
        Shape::from_options(&self.options, self.resolved_radius.unwrap_or(0.0))
    }

    /// Raw scroll distance that brings `position` to the center.
    pub fn offset_to_position(&self, position: i64) -> f32 {
        let delta = self.model.target_offset(position) * self.distance_ratio();
        math::trunc(delta.clamp(-f32::MAX, f32::MAX))
    }

    /// Raw scroll distance from the current offset to the nearest item center.
    ///
    /// Sub-unit residuals are truncated to zero.
    pub fn offset_to_center(&self) -> f32 {
        self.offset_to_position(self.model.center_position())
    }

    /// Geometry of `position` at the current offset.
    pub fn compute_transform(&self, position: i64) -> Transform {
        self.shape().transform(self.model.target_offset(position))
    }

    /// Scrolls by a raw input delta and returns the raw delta that was consumed.
    ///
    /// At a bound (bounded mode) the consumed delta is smaller than requested, down to zero.
    pub fn scroll_by(&mut self, raw_delta: f32) -> f32 {
        let ratio = self.distance_ratio();
        let delta = raw_delta / ratio;
        if delta.abs() < MIN_OFFSET_DELTA {
            return 0.0;
        }
        let applied = self.model.apply_delta(delta);
        if applied == 0.0 {
            return 0.0;
        }
        self.invalidate(Invalidation::Relayout);
        let consumed = if applied == delta {
            raw_delta
        } else {
            applied * ratio
        };
        ptrace!(raw_delta, consumed, offset = self.model.offset(), "scroll_by");
        consumed
    }

    /// Jumps to `position` without animation.
    ///
    /// In bounded mode positions outside `[0, count)` are ignored.
    pub fn scroll_to_position(&mut self, position: i64) {
        if !self.model.is_infinite() && (position < 0 || position >= self.count() as i64) {
            pwarn!(position, count = self.count(), "scroll_to_position out of range");
            return;
        }
        self.model.set_offset(self.model.property(position));
        self.invalidate(Invalidation::Relayout);
    }

    pub fn pending_invalidation(&self) -> Invalidation {
        self.pending
    }

    fn invalidate(&mut self, kind: Invalidation) -> Invalidation {
        self.pending = self.pending.max(kind);
        kind
    }

    /// Slots placed by the last layout pass, in draw order.
    pub fn attached(&self) -> &[ItemSlot] {
        &self.attached
    }

    /// Selects the items visible at the current offset.
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        let mut out = Vec::new();
        self.collect_visible_items(&mut out);
        out
    }

    /// Collects visible items into `out` (clears `out` first).
    pub fn collect_visible_items(&self, out: &mut Vec<VisibleItem>) {
        select_visible_into(
            &self.model,
            self.bounds,
            self.options.max_visible_item_count,
            self.draw_order(),
            out,
        );
    }

    fn draw_order(&self) -> DrawOrder {
        if self.options.bring_center_to_front {
            DrawOrder::NearestFirst(self.options.z_alignment)
        } else {
            DrawOrder::Position
        }
    }

    /// Runs a layout pass against `host`.
    ///
    /// Items that left the visible set are recycled; after a rebuild every previously attached
    /// item is recycled first. Visible items are then placed in draw order.
    pub fn layout(&mut self, host: &mut impl ItemHost) {
        let rebuild = self.pending == Invalidation::Rebuild;
        if rebuild {
            for slot in self.attached.drain(..) {
                host.recycle_item(slot);
            }
            self.item_size = None;
        }

        if self.count() == 0 {
            for slot in self.attached.drain(..) {
                host.recycle_item(slot);
            }
            self.pending = Invalidation::None;
            return;
        }

        let item_size = match self.item_size {
            Some(size) => size,
            None => {
                let size = host.measure_item(0);
                self.item_size = Some(size);
                size
            }
        };
        if self.options.radius.is_none() && self.resolved_radius.is_none() {
            pdebug!(radius = item_size.cross, "auto radius from item 0");
            self.resolved_radius = Some(item_size.cross);
        }

        let mut visible = core::mem::take(&mut self.scratch);
        self.collect_visible_items(&mut visible);

        for slot in &self.attached {
            if !visible.iter().any(|it| it.slot == *slot) {
                host.recycle_item(*slot);
            }
        }
        self.attached.clear();

        let shape = self.shape();
        for item in &visible {
            let transform = shape.transform(item.target_offset);
            let placed = PlacedItem {
                slot: item.slot,
                target_offset: item.target_offset,
                transform,
                frame: self.frame_for(item_size, transform),
            };
            host.place_item(&placed);
            self.attached.push(item.slot);
        }

        ptrace!(
            attached = self.attached.len(),
            offset = self.model.offset(),
            rebuild,
            "layout"
        );
        self.scratch = visible;
        self.pending = Invalidation::None;
    }

    fn frame_for(&self, item: ItemSize, transform: Transform) -> Frame {
        let space_main = (self.viewport.main - item.main) / 2.0;
        let space_cross = match self.options.distance_to_bottom {
            Some(distance) => self.viewport.cross - item.cross - distance,
            None => (self.viewport.cross - item.cross) / 2.0,
        };
        let (left, top, width, height) = match self.orientation() {
            Orientation::Horizontal => (
                space_main + transform.x,
                space_cross + transform.y,
                item.main,
                item.cross,
            ),
            Orientation::Vertical => (
                space_cross + transform.x,
                space_main + transform.y,
                item.cross,
                item.main,
            ),
        };
        Frame {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Returns a snapshot of the scroll position.
    pub fn save_state(&self) -> PagerState {
        PagerState {
            position: self.current_position(),
            offset: self.model.offset(),
            reverse_layout: self.model.is_reversed(),
        }
    }

    /// Restores a snapshot taken with [`Pager::save_state`].
    pub fn restore_state(&mut self, state: PagerState) {
        if state.reverse_layout != self.options.reverse_layout {
            self.options.reverse_layout = state.reverse_layout;
            self.invalidate(Invalidation::Rebuild);
        }
        // The snapshot's offset already carries the snapshot's layout direction.
        self.model = OffsetModel::new(
            self.model.interval(),
            self.model.count(),
            state.reverse_layout,
            self.model.is_infinite(),
        );
        self.model.set_offset(state.offset);
        self.invalidate(Invalidation::Relayout);
    }

    pub fn set_count(&mut self, count: usize) -> Invalidation {
        if self.model.count() == count {
            return Invalidation::None;
        }
        self.model.set_count(count);
        self.invalidate(Invalidation::Relayout)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Invalidation {
        if self.viewport == viewport {
            return Invalidation::None;
        }
        self.viewport = viewport;
        self.invalidate(Invalidation::Relayout)
    }

    /// Changes the radius. `None` re-derives it from item 0 on the next layout.
    pub fn set_radius(&mut self, radius: Option<f32>) -> Result<Invalidation, ConfigError> {
        if let Some(r) = radius {
            validate_radius(r)?;
        }
        if self.options.radius == radius {
            return Ok(Invalidation::None);
        }
        self.options.radius = radius;
        self.resolved_radius = radius;
        Ok(self.invalidate(Invalidation::Rebuild))
    }

    pub fn set_interval(&mut self, interval: f32) -> Result<Invalidation, ConfigError> {
        validate_interval(interval)?;
        if self.options.interval == interval {
            return Ok(Invalidation::None);
        }
        self.options.interval = interval;
        self.model.set_interval(interval);
        Ok(self.invalidate(Invalidation::Rebuild))
    }

    /// Changes the drag response. This only affects gesture conversion, never the layout.
    pub fn set_move_speed(&mut self, move_speed: f32) -> Result<Invalidation, ConfigError> {
        validate_move_speed(move_speed)?;
        self.options.move_speed = move_speed;
        Ok(Invalidation::None)
    }

    pub fn set_removal_bounds(
        &mut self,
        min_remove_offset: f32,
        max_remove_offset: f32,
    ) -> Result<Invalidation, ConfigError> {
        let bounds = RemovalBounds::new(min_remove_offset, max_remove_offset)?;
        if self.bounds == bounds {
            return Ok(Invalidation::None);
        }
        self.bounds = bounds;
        self.options.min_remove_offset = min_remove_offset;
        self.options.max_remove_offset = max_remove_offset;
        Ok(self.invalidate(Invalidation::Relayout))
    }

    pub fn set_max_remove_offset(
        &mut self,
        max_remove_offset: f32,
    ) -> Result<Invalidation, ConfigError> {
        self.set_removal_bounds(self.bounds.min_remove_offset, max_remove_offset)
    }

    pub fn set_min_remove_offset(
        &mut self,
        min_remove_offset: f32,
    ) -> Result<Invalidation, ConfigError> {
        self.set_removal_bounds(min_remove_offset, self.bounds.max_remove_offset)
    }

    /// Changes the gravity.
    ///
    /// Switching between a horizontal and a vertical gravity swaps the item axes, so the
    /// measurement (and an automatic radius) is thrown away and items are rebuilt.
    pub fn set_gravity(&mut self, gravity: Gravity) -> Invalidation {
        if self.options.gravity == gravity {
            return Invalidation::None;
        }
        let reoriented = self.options.gravity.orientation() != gravity.orientation();
        self.options.gravity = gravity;
        if !reoriented {
            return self.invalidate(Invalidation::Relayout);
        }
        pdebug!(?gravity, "orientation changed");
        self.item_size = None;
        if self.options.radius.is_none() {
            self.resolved_radius = None;
        }
        self.invalidate(Invalidation::Rebuild)
    }

    /// Sets the gravity from its raw constant (`Gravity::RAW_*`).
    pub fn set_gravity_raw(&mut self, raw: i32) -> Result<Invalidation, ConfigError> {
        let gravity = Gravity::try_from(raw)?;
        Ok(self.set_gravity(gravity))
    }

    pub fn set_flip_rotate(&mut self, flip_rotate: bool) -> Invalidation {
        if self.options.flip_rotate == flip_rotate {
            return Invalidation::None;
        }
        self.options.flip_rotate = flip_rotate;
        self.invalidate(Invalidation::Relayout)
    }

    pub fn set_z_alignment(&mut self, z_alignment: ZAlignment) -> Invalidation {
        if self.options.z_alignment == z_alignment {
            return Invalidation::None;
        }
        self.options.z_alignment = z_alignment;
        self.invalidate(Invalidation::Relayout)
    }

    /// Sets the z alignment from its raw constant (`ZAlignment::RAW_*`).
    pub fn set_z_alignment_raw(&mut self, raw: i32) -> Result<Invalidation, ConfigError> {
        let z_alignment = ZAlignment::try_from(raw)?;
        Ok(self.set_z_alignment(z_alignment))
    }

    pub fn set_reverse_layout(&mut self, reverse_layout: bool) -> Invalidation {
        if self.options.reverse_layout == reverse_layout {
            return Invalidation::None;
        }
        self.options.reverse_layout = reverse_layout;
        self.model.set_reverse(reverse_layout);
        self.invalidate(Invalidation::Rebuild)
    }

    pub fn set_max_visible_item_count(&mut self, max_visible: MaxVisible) -> Invalidation {
        if self.options.max_visible_item_count == max_visible {
            return Invalidation::None;
        }
        self.options.max_visible_item_count = max_visible;
        self.invalidate(Invalidation::Rebuild)
    }

    pub fn set_distance_to_bottom(&mut self, distance_to_bottom: Option<f32>) -> Invalidation {
        if self.options.distance_to_bottom == distance_to_bottom {
            return Invalidation::None;
        }
        self.options.distance_to_bottom = distance_to_bottom;
        self.invalidate(Invalidation::Rebuild)
    }

    pub fn set_infinite(&mut self, infinite: bool) -> Invalidation {
        if self.options.infinite == infinite {
            return Invalidation::None;
        }
        self.options.infinite = infinite;
        self.model.set_infinite(infinite);
        self.invalidate(Invalidation::Relayout)
    }

    pub fn set_bring_center_to_front(&mut self, enabled: bool) -> Invalidation {
        if self.options.bring_center_to_front == enabled {
            return Invalidation::None;
        }
        self.options.bring_center_to_front = enabled;
        self.invalidate(Invalidation::Relayout)
    }

    pub fn set_shape(&mut self, shape: ShapeKind) -> Invalidation {
        if self.options.shape == shape {
            return Invalidation::None;
        }
        self.options.shape = shape;
        self.invalidate(Invalidation::Rebuild)
    }

    /// Applies a whole new configuration, field by field.
    ///
    /// The options are validated first; on error nothing changes. Returns the strongest
    /// invalidation any changed field required.
    pub fn set_options(&mut self, options: PagerOptions) -> Result<Invalidation, ConfigError> {
        options.validate()?;
        let mut kind = Invalidation::None;
        kind = kind.max(self.set_shape(options.shape));
        kind = kind.max(self.set_radius(options.radius)?);
        kind = kind.max(self.set_interval(options.interval)?);
        kind = kind.max(self.set_move_speed(options.move_speed)?);
        kind = kind.max(
            self.set_removal_bounds(options.min_remove_offset, options.max_remove_offset)?,
        );
        kind = kind.max(self.set_gravity(options.gravity));
        kind = kind.max(self.set_flip_rotate(options.flip_rotate));
        kind = kind.max(self.set_z_alignment(options.z_alignment));
        kind = kind.max(self.set_reverse_layout(options.reverse_layout));
        kind = kind.max(self.set_max_visible_item_count(options.max_visible_item_count));
        kind = kind.max(self.set_distance_to_bottom(options.distance_to_bottom));
        kind = kind.max(self.set_infinite(options.infinite));
        kind = kind.max(self.set_bring_center_to_front(options.bring_center_to_front));
        ptrace!(?kind, "Pager::set_options");
        Ok(kind)
    }

    /// Clones the current options, applies `f`, then delegates to [`Pager::set_options`].
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut PagerOptions),
    ) -> Result<Invalidation, ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }
}
