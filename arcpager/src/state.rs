/// A lightweight, serializable snapshot of a pager's scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    /// Backing index of the centered item when the snapshot was taken.
    pub position: usize,
    pub offset: f32,
    pub reverse_layout: bool,
}
