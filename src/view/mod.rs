//! View layer - per-frame render pass
//!
//! [`render_frame`] is a pure function of the model: sequence order, drag
//! pointer, container, and animation progress go in, a [`DockFrame`] comes
//! out. Hosts call it after any update that returned a redraw command and on
//! every animation tick, then compose the result into pixels.

pub mod canvas;

pub use canvas::{blend_colors, Canvas};

use serde::Serialize;

use crate::model::{DockModel, ItemKey, Rect};

/// Produces the visual for one item. The core never looks inside `T`.
pub trait ItemRenderer<T> {
    type Visual;

    fn render(&self, item: &T) -> Self::Visual;
}

impl<T, V, F> ItemRenderer<T> for F
where
    F: Fn(&T) -> V,
{
    type Visual = V;

    fn render(&self, item: &T) -> V {
        self(item)
    }
}

/// One item as it should appear this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameItem<V> {
    /// Slot in display order
    pub index: usize,
    #[serde(skip)]
    pub key: ItemKey,
    pub visual: V,
    pub scale: f64,
    /// Vertical bounce offset; positive lifts the item
    pub offset: f64,
    /// Scaled tile bounds in global coordinates, anchored at the bottom centre
    /// of the nominal slot. `None` until the container is measured.
    pub bounds: Option<Rect>,
}

/// Everything a presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockFrame<V> {
    pub items: Vec<FrameItem<V>>,
    /// Slot of the dragged item, if a drag is active
    pub dragged: Option<usize>,
    /// True while the host should keep ticking
    pub animating: bool,
    pub container: Option<Rect>,
}

impl<V> DockFrame<V> {
    pub fn scales(&self) -> Vec<f64> {
        self.items.iter().map(|i| i.scale).collect()
    }
}

/// Build the frame for the current model state
pub fn render_frame<T, R>(model: &DockModel<T>, renderer: &R) -> DockFrame<R::Visual>
where
    R: ItemRenderer<T>,
{
    let offset = model.bounce_offset();
    let container = model.container.filter(|c| c.is_measured());

    let items = model
        .sequence
        .iter()
        .zip(model.sequence.keys())
        .enumerate()
        .map(|(index, (item, key))| {
            let scale = model.scale_at(index);
            FrameItem {
                index,
                key,
                visual: renderer.render(item),
                scale,
                offset,
                bounds: container.map(|c| tile_bounds(model, &c, index, scale, offset)),
            }
        })
        .collect();

    DockFrame {
        items,
        dragged: model.dragged_index(),
        animating: model.is_animating(),
        container,
    }
}

fn tile_bounds<T>(
    model: &DockModel<T>,
    container: &Rect,
    index: usize,
    scale: f64,
    offset: f64,
) -> Rect {
    let layout = &model.layout;
    let left = container.x + layout.padding + index as f64 * layout.step();
    let bottom = container.y + layout.padding + layout.item_size;
    let size = layout.item_size * scale;
    let center_x = left + layout.item_size / 2.0;
    Rect::new(center_x - size / 2.0, bottom - size - offset, size, size)
}
