//! Dock model - the complete interaction state
//!
//! This module contains the state types following the Elm Architecture
//! pattern. Mutation happens only in `crate::update`.

pub mod drag;
pub mod layout;
pub mod sequence;

pub use drag::DragSession;
pub use layout::{DockLayout, Point, Rect};
pub use sequence::{ItemKey, Reordered, Sequence};

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::animation::{BounceAnimation, FrameClock, SystemClock};
use crate::config::DockConfig;
use crate::error::Result;
use crate::geometry;

/// The complete dock state
pub struct DockModel<T> {
    /// Items in display order
    pub sequence: Sequence<T>,
    /// Live pointer state
    pub drag: DragSession,
    /// Immutable layout parameters
    pub layout: DockLayout,
    /// Measured container bounds in global coordinates, `None` until sized
    pub container: Option<Rect>,
    /// Settle/bounce animation
    pub animation: BounceAnimation,
    clock: Rc<dyn FrameClock>,
}

impl<T: fmt::Debug> fmt::Debug for DockModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockModel")
            .field("sequence", &self.sequence)
            .field("drag", &self.drag)
            .field("layout", &self.layout)
            .field("container", &self.container)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> DockModel<T> {
    /// Create a model with default animation and the system clock
    pub fn new(items: Vec<T>, layout: DockLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            sequence: Sequence::new(items)?,
            drag: DragSession::default(),
            layout,
            container: None,
            animation: BounceAnimation::default(),
            clock: Rc::new(SystemClock),
        })
    }

    /// Create a model from a loaded configuration
    pub fn from_config(items: Vec<T>, config: &DockConfig) -> Result<Self> {
        let mut model = Self::new(items, config.layout)?;
        model.animation = BounceAnimation::new(
            Duration::from_millis(config.animation.duration_ms),
            config.animation.amplitude,
            config.animation.easing,
        );
        Ok(model)
    }

    /// Scale of `item`, located by equality. Unknown items stay at base scale.
    pub fn item_scale(&self, item: &T) -> f64 {
        geometry::compute_item_scale(
            self.sequence.position(item),
            self.drag.active_pointer(),
            self.container.as_ref(),
            &self.layout,
        )
    }
}

impl<T> DockModel<T> {
    /// Replace the time source, e.g. with a `ManualClock` in tests
    pub fn with_clock(mut self, clock: Rc<dyn FrameClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_animation(mut self, animation: BounceAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Current frame time from the injected clock
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// The item currently being dragged
    pub fn dragged_item(&self) -> Option<&T> {
        self.drag
            .dragged
            .and_then(|key| self.sequence.item_by_key(key))
    }

    /// Current slot of the dragged item
    pub fn dragged_index(&self) -> Option<usize> {
        self.drag
            .dragged
            .and_then(|key| self.sequence.position_of_key(key))
    }

    /// Scale of the item at slot `index`
    pub fn scale_at(&self, index: usize) -> f64 {
        let index = (index < self.sequence.len()).then_some(index);
        geometry::compute_item_scale(
            index,
            self.drag.active_pointer(),
            self.container.as_ref(),
            &self.layout,
        )
    }

    /// Scales for every item, in display order
    pub fn item_scales(&self) -> Vec<f64> {
        (0..self.sequence.len()).map(|i| self.scale_at(i)).collect()
    }

    /// Bounce offset shared by every item this frame
    pub fn bounce_offset(&self) -> f64 {
        self.animation.offset()
    }

    /// Pointer position in local content coordinates, if measurable
    pub fn local_pointer(&self) -> Option<Point> {
        let pointer = self.drag.pointer?;
        let container = self.container.as_ref().filter(|c| c.is_measured())?;
        Some(geometry::to_local(pointer, container, &self.layout))
    }

    /// Slot under a global point, by nominal bounds
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let container = self.container.as_ref().filter(|c| c.is_measured())?;
        let local = geometry::to_local(point, container, &self.layout);
        geometry::hit_test_item(local, &self.layout, self.sequence.len())
    }
}
