//! Dock façade: model + item renderer behind one handle
//!
//! Hosts that don't want to drive `update` and `render_frame` separately
//! construct a [`Dock`] from their items, a renderer, and a config.

use std::rc::Rc;

use crate::animation::FrameClock;
use crate::commands::Cmd;
use crate::config::DockConfig;
use crate::error::Result;
use crate::messages::{AnimationMsg, LayoutMsg, Msg, PointerMsg};
use crate::model::{DockModel, Point, Rect};
use crate::update::update;
use crate::view::{render_frame, DockFrame, ItemRenderer};

pub struct Dock<T, R> {
    model: DockModel<T>,
    renderer: R,
}

impl<T, R> Dock<T, R>
where
    T: PartialEq,
    R: ItemRenderer<T>,
{
    pub fn new(items: Vec<T>, renderer: R, config: &DockConfig) -> Result<Self> {
        Ok(Self {
            model: DockModel::from_config(items, config)?,
            renderer,
        })
    }

    /// Press over `item`, located by equality. Unknown items are ignored.
    pub fn press_item(&mut self, item: &T, position: Point) -> Option<Cmd> {
        let index = self.model.sequence.position(item)?;
        self.dispatch(PointerMsg::Press { index, position })
    }
}

impl<T, R> Dock<T, R>
where
    R: ItemRenderer<T>,
{
    pub fn with_clock(mut self, clock: Rc<dyn FrameClock>) -> Self {
        self.model = self.model.with_clock(clock);
        self
    }

    pub fn model(&self) -> &DockModel<T> {
        &self.model
    }

    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> Option<Cmd> {
        update(&mut self.model, msg.into())
    }

    /// Hit-test a global point and press the item under it, if any
    pub fn press_at(&mut self, position: Point) -> Option<Cmd> {
        let index = self.model.item_at(position)?;
        self.dispatch(PointerMsg::Press { index, position })
    }

    pub fn move_to(&mut self, position: Point) -> Option<Cmd> {
        self.dispatch(PointerMsg::Move { position })
    }

    pub fn release(&mut self) -> Option<Cmd> {
        self.dispatch(PointerMsg::Release)
    }

    pub fn tick(&mut self) -> Option<Cmd> {
        self.dispatch(AnimationMsg::Tick)
    }

    pub fn measure(&mut self, container: Rect) -> Option<Cmd> {
        self.dispatch(LayoutMsg::ContainerMeasured(container))
    }

    /// Render pass for the current state
    pub fn frame(&self) -> DockFrame<R::Visual> {
        render_frame(&self.model, &self.renderer)
    }

    pub fn is_animating(&self) -> bool {
        self.model.is_animating()
    }

    /// Tear down, returning items in their final order
    pub fn into_items(self) -> Vec<T> {
        self.model.sequence.into_items()
    }
}
