use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use magdock::cli::StartupConfig;
use magdock::commands::Cmd;
use magdock::config::StyleConfig;
use magdock::geometry::preferred_size;
use magdock::model::Rect;
use magdock::view::Canvas;
use magdock::Dock;

use super::mouse::{handle_cursor_moved, handle_mouse_input, PointerTracker};
use super::paint::paint_frame;

/// Gap between the dock and the bottom edge of the window
const BOTTOM_MARGIN: f64 = 24.0;

const PALETTE: [u32; 12] = [
    0xFFE06C75, 0xFFE5C07B, 0xFF98C379, 0xFF56B6C2, 0xFF61AFEF, 0xFFC678DD, 0xFFD19A66,
    0xFFBE5046, 0xFF7EC699, 0xFF4FA6ED, 0xFFEF8D5F, 0xFFA0A1A7,
];

/// A demo dock item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile(pub usize);

fn tile_color(tile: &Tile) -> u32 {
    PALETTE[tile.0 % PALETTE.len()]
}

type TileDock = Dock<Tile, fn(&Tile) -> u32>;

struct Graphics {
    window: Rc<Window>,
    // Must outlive the surface
    _context: Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

pub struct App {
    dock: TileDock,
    style: StyleConfig,
    graphics: Option<Graphics>,
    pointer: PointerTracker,
    /// Keep polling for frames while the settle animation runs
    animating: bool,
}

impl App {
    pub fn new(startup: StartupConfig) -> Result<Self> {
        let tiles = (0..startup.item_count).map(Tile).collect();
        let renderer: fn(&Tile) -> u32 = tile_color;
        let dock = Dock::new(tiles, renderer, &startup.dock).context("Failed to build dock")?;
        Ok(Self {
            dock,
            style: startup.dock.style,
            graphics: None,
            pointer: PointerTracker::default(),
            animating: false,
        })
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = preferred_size(&self.dock.model().layout, self.dock.model().len());
        let window_attributes = Window::default_attributes()
            .with_title("magdock")
            .with_inner_size(LogicalSize::new(
                (width + 2.0 * BOTTOM_MARGIN).max(480.0),
                (height * 2.5 + BOTTOM_MARGIN).max(240.0),
            ));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        self.graphics = Some(Graphics {
            window,
            _context: context,
            surface,
        });
        if let Some(cmd) = self.measure_container() {
            self.process_cmd(&cmd);
        }
        Ok(())
    }

    /// Centre the dock horizontally, near the bottom of the window
    fn measure_container(&mut self) -> Option<Cmd> {
        let graphics = self.graphics.as_ref()?;
        let size = graphics.window.inner_size();
        let scale_factor = graphics.window.scale_factor();
        let win_w = size.width as f64 / scale_factor;
        let win_h = size.height as f64 / scale_factor;

        let (w, h) = preferred_size(&self.dock.model().layout, self.dock.model().len());
        let container = Rect::new((win_w - w) / 2.0, win_h - h - BOTTOM_MARGIN, w, h);
        self.dock.measure(container)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        let scale_factor = self.graphics.as_ref()?.window.scale_factor();
        match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.measure_container()
            }
            WindowEvent::CursorMoved { position, .. } => {
                handle_cursor_moved(&mut self.dock, &mut self.pointer, *position, scale_factor)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                handle_mouse_input(&mut self.dock, &mut self.pointer, *state, *button)
            }
            WindowEvent::Focused(false) if self.pointer.left_down => {
                // Release may never arrive once focus is gone
                self.pointer.left_down = false;
                self.dock.release()
            }
            _ => None,
        }
    }

    fn process_cmd(&mut self, cmd: &Cmd) {
        if cmd.wants_frames() {
            self.animating = true;
        }
        if cmd.needs_redraw() {
            if let Some(graphics) = &self.graphics {
                graphics.window.request_redraw();
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let frame = self.dock.frame();
        let Some(graphics) = &mut self.graphics else {
            return Ok(());
        };

        let size = graphics.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        graphics
            .surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = graphics
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        let scale_factor = graphics.window.scale_factor();
        let mut canvas = Canvas::new(&mut buffer, size.width as usize, size.height as usize);
        paint_frame(&mut canvas, &frame, &self.style, scale_factor);

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_none() {
            if let Err(e) = self.init_graphics(event_loop) {
                tracing::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let is_ours = self
            .graphics
            .as_ref()
            .is_some_and(|g| g.window.id() == window_id);
        if !is_ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
            }
            event => {
                if let Some(cmd) = self.handle_event(&event) {
                    self.process_cmd(&cmd);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.animating {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        match self.dock.tick() {
            Some(cmd) => {
                self.animating = cmd.wants_frames();
                self.process_cmd(&cmd);
            }
            None => self.animating = false,
        }
    }
}
