//! Native window backend: a winit event loop presenting through a softbuffer surface

use crate::io::configuration::{Config, WINDOW_TITLE};
use crate::io::error::{Result, display_error};
use crate::render::canvas::Canvas;
use crate::render::frame::FrameRenderer;
use crate::render::recorder::GifRecorder;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

#[derive(Clone, Copy, Debug, Default)]
struct PumpOutcome {
    quit: bool,
    redraw: bool,
}

/// Presents frames in a fixed-size window
///
/// Every render presents synchronously, drains pending window events without
/// blocking, then sleeps for the configured delay. A quit request seen while
/// sorting is remembered and only honoured by [`WindowRenderer::wait_for_quit`].
pub struct WindowRenderer {
    // Fields drop in declaration order: the reverse of acquisition
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
    window: Rc<Window>,
    event_loop: EventLoop<()>,
    canvas: Canvas,
    surface_width: usize,
    delay: Duration,
    quit_requested: bool,
    recorder: Option<GifRecorder>,
}

impl WindowRenderer {
    /// Open a non-resizable window of `width * scale` by `height * scale` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop, window, surface context or surface
    /// cannot be created, or the surface cannot be sized to the window
    pub fn open(config: &Config) -> Result<Self> {
        let requested = config.surface_size();

        let event_loop =
            EventLoop::new().map_err(|e| display_error("event loop creation", &e))?;
        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(requested.0, requested.1))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(|e| display_error("window creation", &e))?;
        let window = Rc::new(window);

        let context = Context::new(Rc::clone(&window))
            .map_err(|e| display_error("surface context creation", &e))?;
        let mut surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| display_error("surface creation", &e))?;

        let actual = window.inner_size();
        let (width, height) = surface_dimensions((actual.width, actual.height), requested)?;
        surface
            .resize(width, height)
            .map_err(|e| display_error("surface scaling", &e))?;

        tracing::info!(
            width = width.get(),
            height = height.get(),
            "window opened"
        );

        Ok(Self {
            surface,
            _context: context,
            window,
            event_loop,
            canvas: Canvas::new(config.width() as usize, config.height() as usize),
            surface_width: width.get() as usize,
            delay: config.delay(),
            quit_requested: false,
            recorder: None,
        })
    }

    /// Capture presented frames into `recorder`
    #[must_use]
    pub fn with_recorder(mut self, recorder: Option<GifRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Whether a quit request arrived while sorting
    pub const fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Present the sorted array without highlights and hand back the recording
    ///
    /// The last rendered step can predate an algorithm's final swap, and a
    /// one-bar array renders no steps at all, so the settled `bars` are drawn
    /// here. Later redraws while waiting for quit show this frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be presented
    pub fn finish(&mut self, bars: &[i32]) -> Result<Option<GifRecorder>> {
        self.canvas.draw_bars(bars, None, None);
        self.present()?;

        let Some(mut recorder) = self.recorder.take() else {
            return Ok(None);
        };
        recorder.finish(&self.canvas);
        Ok(Some(recorder))
    }

    /// Block on window events until the window is closed or a quit key is pressed
    ///
    /// Returns immediately if a quit was already requested during the sort.
    /// The last frame is presented again whenever the window asks to be redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if a redraw cannot be presented
    pub fn wait_for_quit(&mut self) -> Result<()> {
        if self.quit_requested {
            return Ok(());
        }

        tracing::info!("waiting for the window to close");
        loop {
            let outcome = self.pump(None);
            if outcome.quit {
                return Ok(());
            }
            if outcome.redraw {
                self.present()?;
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| display_error("frame presentation", &e))?;
        self.canvas.blit_scaled(&mut buffer, self.surface_width);
        buffer
            .present()
            .map_err(|e| display_error("frame presentation", &e))
    }

    // `None` blocks until at least one event arrives
    fn pump(&mut self, timeout: Option<Duration>) -> PumpOutcome {
        let window_id = self.window.id();
        let mut outcome = PumpOutcome::default();

        let status = self.event_loop.pump_events(timeout, |event, _target| {
            if let Event::WindowEvent { window_id: id, event } = event
                && id == window_id
            {
                if is_quit_event(&event) {
                    outcome.quit = true;
                } else if matches!(event, WindowEvent::RedrawRequested) {
                    outcome.redraw = true;
                }
            }
        });

        if matches!(status, PumpStatus::Exit(_)) {
            outcome.quit = true;
        }
        outcome
    }
}

impl FrameRenderer for WindowRenderer {
    fn render(
        &mut self,
        bars: &[i32],
        primary: Option<usize>,
        secondary: Option<usize>,
    ) -> Result<()> {
        self.canvas.draw_bars(bars, primary, secondary);
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.capture(&self.canvas);
        }
        self.present()?;

        if self.pump(Some(Duration::ZERO)).quit && !self.quit_requested {
            self.quit_requested = true;
            tracing::info!("quit requested; exiting once sorting completes");
        }

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// Whether a window event asks the visualizer to exit
///
/// Window close, `Escape` and `Q` all quit.
pub fn is_quit_event(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => true,
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => matches!(code, KeyCode::Escape | KeyCode::KeyQ),
        _ => false,
    }
}

/// Surface size for a created window
///
/// Prefers the window's actual inner size, which the window manager may have
/// adjusted, and falls back to the requested size when a side reads as zero.
///
/// # Errors
///
/// Returns an error if neither size gives a non-zero side
pub fn surface_dimensions(
    actual: (u32, u32),
    requested: (u32, u32),
) -> Result<(NonZeroU32, NonZeroU32)> {
    let side = |actual: u32, requested: u32| {
        NonZeroU32::new(actual)
            .or_else(|| NonZeroU32::new(requested))
            .ok_or_else(|| display_error("surface scaling", &"window has a zero-sized side"))
    };
    Ok((side(actual.0, requested.0)?, side(actual.1, requested.1)?))
}
