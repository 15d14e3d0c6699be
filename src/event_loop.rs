use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use std::time::{Duration, Instant};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::GameConfig;
use crate::game::{GameState, TickResult};
use crate::input::{KeyAction, key_action};
use crate::log;
use crate::render;

/// Fires once per period; a late frame fires once, it does not catch up.
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, last: now }
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.period {
            self.last = now;
            return true;
        }
        false
    }

    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Instant of the next tick, for `ControlFlow::WaitUntil`.
    pub fn next_due(&self) -> Instant {
        self.last + self.period
    }
}

fn report_tick(game: &GameState, result: TickResult) {
    if result.score_delta > 0 {
        log::scalar(game.ticks(), "score", game.score() as i64);
    }
    if result.game_over {
        log::info(&format!(
            "game over after {} ticks ({:?}), final score {}",
            game.ticks(),
            game.collision(),
            game.score()
        ));
    }
}

pub fn run(config: GameConfig) -> Result<()> {
    let grid = config.grid();
    let mut ticker = Ticker::new(config.tick_period(), Instant::now());
    let mut game = GameState::new(config)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(render::title(&game.snapshot()))
        .with_inner_size(LogicalSize::new(grid.width as u32, grid.height as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("could not create window")?;

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(grid.width as u32, grid.height as u32, surface)
        .context("could not create pixel surface")?;

    log::info(&format!(
        "starting {}x{} board, {} ms per tick",
        grid.columns(),
        grid.rows(),
        game.config().tick_ms
    ));

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::RedrawRequested(_) => {
                render::draw(pixels.frame_mut(), &grid, &game.snapshot());
                if let Err(err) = pixels.render() {
                    log::error(&format!("render failed: {err}"));
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info("window closed");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match key_action(key) {
                    KeyAction::Turn(dir) => game.handle_direction(dir),
                    KeyAction::Restart if !game.is_running() => {
                        game.handle_restart();
                        ticker.reset(Instant::now());
                        log::info("restarted");
                        window.set_title(&render::title(&game.snapshot()));
                        window.request_redraw();
                    }
                    KeyAction::Quit => *control_flow = ControlFlow::Exit,
                    _ => {}
                },
                _ => {}
            },

            Event::MainEventsCleared => {
                // no ticks while over, only the restart key brings the game back
                if game.is_running() && ticker.due(Instant::now()) {
                    let result = game.tick();
                    report_tick(&game, result);
                    if result.score_delta > 0 || result.game_over {
                        window.set_title(&render::title(&game.snapshot()));
                    }
                    window.request_redraw();
                }
                // sleep until the next tick instead of spinning; keys wake the loop early
                if !matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
                    *control_flow = if game.is_running() {
                        ControlFlow::WaitUntil(ticker.next_due())
                    } else {
                        ControlFlow::Wait
                    };
                }
            }
            _ => {}
        }
    });
}
