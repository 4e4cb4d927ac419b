//! Skyhop - a toy flight simulator over a procedurally scattered valley.

mod config;
mod events;
mod hud;
mod state;

use anyhow::Result;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

pub use state::GameState;

struct App {
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = config::GameConfig::load();
            let window_attrs = Window::default_attributes()
                .with_title(state::WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let state = GameState::new(window.clone(), &config);
            log::debug!("{} scenery entities ready", state.scenery().len());
            self.state = Some(state);
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════════╗");
    println!("║                    Skyhop                      ║");
    println!("╠════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                     ║");
    println!("║    W      - Throttle up   |  S     - Brake     ║");
    println!("║    A      - Roll left     |  D     - Roll right║");
    println!("║    Space  - Pitch up      |  Shift - Pitch down║");
    println!("║    Escape - Quit                               ║");
    println!("╠════════════════════════════════════════════════╣");
    println!("║  Banking turns the aircraft. Touching the      ║");
    println!("║  ground crashes it; it respawns on the runway. ║");
    println!("╚════════════════════════════════════════════════╝");

    log::info!("Starting Skyhop");

    let event_loop = EventLoop::new()?;
    // Poll so ticks keep flowing even without window events.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
