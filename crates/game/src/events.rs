//! Window event handling for GameState.

use winit::event::WindowEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

impl crate::GameState {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.sim
                    .camera_mut()
                    .lens
                    .set_aspect(size.width, size.height);
                false
            }
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never reach us.
                self.input.clear();
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        self.running = false;
                        return true;
                    }
                    self.input.process_keyboard(key, event.state);
                }
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.window.request_redraw();
                false
            }
            _ => false,
        }
    }
}
