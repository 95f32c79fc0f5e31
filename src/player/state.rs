use log::debug;

use crate::engine::reveal::FRAME_PERIOD;
use crate::types::{FieldKind, FrameInput, PointerState, SurfaceBox};

/// Everything that changes between frames. Owned by the host and handed to
/// the engine as a snapshot each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    pub frame: u32,
    pub field: FieldKind,
    pub pointer: PointerState,
}

impl AnimationState {
    pub fn new(field: FieldKind) -> Self {
        AnimationState {
            field,
            ..Default::default()
        }
    }

    /// Advance one display refresh. Wrapping restarts the message reveal.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAME_PERIOD;
    }

    /// A click anywhere on the surface selects the next field.
    pub fn click(&mut self) {
        self.field = self.field.next();
        debug!("field -> {}", self.field);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn pointer_pressed(&mut self) {
        self.pointer.pressed = true;
    }

    pub fn pointer_released(&mut self) {
        self.pointer.pressed = false;
    }

    pub fn frame_input(&self, surface: Option<SurfaceBox>) -> FrameInput {
        FrameInput {
            frame: self.frame,
            field: self.field,
            pointer: self.pointer,
            surface,
        }
    }
}
