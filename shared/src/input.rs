use crate::collision::{Vec2, Vec3};

/// Held state of the movement keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Fly up (noclip only).
    pub up: bool,
    /// Fly down (noclip only).
    pub down: bool,
    pub sprint: bool,
}

/// Everything the core consumes from the input collaborator for one frame.
///
/// Sampled once at the start of the frame; nothing is buffered across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Frame delta time (seconds).
    pub dt: f32,
    /// Pointer movement since last frame (screen units, +Y is down).
    pub pointer_delta: Vec2,
    pub keys: MoveKeys,
    /// Jump key went down this frame.
    pub jump_pressed: bool,
    /// Noclip toggle key went down this frame.
    pub toggle_noclip_pressed: bool,
}

impl FrameInput {
    /// A frame with no input at all, only elapsed time.
    pub fn idle(dt: f32) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }
}

/// Sum the unit contributions of the held keys and normalize.
///
/// `up` is only consulted when `vertical` is true. Opposing keys cancel; a zero sum stays zero.
pub fn move_intent(keys: &MoveKeys, forward: Vec3, right: Vec3, vertical: bool) -> Vec3 {
    let mut dir = Vec3::zeros();

    if keys.forward {
        dir += forward;
    }
    if keys.back {
        dir -= forward;
    }
    if keys.left {
        dir -= right;
    }
    if keys.right {
        dir += right;
    }
    if vertical {
        if keys.up {
            dir += Vec3::y();
        }
        if keys.down {
            dir -= Vec3::y();
        }
    }

    if dir.norm_squared() > 0.0 {
        dir.normalize()
    } else {
        dir
    }
}
