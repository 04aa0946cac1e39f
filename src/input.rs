//! Keyboard mapping
//!
//! Host commands:
//!
//! | key | command |
//! |-----|---------|
//! | Escape | quit |
//! | `1`-`9` | select scene |
//! | Tab | cycle the active light |
//! | `g` / `p` / `b` | gouraud / phong / blinn shading |
//! | Up / Down | raise / lower terrain height scale |
//!
//! Everything else goes to the active scene, which moves lights:
//!
//! | key | axis | direction |
//! |-----|------|-----------|
//! | `a` / `d` | X | - / + |
//! | `f` / `r` | Y | - / + |
//! | `w` / `s` | Z | - / + |

use cgmath::Vector3;
use winit::keyboard::{Key, NamedKey};

/// Height scale change per arrow key press
pub const HEIGHT_SCALE_STEP: f32 = 0.1;

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    Quit,
    /// Zero-based; may be past the last scene
    SelectScene(usize),
    NextLight,
    Shading(&'static str),
    AdjustHeight(f32),
    /// Not a host key; offered to the active scene's keyboard hook
    Scene,
}

pub fn host_command(key: &Key) -> HostCommand {
    match key {
        Key::Named(NamedKey::Escape) => HostCommand::Quit,
        Key::Named(NamedKey::Tab) => HostCommand::NextLight,
        Key::Named(NamedKey::ArrowUp) => HostCommand::AdjustHeight(HEIGHT_SCALE_STEP),
        Key::Named(NamedKey::ArrowDown) => HostCommand::AdjustHeight(-HEIGHT_SCALE_STEP),
        Key::Character(character) => character_command(character.as_str()),
        _ => HostCommand::Scene,
    }
}

fn character_command(character: &str) -> HostCommand {
    match character {
        "g" => HostCommand::Shading("gouraud"),
        "p" => HostCommand::Shading("phong"),
        "b" => HostCommand::Shading("blinn"),
        _ => {
            let mut chars = character.chars();
            match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                (Some(digit), None) if digit > 0 => HostCommand::SelectScene(digit as usize - 1),
                _ => HostCommand::Scene,
            }
        }
    }
}

/// Unit offset for a single-character key, `None` for keys that don't move lights
pub fn light_direction(character: &str) -> Option<Vector3<f32>> {
    let direction = match character {
        "a" => Vector3::new(-1.0, 0.0, 0.0),
        "d" => Vector3::new(1.0, 0.0, 0.0),
        "f" => Vector3::new(0.0, -1.0, 0.0),
        "r" => Vector3::new(0.0, 1.0, 0.0),
        "w" => Vector3::new(0.0, 0.0, -1.0),
        "s" => Vector3::new(0.0, 0.0, 1.0),
        _ => return None,
    };
    Some(direction)
}

/// Offset a key press applies to the active light
pub fn light_nudge(key: &Key, step: f32) -> Option<Vector3<f32>> {
    match key {
        Key::Character(character) => light_direction(character.as_str()).map(|d| d * step),
        _ => None,
    }
}
