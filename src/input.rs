use winit::event::VirtualKeyCode;

use crate::snake::Direction;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Arrow keys and WASD steer, R restarts, Escape or Q quits.
pub fn key_action(key: VirtualKeyCode) -> KeyAction {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => KeyAction::Turn(Direction::Up),
        VirtualKeyCode::Down | VirtualKeyCode::S => KeyAction::Turn(Direction::Down),
        VirtualKeyCode::Left | VirtualKeyCode::A => KeyAction::Turn(Direction::Left),
        VirtualKeyCode::Right | VirtualKeyCode::D => KeyAction::Turn(Direction::Right),
        VirtualKeyCode::R => KeyAction::Restart,
        VirtualKeyCode::Escape | VirtualKeyCode::Q => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
