use crate::grid::Direction;
use winit::event::VirtualKeyCode;

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    SpeedUp,
    SpeedDown,
    Quit,
}

impl Command {
    pub fn from_key(key: VirtualKeyCode) -> Option<Command> {
        let cmd = match key {
            VirtualKeyCode::Up | VirtualKeyCode::W => Command::Turn(Direction::Up),
            VirtualKeyCode::Down | VirtualKeyCode::S => Command::Turn(Direction::Down),
            VirtualKeyCode::Left | VirtualKeyCode::A => Command::Turn(Direction::Left),
            VirtualKeyCode::Right | VirtualKeyCode::D => Command::Turn(Direction::Right),
            VirtualKeyCode::Plus | VirtualKeyCode::Equals | VirtualKeyCode::NumpadAdd => Command::SpeedUp,
            VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => Command::SpeedDown,
            VirtualKeyCode::Escape => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}
