//! Snake on a wrap-around grid: the game rules, timing and a framebuffer
//! renderer. The window shell lives in `main.rs`.

pub mod config;
pub mod draw;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod timing;
