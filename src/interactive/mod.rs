//! Interactive terminal interface
//!
//! Full-screen ratatui front end with menus, rounds and a countdown.

mod app;
mod rendering;

pub use app::{App, Conclusion, MENU, MenuItem, Message, MessageStyle, Screen, Statistics, run_tui};
