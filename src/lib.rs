#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod store;
pub mod stroke;
pub mod util;

pub use app::SketchApp;
pub use command::Command;
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use event::{BoardEvent, EventHandler};
pub use input::{GestureTracker, InputEvent, InputHandler};
pub use palette::{Background, PaletteColor};
pub use renderer::{RenderedPath, Renderer};
pub use store::StrokeStore;
pub use stroke::{Point, Stroke, StrokeId};
