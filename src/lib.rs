#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod painter_surface;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod surface;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::Command;
pub use config::PaintConfig;
pub use document::Document;
pub use error::{AppError, AppResult};
pub use gesture::Gesture;
pub use input::{InputEvent, InputHandler};
pub use renderer::{LivePath, Renderer};
pub use shape::{Bounds, Point, Shape, ShapeStyle};
pub use state::{DrawingState, ToolKind};
pub use surface::{StrokeStyle, Surface};
