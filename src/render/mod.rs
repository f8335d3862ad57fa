pub mod axis;
pub mod canvas;
pub mod frame;
pub mod labels;
pub mod raster;
pub mod transform;

pub use canvas::{Canvas, Glyph};
pub use frame::{Renderer, render};
pub use raster::Connectors;
pub use transform::{Anchor, Cell, Transform};
