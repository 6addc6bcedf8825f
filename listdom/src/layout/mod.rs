mod column;
mod rect;

pub use column::{layout, LayoutResult};
pub use rect::Rect;
