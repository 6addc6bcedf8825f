pub mod document;
pub mod drag;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod surface;
pub mod text;
pub mod types;

pub use document::Document;
pub use drag::{DragConfig, DragController, DragSession, ItemMoved};
pub use element::{Content, Element};
pub use error::DomError;
pub use event::{Modifiers, MouseButton, PointerEvent, PointerKind};
pub use hit::{closest_with_class, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use surface::{ListenerGuard, ListenerId, PointerSurface};
pub use types::*;
