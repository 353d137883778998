//! Structural entities stored in the model pools

mod element;
mod fixity;
mod node;
mod section;

pub use element::{Element, ElementKind};
pub use fixity::Fixity;
pub use node::Node;
pub use section::{FrameSection, MaterialKind, WallSection, WALL_ROW_LEN};
