//! Read-only renderers for the Morse tree.
//!
//! Everything here works through [`MorseNodeView`] and never touches the
//! tree's mutation API:
//! - [`TreeLayout`] positions nodes and edges on a canvas, and can be written
//!   out as SVG or serialized as JSON.
//! - [`outline`] prints an indented text view for terminals.
//!
//! [`MorseNodeView`]: crate::data_structures::MorseNodeView

mod layout;
mod outline;
mod svg;

pub use crate::data_structures::morse_tree::subtree_height as height;
pub use layout::{canvas_size, LayoutEdge, LayoutNode, TreeLayout};
pub use outline::outline;
pub use svg::SvgDocument;
