pub mod display;
pub mod kind;
pub mod node;
pub mod payload;
pub mod requirement;

pub use display::*;
pub use kind::*;
pub use node::*;
pub use payload::*;
pub use requirement::*;
