pub mod abstraction;
pub use abstraction::*;

pub mod builder;
pub use builder::*;

pub mod node;
pub use node::*;

pub mod state;
pub use state::*;

pub mod transition;
pub use transition::*;
