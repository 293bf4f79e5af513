pub mod catalog;
pub mod extraction;
pub mod loco;
pub mod resolution;
pub mod snapshot;
pub mod suggestion;

pub use catalog::*;
pub use extraction::*;
pub use loco::*;
pub use resolution::*;
pub use snapshot::*;
pub use suggestion::*;
