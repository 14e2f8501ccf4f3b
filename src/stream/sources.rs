mod empty;
mod from_fn;
mod of;
mod transitive;

pub use empty::*;
pub use from_fn::*;
pub use of::*;
pub use transitive::*;
