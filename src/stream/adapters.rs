mod cloned;
mod copied;
mod distinct;
mod drop_first;
mod drop_while;
mod filter;
mod filter_map;
mod fmap;
mod indexed;
mod inspect;
mod limit;
mod map;
mod peekable;
mod take_while;
mod then;
mod up_through;
mod up_to;
mod zip;
#[cfg(feature = "itertools")]
mod zip_either;
mod zip_long;

pub use cloned::*;
pub use copied::*;
pub use distinct::*;
pub use drop_first::*;
pub use drop_while::*;
pub use filter::*;
pub use filter_map::*;
pub use fmap::*;
pub use indexed::*;
pub use inspect::*;
pub use limit::*;
pub use map::*;
pub use peekable::*;
pub use take_while::*;
pub use then::*;
pub use up_through::*;
pub use up_to::*;
pub use zip::*;
#[cfg(feature = "itertools")]
pub use zip_either::*;
pub use zip_long::*;
