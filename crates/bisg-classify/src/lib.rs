pub mod reducer;
pub mod resolver;

pub use reducer::{TIE_BREAK_PRIORITY, reduce, reduce_raw};
pub use resolver::{CodeResolver, ResolverOptions};
