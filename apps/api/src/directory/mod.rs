// Student directory: the static corpus, the instant substring filter, and
// detail-view resolution. Everything here is synchronous and I/O free.

pub mod catalog;
pub mod filter;
pub mod handlers;
pub mod resolver;
