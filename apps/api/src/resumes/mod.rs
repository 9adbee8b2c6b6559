// Resume persistence: save, fetch and list plain JSON resume documents.
// The store is a trait so handlers never touch the filesystem directly.

pub mod handlers;
pub mod store;
