/// SQLite pool ownership and migrations
pub mod connection;
/// Eagerly loaded channel -> package -> course -> chapter graphs
pub mod graph;
/// Row types and per-table queries
pub mod models;
/// Demo and fixture rows for empty databases
pub mod seed;
/// The data access seam used by the course link pipeline
pub mod store;
