/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod decoding;
pub mod filesystem;
pub mod formatters;
pub mod network;
mod routing_index_source;

pub use routing_index_source::RoutingIndexSource;
