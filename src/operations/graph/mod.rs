mod build;
mod connect;

pub use build::BuildEdgeGraph;
pub(crate) use connect::connect_edges;
