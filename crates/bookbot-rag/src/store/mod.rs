//! Vector store implementations

mod local;
mod qdrant;

pub use local::LocalVectorStore;
pub use qdrant::QdrantVectorStore;
