//! Git adapters for the repository ports

mod repository;
mod tree;

pub use repository::GitRepository;
pub use tree::GitTree;
