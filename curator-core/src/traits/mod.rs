pub mod embedding;
pub mod knowledge_store;

pub use embedding::IEmbeddingProvider;
pub use knowledge_store::IKnowledgeStore;
