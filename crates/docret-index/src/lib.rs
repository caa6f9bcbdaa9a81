pub mod vector;

pub use vector::{
    parse_record_key, record_key, MemoryVectorIndex, RecordMetadata, VectorMatch, VectorRecord,
};
