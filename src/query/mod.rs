// Sat Aug 29 2026 - Alex

pub mod engine;

pub use engine::{QueryEngine, QueryError, QueryOutcome, QueryRequest};
