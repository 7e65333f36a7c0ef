//! Chunked, concurrent import of delimited transaction files.
//!
//! A producer splits the input into fixed-size chunks, a fixed pool of workers parses
//! each chunk and hands the resulting batch to a [`storage::BatchSink`], and once every
//! worker has drained the [`events::EVENT_IMPORTED`] event is dispatched.

pub mod engine;
pub mod events;
pub mod models;
pub mod readers;
pub mod storage;
pub mod types;
