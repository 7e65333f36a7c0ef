/// Rows per chunk handed to a single worker.
pub const DEFAULT_CHUNK_LIMIT: usize = 1000;

/// Number of workers, which is also the depth of the chunk queue.
pub const DEFAULT_CONCURRENCY: usize = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ImportConfig {
    pub chunk_limit: usize,
    pub concurrency: usize,
    /// Year applied to the `M/DD` dates found in the file.
    pub reference_year: i32
}

impl ImportConfig {
    pub fn new(reference_year: i32) -> Self {
        Self {
            chunk_limit: DEFAULT_CHUNK_LIMIT,
            concurrency: DEFAULT_CONCURRENCY,
            reference_year
        }
    }

    pub fn with_chunk_limit(mut self, chunk_limit: usize) -> Self {
        self.chunk_limit = chunk_limit.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }
}
