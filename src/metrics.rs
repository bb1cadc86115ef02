use prometheus::{register_counter, register_histogram, Counter, Histogram};

// Defines Prometheus metrics for monitoring the block fetch layer
lazy_static::lazy_static! {
    // Counter for the total number of blocks fetched and assembled
    pub static ref BLOCKS_FETCHED: Counter = register_counter!(
        "roundbus_blocks_fetched_total",
        "Total blocks fetched and assembled"
    ).unwrap();

    // Counter for transaction search pages retrieved during pagination
    pub static ref TX_PAGES_FETCHED: Counter = register_counter!(
        "roundbus_tx_pages_fetched_total",
        "Total paginated transaction pages retrieved"
    ).unwrap();

    // Counter for lookahead cache hits during block fetches
    pub static ref LOOKAHEAD_HITS: Counter = register_counter!(
        "roundbus_lookahead_hits_total",
        "Block fetches served from the lookahead cache"
    ).unwrap();

    // Histogram for batch fetch duration in seconds
    pub static ref BLOCK_FETCH_TIME: Histogram = register_histogram!(
        "roundbus_block_fetch_seconds",
        "Batch block fetch time in seconds"
    ).unwrap();
}

// Renders all registered metrics in the Prometheus text format; the host
// framework owns the exposition endpoint
pub fn gather() -> String {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode_to_string(&metric_families).unwrap_or_default()
}
