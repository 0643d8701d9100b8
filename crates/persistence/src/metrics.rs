//! Per-query duration metrics.
//!
//! Every repository method wraps its statement in a [`QueryTimer`] so
//! the `database_query_duration_seconds` histogram carries one series
//! per named query (`set_rsvp`, `event_response_counts`, ...).

use metrics::histogram;
use std::time::Instant;

/// Times one database round trip and records it on drop via [`QueryTimer::record`].
///
/// Query names are static so the label set stays bounded.
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Start timing the named query.
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to the query histogram.
    pub fn record(self) {
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}
