//! Grid metrics recorded through the `metrics` facade
//!
//! The library never installs a recorder; without one these calls are no-ops.

use ::metrics::{counter, describe_counter, describe_gauge, gauge};

/// Describe the grid metrics to whichever recorder is installed
pub fn describe_grid_metrics() {
    describe_gauge!("call_grid_tiles", "Number of streams shown in the call grid");
    describe_gauge!("call_grid_pages", "Number of pages the call grid spans");
    describe_gauge!(
        "call_grid_preview_visible",
        "1 when the self preview overlay is shown, else 0"
    );
    describe_counter!(
        "call_grid_page_changes_total",
        "Total number of page changes reported by the grid"
    );
}

/// Record the outcome of an arrangement
pub fn record_arrangement(tiles: usize, pages: usize, preview_visible: bool) {
    gauge!("call_grid_tiles").set(tiles as f64);
    gauge!("call_grid_pages").set(pages as f64);
    gauge!("call_grid_preview_visible").set(if preview_visible { 1.0 } else { 0.0 });
}

/// Record a page change
pub fn record_page_change(direction: &str) {
    counter!("call_grid_page_changes_total", "direction" => direction.to_string()).increment(1);
}
