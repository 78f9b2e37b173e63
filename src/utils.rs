//! Utility functions for common operations.

/// Format a simulated latency in milliseconds for the race panel.
///
/// Whole milliseconds above 100ms nominal scale would read noisy, so the
/// slow lane shows whole ms and the fast lane one decimal, matching the
/// panel labels ("97ms" vs "12.3ms").
pub fn format_latency(ms: f64, decimals: usize) -> String {
    format!("{:.*}ms", decimals, ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_latency_whole() {
        assert_eq!(format_latency(0.0, 0), "0ms");
        assert_eq!(format_latency(96.6, 0), "97ms");
    }

    #[test]
    fn test_format_latency_one_decimal() {
        assert_eq!(format_latency(12.34, 1), "12.3ms");
        assert_eq!(format_latency(15.0, 1), "15.0ms");
    }
}
