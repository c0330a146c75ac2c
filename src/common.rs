/// Formats a byte count for humans, e.g. `16.00 KB`.
pub fn bytes2hr(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else if value < KB * KB {
        format!("{:.2} KB", value / KB)
    } else if value < KB * KB * KB {
        format!("{:.2} MB", value / (KB * KB))
    } else {
        format!("{:.2} GB", value / (KB * KB * KB))
    }
}

/// Formats a duration in seconds with millisecond resolution.
pub fn secs2hr(secs: f64) -> String {
    if secs < 1.0 {
        format!("{:.2} ms", secs * 1000.0)
    } else {
        format!("{secs:.2} s")
    }
}
