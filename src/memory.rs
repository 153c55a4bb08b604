//! A small resident-set-size probe used by the REPL to report the
//! build-time memory delta. No crate in the example corpus pulls in a
//! memory-stats dependency for this, so this reads `/proc/self/statm`
//! directly and degrades to `None` off Linux rather than failing.

/// Current resident set size in bytes, or `None` if it cannot be
/// determined (non-Linux, or `/proc` unavailable).
pub fn resident_set_size() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let contents = std::fs::read_to_string("/proc/self/statm").ok()?;
        let pages: u64 = contents.split_whitespace().nth(1)?.parse().ok()?;
        let page_size = 4096u64;
        Some(pages * page_size)
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Measure the memory delta (in bytes) incurred by calling `f`. Returns
/// `None` if the probe is unavailable on this platform.
pub fn measure_delta<T>(f: impl FnOnce() -> T) -> (T, Option<i64>) {
    let before = resident_set_size();
    let result = f();
    let after = resident_set_size();
    let delta = match (before, after) {
        (Some(b), Some(a)) => Some(a as i64 - b as i64),
        _ => None,
    };
    (result, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_delta_returns_the_closure_result() {
        let (value, _delta) = measure_delta(|| 2 + 2);
        assert_eq!(value, 4);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn resident_set_size_is_positive_on_linux() {
        assert!(resident_set_size().unwrap_or(0) > 0);
    }
}
