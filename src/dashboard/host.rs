//! Host memory and uptime snapshot.

use std::fs;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Host metrics shown on the dashboard. Not part of the history.
///
/// Figures come from Linux procfs. On other platforms every field is zero
/// and the dashboard shows `0.00`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostMetrics {
    pub free_mem_gb: f64,
    pub total_mem_gb: f64,
    pub uptime_hours: f64,
}

impl HostMetrics {
    /// Read the current snapshot from `/proc/meminfo` and `/proc/uptime`.
    ///
    /// Unavailable values are reported as zero.
    pub fn collect() -> Self {
        if !cfg!(target_os = "linux") {
            tracing::debug!("Host metrics need procfs, reporting zero");
            return Self::default();
        }

        let (free_mem_gb, total_mem_gb) = match fs::read_to_string("/proc/meminfo") {
            Ok(raw) => parse_meminfo(&raw).unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "Memory stats unavailable");
                (0.0, 0.0)
            }
        };

        let uptime_hours = match fs::read_to_string("/proc/uptime") {
            Ok(raw) => parse_uptime(&raw).unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "Uptime unavailable");
                0.0
            }
        };

        Self {
            free_mem_gb,
            total_mem_gb,
            uptime_hours,
        }
    }

    pub fn used_mem_gb(&self) -> f64 {
        (self.total_mem_gb - self.free_mem_gb).max(0.0)
    }

    pub fn used_display(&self) -> String {
        format!("{:.2}", self.used_mem_gb())
    }

    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total_mem_gb)
    }

    pub fn uptime_display(&self) -> String {
        format!("{:.2}", self.uptime_hours)
    }
}

/// Parse `/proc/meminfo` into (free, total) GiB.
///
/// Prefers `MemAvailable` over `MemFree` for the free figure.
pub fn parse_meminfo(raw: &str) -> Option<(f64, f64)> {
    let field = |name: &str| -> Option<f64> {
        raw.lines()
            .find_map(|line| line.strip_prefix(name)?.strip_prefix(':'))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|kb| kb.parse::<f64>().ok())
            .map(|kb| kb * 1024.0 / GIB)
    };

    let total = field("MemTotal")?;
    let free = field("MemAvailable").or_else(|| field("MemFree"))?;
    Some((free, total))
}

/// Parse `/proc/uptime` into hours.
pub fn parse_uptime(raw: &str) -> Option<f64> {
    raw.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .map(|secs| secs / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:       16777216 kB\nMemFree:         1048576 kB\nMemAvailable:    4194304 kB\n";

    #[test]
    fn test_parse_meminfo_prefers_available() {
        let (free, total) = parse_meminfo(MEMINFO).unwrap();
        assert_eq!(total, 16.0);
        assert_eq!(free, 4.0);
    }

    #[test]
    fn test_parse_meminfo_falls_back_to_free() {
        let (free, _) = parse_meminfo("MemTotal: 2097152 kB\nMemFree: 1048576 kB\n").unwrap();
        assert_eq!(free, 1.0);
    }

    #[test]
    fn test_parse_meminfo_missing_total() {
        assert!(parse_meminfo("MemFree: 1 kB\n").is_none());
    }

    #[test]
    fn test_parse_uptime() {
        assert_eq!(parse_uptime("7200.00 1234.56\n"), Some(2.0));
        assert_eq!(parse_uptime(""), None);
    }

    #[test]
    fn test_collect_is_never_negative() {
        let host = HostMetrics::collect();
        for value in [host.free_mem_gb, host.total_mem_gb, host.uptime_hours] {
            assert!(value.is_finite() && value >= 0.0);
        }
        assert!(host.used_mem_gb() <= host.total_mem_gb);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_collect_reads_procfs_on_linux() {
        let host = HostMetrics::collect();
        assert!(host.total_mem_gb > 0.0);
        assert!(host.uptime_hours > 0.0);
    }

    #[test]
    fn test_displays() {
        let host = HostMetrics {
            free_mem_gb: 4.0,
            total_mem_gb: 16.0,
            uptime_hours: 2.5,
        };
        assert_eq!(host.used_display(), "12.00");
        assert_eq!(host.total_display(), "16.00");
        assert_eq!(host.uptime_display(), "2.50");
    }
}
