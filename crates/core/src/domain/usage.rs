use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Fields a stat line must carry to reach `stime`
pub const MIN_STAT_FIELDS: usize = 15;

// Zero-based field positions in /proc/<pid>/stat
const UTIME_FIELD: usize = 13;
const STIME_FIELD: usize = 14;

/// CPU time consumed by a process, in clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcStat {
    pub utime: u64,
    pub stime: u64,
}

impl ProcStat {
    /// Parse a single `/proc/<pid>/stat` line.
    ///
    /// The command name in field 2 is wrapped in parentheses and may itself
    /// contain spaces or `)`, so fields are counted from the last `)`.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (skipped, tail) = match line.rfind(')') {
            Some(end) => (2, &line[end + 1..]),
            None => (0, line),
        };

        let tokens: Vec<&str> = tail.split_whitespace().collect();
        let total = skipped + tokens.len();
        if total < MIN_STAT_FIELDS {
            return Err(CoreError::StatFormat {
                got: total,
                need: MIN_STAT_FIELDS,
            });
        }

        let field = |index: usize, name: &'static str| -> Result<u64> {
            let raw = tokens[index - skipped];
            raw.parse::<u64>().map_err(|source| CoreError::StatParse {
                field: name,
                value: raw.to_string(),
                source,
            })
        };

        Ok(Self {
            utime: field(UTIME_FIELD, "utime")?,
            stime: field(STIME_FIELD, "stime")?,
        })
    }

    /// User plus system time
    pub fn total(&self) -> u64 {
        self.utime.saturating_add(self.stime)
    }
}

/// CPU usage percentage, clamped to 0..=100
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct CpuUsage(f64);

impl CpuUsage {
    pub const IDLE: CpuUsage = CpuUsage(0.0);

    pub fn from_ticks(cpu_ticks: u64, elapsed_ticks: u64) -> Self {
        if elapsed_ticks == 0 {
            return Self::IDLE;
        }
        let usage = 100.0 * cpu_ticks as f64 / elapsed_ticks as f64;
        Self(usage.clamp(0.0, 100.0))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for CpuUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "12345 (node) S 1 12345 12345 0 -1 4194560 2154 0 0 0 731 204 0 0 20 0 11 0 8794 1103486976 13000 18446744073709551615";

    #[test]
    fn test_parse_proc_stat() {
        let stat = ProcStat::parse(SAMPLE).unwrap();
        assert_eq!(stat.utime, 731);
        assert_eq!(stat.stime, 204);
        assert_eq!(stat.total(), 935);
    }

    #[test]
    fn test_parse_command_with_spaces_and_parens() {
        let line = "42 (my app) (x)) R 1 42 42 0 -1 0 0 0 0 0 17 3 0 0 20 0 1 0 100";
        let stat = ProcStat::parse(line).unwrap();
        assert_eq!(stat, ProcStat { utime: 17, stime: 3 });
    }

    #[test]
    fn test_parse_without_command_field() {
        // Fields counted straight through when there is no ')'
        let line = "1 app S 1 1 1 0 -1 0 0 0 0 0 5 6";
        let stat = ProcStat::parse(line).unwrap();
        assert_eq!(stat, ProcStat { utime: 5, stime: 6 });
    }

    #[test]
    fn test_parse_trailing_newline() {
        let line = format!("{SAMPLE}\n");
        assert!(ProcStat::parse(&line).is_ok());
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = ProcStat::parse("1 (sh) S 1 1").unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_IO");
        match err {
            CoreError::StatFormat { got, need } => {
                assert_eq!(got, 5);
                assert_eq!(need, MIN_STAT_FIELDS);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(
            ProcStat::parse(""),
            Err(CoreError::StatFormat { got: 0, .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let line = "1 (sh) S 1 1 1 0 -1 0 0 0 0 0 abc 6";
        let err = ProcStat::parse(line).unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_PARSE");
        assert!(matches!(err, CoreError::StatParse { field: "utime", .. }));
    }

    #[test]
    fn test_cpu_usage_from_ticks() {
        assert_eq!(CpuUsage::from_ticks(50, 100).percent(), 50.0);
        assert_eq!(CpuUsage::from_ticks(0, 100).percent(), 0.0);
        // Multi-threaded processes can exceed one core; clamped
        assert_eq!(CpuUsage::from_ticks(400, 100).percent(), 100.0);
        assert_eq!(CpuUsage::from_ticks(10, 0), CpuUsage::IDLE);
    }

    #[test]
    fn test_cpu_usage_display() {
        assert_eq!(CpuUsage::from_ticks(1, 3).to_string(), "33.33%");
    }
}
