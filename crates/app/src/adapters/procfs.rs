use cpucore_core::error::{CoreError, Result};
use cpucore_core::ports::ProcStatSource;
use cpucore_core::ProcStat;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub const SELF_STAT_PATH: &str = "/proc/self/stat";

/// procfs adapter that implements ProcStatSource
#[derive(Debug, Clone)]
pub struct ProcfsStatSource {
    path: PathBuf,
}

impl ProcfsStatSource {
    pub fn new() -> Self {
        Self::with_path(SELF_STAT_PATH)
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcfsStatSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcStatSource for ProcfsStatSource {
    fn read_self_stat(&self) -> Result<ProcStat> {
        debug!("Opening {} for reading", self.path.display());

        // The command name is arbitrary bytes; only the numeric fields matter
        let bytes = fs::read(&self.path).map_err(|source| {
            error!("Error reading {}: {}", self.path.display(), source);
            CoreError::StatIo {
                path: self.path.clone(),
                source,
            }
        })?;

        let contents = String::from_utf8_lossy(&bytes);
        let line = contents.lines().next().unwrap_or_default();
        debug!("Raw stat line: {}", line);

        let stat = ProcStat::parse(line).inspect_err(|err| {
            error!("Error parsing {}: {}", self.path.display(), err);
        })?;
        debug!("Created ProcStat: utime={}, stime={}", stat.utime, stat.stime);

        Ok(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_stat_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stat");
        fs::write(
            &path,
            "321 (cpucore test) S 1 321 321 0 -1 0 0 0 0 0 12 34 0 0 20 0 4 0 99\n",
        )?;

        let stat = ProcfsStatSource::with_path(&path).read_self_stat()?;
        assert_eq!(stat, ProcStat { utime: 12, stime: 34 });
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let source = ProcfsStatSource::with_path(temp_dir.path().join("missing"));

        let err = source.read_self_stat().unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_IO");
        Ok(())
    }

    #[test]
    fn test_empty_file_is_io_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stat");
        fs::write(&path, "")?;

        let err = ProcfsStatSource::with_path(&path).read_self_stat().unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_IO");
        Ok(())
    }

    #[test]
    fn test_short_line_is_io_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stat");
        fs::write(&path, "1 (sh) S 1 1\n")?;

        let err = ProcfsStatSource::with_path(&path).read_self_stat().unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_IO");
        Ok(())
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stat");
        fs::write(&path, "1 (sh) S 1 1 1 0 -1 0 0 0 0 0 x 6\n")?;

        let err = ProcfsStatSource::with_path(&path).read_self_stat().unwrap_err();
        assert_eq!(err.code(), "ERR_CPU_USAGE_PARSE");
        Ok(())
    }

    #[test]
    fn test_non_utf8_command_name() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stat");
        fs::write(
            &path,
            b"42 (app\xff\xfe) S 1 42 42 0 -1 0 0 0 0 0 17 3 0 0 20 0 1 0 100\n",
        )?;

        let stat = ProcfsStatSource::with_path(&path).read_self_stat()?;
        assert_eq!(stat, ProcStat { utime: 17, stime: 3 });
        Ok(())
    }

    #[test]
    fn test_default_path() {
        assert_eq!(ProcfsStatSource::default().path(), Path::new("/proc/self/stat"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_reads_own_process() {
        assert!(ProcfsStatSource::new().read_self_stat().is_ok());
    }
}
