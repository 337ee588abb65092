use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one file ingestion
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader that loads a comment file into one LF-joined string
pub struct AsyncLineReader {
    config: ReaderConfig,
}

impl AsyncLineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the whole file, rejoining physical lines with a line feed
    ///
    /// One `'\n'` is appended after every line read, including the last, so
    /// CR/CRLF endings on disk are already normalized to LF when the content
    /// reaches the normalizer.
    pub async fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<(String, ReadStats)> {
        let path = path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting read of comment file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);
                return Err(anyhow::anyhow!(error_msg));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut content = String::new();
        let mut line_count = 0u64;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    content.push_str(&line);
                    content.push('\n');
                    line_count += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "Read error in {} at line {}: {}",
                        path.display(),
                        line_count + 1,
                        e
                    );
                    warn!("{}", error_msg);
                    return Err(anyhow::anyhow!(error_msg));
                }
            }
        }

        let stats = ReadStats {
            lines_read: line_count,
            bytes_read: content.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );

        Ok((content, stats))
    }
}

/// Convenience function for reading a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let reader = AsyncLineReader::new(ReaderConfig::default());
    let (content, _stats) = reader.read_to_string(path).await?;
    Ok(content)
}
