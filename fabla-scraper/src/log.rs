use std::io::Write;

/// What happened to one seed entry during enrichment.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Found {
        slug: String,
        title: String,
        /// Slug the catalog redirected to, if any
        redirected_to: Option<String>,
        images: usize,
    },
    NotFound {
        slug: String,
        message: String,
    },
    Failed {
        slug: String,
        message: String,
    },
}

/// Collects enrichment outcomes, in seed order.
#[derive(Debug, Default, Clone)]
pub struct EnrichLog {
    entries: Vec<LogEntry>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogSummary {
    pub found: usize,
    pub redirected: usize,
    pub not_found: usize,
    pub failed: usize,
    pub images: usize,
}

impl LogSummary {
    pub fn total(&self) -> usize {
        self.found + self.not_found + self.failed
    }
}

impl EnrichLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn summary(&self) -> LogSummary {
        let mut summary = LogSummary::default();
        for entry in &self.entries {
            match entry {
                LogEntry::Found {
                    redirected_to,
                    images,
                    ..
                } => {
                    summary.found += 1;
                    summary.images += images;
                    if redirected_to.is_some() {
                        summary.redirected += 1;
                    }
                }
                LogEntry::NotFound { .. } => summary.not_found += 1,
                LogEntry::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Write a plain-text report.
    pub fn write_report(&self, out: &mut impl Write) -> std::io::Result<()> {
        let summary = self.summary();

        writeln!(out, "=== Enrichment Log ===")?;
        writeln!(
            out,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out)?;
        writeln!(out, "--- Summary ---")?;
        writeln!(
            out,
            "Found: {} (redirected: {})",
            summary.found, summary.redirected
        )?;
        writeln!(out, "Not found: {}", summary.not_found)?;
        writeln!(out, "Failed: {}", summary.failed)?;
        writeln!(out, "Images: {}", summary.images)?;
        writeln!(out)?;
        writeln!(out, "--- Details ---")?;
        writeln!(out)?;

        for entry in &self.entries {
            match entry {
                LogEntry::Found {
                    slug,
                    title,
                    redirected_to,
                    images,
                } => {
                    writeln!(out, "[OK] {} -> \"{}\" ({} images)", slug, title, images)?;
                    if let Some(target) = redirected_to {
                        writeln!(out, "     Redirected to: {}", target)?;
                    }
                }
                LogEntry::NotFound { slug, message } => {
                    writeln!(out, "[NOT FOUND] {}: {}", slug, message)?;
                }
                LogEntry::Failed { slug, message } => {
                    writeln!(out, "[ERROR] {}: {}", slug, message)?;
                }
            }
        }

        Ok(())
    }

    /// Write the report to a file.
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_report(&mut file)
    }
}
