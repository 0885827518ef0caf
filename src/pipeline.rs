use crate::config::{Dataset, ImportOptions};
use crate::export::serialize_topics;
use crate::io::{load_dataset, write_export};
use crate::link::{link_topics, LinkReport, Linked};
use crate::paths::{data_file_path, resolve_data_dir};
use crate::progress::ProgressScope;
use crate::record::{parse_posts_with_progress, parse_topics_with_progress};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of a completed import.
#[derive(Clone, Debug)]
pub struct ImportSummary {
    pub report: LinkReport,
    pub output_path: PathBuf,
    pub topics: usize,
    pub posts: usize,
    pub bytes_written: u64,
}

/// Serialized export plus the linking counters, before anything touches disk.
#[derive(Clone, Debug)]
pub struct Export {
    pub contents: String,
    pub report: LinkReport,
    pub topics: usize,
    pub posts: usize,
}

#[derive(Clone)]
pub struct ForumImport {
    pub(crate) opts: ImportOptions,
}

impl Default for ForumImport {
    fn default() -> Self {
        Self::new()
    }
}

impl ForumImport {
    pub fn new() -> Self {
        Self { opts: ImportOptions::default() }
    }

    pub fn with_options(opts: ImportOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn input_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_input_dir(dir); self }
    pub fn data_dir_candidates<I, P>(mut self, dirs: I) -> Self where I: IntoIterator<Item = P>, P: AsRef<Path> { self.opts = self.opts.with_data_dir_candidates(dirs); self }
    pub fn app_name(mut self, app: impl Into<String>) -> Self { self.opts = self.opts.with_app_name(app); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }

    pub fn options(&self) -> &ImportOptions {
        &self.opts
    }

    /// Parse, link and serialize in-memory dumps. No filesystem access.
    pub fn export_bytes(&self, topics: &[u8], posts: &[u8]) -> Result<Export> {
        let pb = ProgressScope::count_if(self.opts.progress, "Parsing topics");
        let topics = parse_topics_with_progress(topics, &pb).context("parsing topics")?;
        pb.finish(format!("{} topics", topics.len()));

        let pb = ProgressScope::count_if(self.opts.progress, "Parsing posts");
        let posts = parse_posts_with_progress(posts, &pb).context("parsing posts")?;
        pb.finish(format!("{} posts", posts.len()));

        tracing::info!(topics = topics.len(), posts = posts.len(), "parsed records");

        let Linked { topics, report } = link_topics(topics, posts).context("linking posts to topics")?;
        let contents = serialize_topics(&topics).context("serializing export")?;
        Ok(Export {
            contents,
            report,
            topics: topics.len(),
            posts: report.kept_posts as usize,
        })
    }

    /// Load both dumps, export them, and write `<data dir>/<app>/data.txt`.
    pub fn run(self) -> Result<ImportSummary> {
        init_tracing_once();

        let topics = load_dataset(&self.opts.input_dir, Dataset::Topics)?;
        let posts = load_dataset(&self.opts.input_dir, Dataset::Posts)?;
        let export = self.export_bytes(&topics, &posts)?;

        let data_dir = resolve_data_dir(&self.opts.data_dir_candidates)?;
        let output_path = data_file_path(&data_dir, &self.opts.app_name);
        let bytes_written = write_export(&output_path, &export.contents, self.opts.write_buffer_bytes)?;
        tracing::info!(path = %output_path.display(), bytes = bytes_written, "wrote export");

        Ok(ImportSummary {
            report: export.report,
            output_path,
            topics: export.topics,
            posts: export.posts,
            bytes_written,
        })
    }
}
