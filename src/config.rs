use std::path::{Path, PathBuf};

/// Default application whose data directory receives the export.
pub const DEFAULT_APP_NAME: &str = "SumatraPDF";

/// Which input dump to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Topics,
    Posts,
}

impl Dataset {
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Topics => "topics",
            Dataset::Posts => "posts",
        }
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    pub input_dir: PathBuf,                 // holds topics.txt / posts.txt
    pub data_dir_candidates: Vec<PathBuf>,  // first existing one wins
    pub app_name: String,                   // output goes to <data dir>/<app_name>/data.txt
    pub progress: bool,                     // show progress bars while parsing (off by default)

    // IO tuning
    pub write_buffer_bytes: usize,          // BufWriter capacity
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            input_dir: Path::new("..").join("appengine").join("imported_data"),
            // local checkout first, then the server layout
            data_dir_candidates: vec![
                Path::new("..").join("..").join("fofoudata"),
                Path::new("..").join("..").join("..").join("data"),
            ],
            app_name: DEFAULT_APP_NAME.to_string(),
            progress: false,
            write_buffer_bytes: 256 * 1024,
        }
    }
}

impl ImportOptions {
    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_data_dir_candidates<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.data_dir_candidates = dirs.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        self
    }
    pub fn with_app_name(mut self, app: impl Into<String>) -> Self {
        self.app_name = app.into();
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
}
