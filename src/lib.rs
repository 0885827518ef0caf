mod config;
mod error;
mod model;
mod paths;
mod progress;
mod util;

mod record;
mod link;
mod export;
mod io;
mod pipeline;

pub use crate::config::{Dataset, ImportOptions, DEFAULT_APP_NAME};
pub use crate::error::{Entity, ImportError};
pub use crate::model::{Post, Sha1, Topic, KEPT_FORUM_ID, SHA1_LEN};
pub use crate::pipeline::{Export, ForumImport, ImportSummary};

// Stage functions, usable on their own.
pub use crate::record::{parse_post, parse_posts, parse_sha1, parse_topic, parse_topics, split_records};
pub use crate::link::{link_topics, renumber, LinkReport, Linked};
pub use crate::export::{serialize_topics, strip_sep, write_post_line, write_topic_line, SEP};

// I/O plumbing and path resolution.
pub use crate::io::{load_dataset, write_export};
pub use crate::paths::{data_file_path, input_path, resolve_data_dir, DATA_FILE_NAME};

pub use crate::progress::ProgressScope;
pub use crate::util::init_tracing_once;
