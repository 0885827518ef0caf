//! Attach posts to their topics, drop out-of-scope/deleted records and
//! renumber the survivors densely.

use crate::error::ImportError;
use crate::model::{Post, Topic, KEPT_FORUM_ID};
use ahash::{AHashMap, AHashSet};
use std::fmt;

/// Drop counters. Routine outcomes, not errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub dropped_topics: u64,
    pub dropped_posts: u64,
    pub kept_posts: u64,
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dropped topics: {}, dropped posts: {}, total posts: {}",
            self.dropped_topics, self.dropped_posts, self.kept_posts
        )
    }
}

/// Output of the linking stage: kept topics (renumbered, posts attached) + counters.
#[derive(Clone, Debug, Default)]
pub struct Linked {
    pub topics: Vec<Topic>,
    pub report: LinkReport,
}

/// Filter topics and posts, attach posts in input order, then renumber.
///
/// Topics outside the kept forum or flagged deleted go to a separate excluded-id
/// set so that posts pointing at them are dropped quietly. A post whose topic is
/// in neither set fails with [`ImportError::DanglingTopic`]. Posts of other
/// forums are dropped before that check runs.
pub fn link_topics(topics: Vec<Topic>, posts: Vec<Post>) -> Result<Linked, ImportError> {
    let mut report = LinkReport::default();

    let mut kept: Vec<Topic> = Vec::with_capacity(topics.len());
    let mut kept_index: AHashMap<i64, usize> = AHashMap::with_capacity(topics.len());
    let mut excluded: AHashSet<i64> = AHashSet::new();

    for t in topics {
        if !t.is_kept() {
            report.dropped_topics += 1;
            excluded.insert(t.id);
            continue;
        }
        if kept_index.insert(t.id, kept.len()).is_some() {
            tracing::warn!(topic_id = t.id, "duplicate topic id; later topic receives its posts");
        }
        kept.push(t);
    }

    for p in posts {
        if p.forum_id != KEPT_FORUM_ID {
            report.dropped_posts += 1;
            continue;
        }
        let Some(&idx) = kept_index.get(&p.topic_id) else {
            if !excluded.contains(&p.topic_id) {
                return Err(ImportError::DanglingTopic { topic_id: p.topic_id });
            }
            report.dropped_posts += 1;
            continue;
        };
        if p.is_deleted {
            report.dropped_posts += 1;
            continue;
        }
        kept[idx].posts.push(p);
        report.kept_posts += 1;
    }

    // TODO: order each topic's posts by created_on once timestamps are parsed
    renumber(&mut kept);
    tracing::info!(
        dropped_topics = report.dropped_topics,
        dropped_posts = report.dropped_posts,
        kept_posts = report.kept_posts,
        "linked topics and posts"
    );
    Ok(Linked { topics: kept, report })
}

/// Assign topic ids 1..N in list order and post ids 1..M across all topics,
/// rewriting each post's `topic_id` to its parent's new id.
pub fn renumber(topics: &mut [Topic]) {
    let mut post_id = 1;
    for (i, t) in topics.iter_mut().enumerate() {
        let topic_id = i as i64 + 1;
        t.id = topic_id;
        for p in &mut t.posts {
            p.topic_id = topic_id;
            p.id = post_id;
            post_id += 1;
        }
    }
}
