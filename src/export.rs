//! Serializer for the compact pipe-delimited data file.
//!
//! ```text
//! T:<id>|<subject>
//! P:<topicId>|<id>|<createdOn>|<base64 sha1>|<ip>|<userName>|<userEmail>|<userHomepage>
//! ```
//! Each topic line is followed by all of its posts. `|` inside text fields is
//! removed, not escaped.

use crate::error::{Entity, ImportError};
use crate::model::{Post, Topic};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt::Write;

pub const SEP: char = '|';

pub fn strip_sep(s: &str) -> String {
    s.replace(SEP, "")
}

pub fn write_topic_line(out: &mut String, t: &Topic) -> Result<(), ImportError> {
    if t.is_deleted {
        return Err(ImportError::DeletedEntity { entity: Entity::Topic, id: t.id });
    }
    let _ = writeln!(out, "T:{}|{}", t.id, strip_sep(&t.subject));
    Ok(())
}

pub fn write_post_line(out: &mut String, p: &Post) -> Result<(), ImportError> {
    if p.is_deleted {
        return Err(ImportError::DeletedEntity { entity: Entity::Post, id: p.id });
    }
    let _ = writeln!(
        out,
        "P:{}|{}|{}|{}|{}|{}|{}|{}",
        p.topic_id,
        p.id,
        strip_sep(&p.created_on),
        STANDARD.encode(p.message_sha1.as_bytes()),
        strip_sep(&p.ip),
        strip_sep(&p.user_name),
        strip_sep(&p.user_email),
        strip_sep(&p.user_homepage),
    );
    Ok(())
}

/// Render all topics, each followed by its posts, into one blob.
pub fn serialize_topics(topics: &[Topic]) -> Result<String, ImportError> {
    let mut out = String::new();
    for t in topics {
        write_topic_line(&mut out, t)?;
        for p in &t.posts {
            write_post_line(&mut out, p)?;
        }
    }
    Ok(out)
}
