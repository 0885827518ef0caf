//! Parser for the blank-line separated `key: value` record dumps.
//!
//! A dump is a sequence of records terminated by `\n\n`; each record is a run of
//! `\n`-separated `<key>: <value>` lines. Keys come from a fixed dictionary per
//! entity and anything else is rejected.

use crate::error::{Entity, ImportError};
use crate::model::{Post, Sha1, Topic, SHA1_LEN};
use crate::progress::ProgressScope;
use std::borrow::Cow;

const RECORD_SEP: &[u8] = b"\n\n";
const FIELD_SEP: &str = ": ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TopicField {
    Id,
    Subject,
    CreatedOn,
    CreatedBy,
    Deleted,
}

static TOPIC_FIELDS: &[(&str, TopicField)] = &[
    ("I", TopicField::Id),
    ("S", TopicField::Subject),
    ("On", TopicField::CreatedOn),
    ("By", TopicField::CreatedBy),
    ("D", TopicField::Deleted),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PostField {
    TopicId,
    CreatedOn,
    MessageSha1,
    Deleted,
    Ip,
    UserName,
    UserEmail,
    UserHomepage,
}

static POST_FIELDS: &[(&str, PostField)] = &[
    ("T", PostField::TopicId),
    ("On", PostField::CreatedOn),
    ("M", PostField::MessageSha1),
    ("D", PostField::Deleted),
    ("IP", PostField::Ip),
    ("UN", PostField::UserName),
    ("UE", PostField::UserEmail),
    ("UH", PostField::UserHomepage),
];

fn lookup<F: Copy>(table: &[(&str, F)], entity: Entity, key: &str) -> Result<F, ImportError> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, f)| *f)
        .ok_or_else(|| ImportError::UnknownField { entity, key: key.to_string() })
}

/// Split a dump into raw records. Bytes after the last separator are ignored.
pub fn split_records(mut data: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    while !data.is_empty() {
        let Some(idx) = find(data, RECORD_SEP) else {
            if data.iter().any(|b| !b.is_ascii_whitespace()) {
                tracing::warn!(bytes = data.len(), "ignoring unterminated trailing record");
            }
            break;
        };
        out.push(&data[..idx]);
        data = &data[idx + RECORD_SEP.len()..];
    }
    out
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Non-UTF-8 bytes become U+FFFD; the substitution is logged, never silent.
fn decode_record(record: &[u8], entity: Entity) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(record);
    if let Cow::Owned(_) = text {
        tracing::warn!(%entity, record = %text, "replaced invalid UTF-8 in record");
    }
    text
}

/// Yields `(key, value)` per line; value is everything after the first `": "`.
fn fields(record: &str, entity: Entity) -> impl Iterator<Item = Result<(&str, &str), ImportError>> {
    record.split('\n').map(move |line| {
        line.split_once(FIELD_SEP)
            .ok_or_else(|| ImportError::MalformedField { entity, line: line.to_string() })
    })
}

fn parse_bool(v: &str) -> bool {
    v == "True"
}

/// Parse `<forumId>.<entityId>`, splitting on the first `.`.
fn parse_composite_id(entity: Entity, value: &str) -> Result<(i64, i64), ImportError> {
    let bad = || ImportError::InvalidCompositeId { entity, value: value.to_string() };
    let (forum, id) = value.split_once('.').ok_or_else(bad)?;
    let forum = forum.parse().map_err(|_| bad())?;
    let id = id.parse().map_err(|_| bad())?;
    Ok((forum, id))
}

/// Hex-decode a message hash; anything but exactly 20 bytes is rejected.
pub fn parse_sha1(value: &str) -> Result<Sha1, ImportError> {
    let bytes = hex::decode(value)
        .map_err(|e| ImportError::InvalidSha1 { value: value.to_string(), reason: e.to_string() })?;
    let arr: [u8; SHA1_LEN] = bytes.as_slice().try_into().map_err(|_| ImportError::InvalidSha1 {
        value: value.to_string(),
        reason: format!("expected {SHA1_LEN} bytes, got {}", bytes.len()),
    })?;
    Ok(Sha1(arr))
}

pub fn parse_topic(record: &[u8]) -> Result<Topic, ImportError> {
    let record = decode_record(record, Entity::Topic);
    let mut topic = Topic::default();
    let mut has_id = false;
    for kv in fields(&record, Entity::Topic) {
        let (key, val) = kv?;
        match lookup(TOPIC_FIELDS, Entity::Topic, key)? {
            TopicField::Id => {
                (topic.forum_id, topic.id) = parse_composite_id(Entity::Topic, val)?;
                has_id = true;
            }
            TopicField::Subject => topic.subject = val.to_string(),
            TopicField::CreatedOn => topic.created_on = val.to_string(),
            TopicField::CreatedBy => topic.created_by = val.to_string(),
            TopicField::Deleted => topic.is_deleted = parse_bool(val),
        }
    }
    if !has_id {
        return Err(ImportError::MissingField { entity: Entity::Topic, key: "I" });
    }
    Ok(topic)
}

pub fn parse_post(record: &[u8]) -> Result<Post, ImportError> {
    let record = decode_record(record, Entity::Post);
    let mut post = Post::default();
    let (mut has_id, mut has_sha1) = (false, false);
    for kv in fields(&record, Entity::Post) {
        let (key, val) = kv?;
        match lookup(POST_FIELDS, Entity::Post, key)? {
            PostField::TopicId => {
                (post.forum_id, post.topic_id) = parse_composite_id(Entity::Post, val)?;
                has_id = true;
            }
            PostField::CreatedOn => post.created_on = val.to_string(),
            PostField::MessageSha1 => {
                post.message_sha1 = parse_sha1(val)?;
                has_sha1 = true;
            }
            PostField::Deleted => post.is_deleted = parse_bool(val),
            PostField::Ip => post.ip = val.to_string(),
            PostField::UserName => post.user_name = val.to_string(),
            PostField::UserEmail => post.user_email = val.to_string(),
            PostField::UserHomepage => post.user_homepage = val.to_string(),
        }
    }
    if !has_id {
        return Err(ImportError::MissingField { entity: Entity::Post, key: "T" });
    }
    if !has_sha1 {
        return Err(ImportError::MissingField { entity: Entity::Post, key: "M" });
    }
    Ok(post)
}

fn parse_all<T>(
    data: &[u8],
    pb: &ProgressScope,
    parse_one: impl Fn(&[u8]) -> Result<T, ImportError>,
) -> Result<Vec<T>, ImportError> {
    let records = split_records(data);
    pb.set_length(records.len() as u64);
    let mut out = Vec::with_capacity(records.len());
    for rec in records {
        out.push(parse_one(rec)?);
        pb.inc_items(1);
    }
    Ok(out)
}

pub fn parse_topics(data: &[u8]) -> Result<Vec<Topic>, ImportError> {
    parse_topics_with_progress(data, &ProgressScope::hidden())
}

pub fn parse_posts(data: &[u8]) -> Result<Vec<Post>, ImportError> {
    parse_posts_with_progress(data, &ProgressScope::hidden())
}

pub(crate) fn parse_topics_with_progress(data: &[u8], pb: &ProgressScope) -> Result<Vec<Topic>, ImportError> {
    parse_all(data, pb, parse_topic)
}

pub(crate) fn parse_posts_with_progress(data: &[u8], pb: &ProgressScope) -> Result<Vec<Post>, ImportError> {
    parse_all(data, pb, parse_post)
}
