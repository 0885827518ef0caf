//! In-memory forum entities as they flow through parse -> link -> export.

use std::fmt;

/// Only topics and posts of this forum are exported.
pub const KEPT_FORUM_ID: i64 = 1;

/// Length of a raw SHA-1 digest.
pub const SHA1_LEN: usize = 20;

/// Raw message content hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sha1(pub [u8; SHA1_LEN]);

impl Sha1 {
    pub fn as_bytes(&self) -> &[u8; SHA1_LEN] {
        &self.0
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1({})", hex::encode(self.0))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topic {
    pub forum_id: i64,
    /// Original id after parsing, dense 1..N after renumbering.
    pub id: i64,
    pub subject: String,
    pub created_on: String, // opaque, never parsed
    pub created_by: String,
    pub is_deleted: bool,
    /// Attached during linking, in input post order.
    pub posts: Vec<Post>,
}

impl Topic {
    pub fn is_kept(&self) -> bool {
        self.forum_id == KEPT_FORUM_ID && !self.is_deleted
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    pub forum_id: i64,
    pub topic_id: i64,
    /// Not present in the input; assigned during renumbering.
    pub id: i64,
    pub created_on: String,
    pub message_sha1: Sha1,
    pub is_deleted: bool,
    pub ip: String,
    pub user_name: String,
    pub user_email: String,
    pub user_homepage: String,
}
