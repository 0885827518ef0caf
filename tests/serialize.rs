#[path = "common/mod.rs"]
mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::*;
use fofou_import::{
    link_topics, parse_posts, parse_topics, serialize_topics, strip_sep, Entity, ImportError, Post, Sha1, Topic,
};

fn linked_export(topic_recs: &[String], post_recs: &[String]) -> String {
    let t = parse_topics(dump(topic_recs).as_bytes()).unwrap();
    let p = parse_posts(dump(post_recs).as_bytes()).unwrap();
    serialize_topics(&link_topics(t, p).unwrap().topics).unwrap()
}

/// Splitting on `|` gives 2 fields for topics and 8 for posts, in order.
#[test]
fn field_counts_and_order() {
    let out = linked_export(&[topic_rec(1, 5, "Hello", false)], &[post_rec(1, 5, "alice", false)]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let t: Vec<&str> = lines[0].split('|').collect();
    assert_eq!(t, vec!["T:1", "Hello"]);

    let p: Vec<&str> = lines[1].split('|').collect();
    assert_eq!(p.len(), 8);
    assert_eq!(
        p,
        vec![
            "P:1",
            "1",
            "2008-02-01 10:00:00",
            SHA1_B64,
            "10.0.0.1",
            "alice",
            "alice@example.com",
            "http://alice.example.com",
        ]
    );
    assert!(out.ends_with('\n'));
}

#[test]
fn separator_is_stripped_not_escaped() {
    assert_eq!(strip_sep("Hi|there"), "Hithere");

    let topic = Topic { forum_id: 1, id: 1, subject: "Hi|there".into(), ..Default::default() };
    let post = Post {
        forum_id: 1,
        topic_id: 1,
        id: 1,
        created_on: "a|b".into(),
        ip: "1.2.3.4|".into(),
        user_name: "|bob|".into(),
        user_email: "b|ob@x.com".into(),
        user_homepage: "http://x|y".into(),
        ..Default::default()
    };
    let out = serialize_topics(&[Topic { posts: vec![post], ..topic }]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "T:1|Hithere");
    assert_eq!(lines[1].split('|').count(), 8);
    assert!(lines[1].contains("|ab|"));
    assert!(lines[1].contains("|bob|bob@x.com|http://xy"));
}

/// Each topic line is immediately followed by its own posts.
#[test]
fn topics_form_contiguous_blocks() {
    let out = linked_export(
        &[topic_rec(1, 1, "first", false), topic_rec(1, 2, "empty", false), topic_rec(1, 3, "third", false)],
        &[post_rec(1, 3, "c", false), post_rec(1, 1, "a", false), post_rec(1, 1, "b", false)],
    );
    let prefixes: Vec<String> = out.lines().map(|l| l.split('|').take(2).collect::<Vec<_>>().join("|")).collect();
    assert_eq!(prefixes, vec!["T:1|first", "P:1|1", "P:1|2", "T:2|empty", "T:3|third", "P:3|3"]);
}

#[test]
fn sha1_base64_round_trip() {
    let out = linked_export(&[topic_rec(1, 1, "a", false)], &[post_rec(1, 1, "a", false)]);
    let field = out.lines().nth(1).unwrap().split('|').nth(3).unwrap();
    let bytes = STANDARD.decode(field).unwrap();
    assert_eq!(bytes.len(), 20);
    assert_eq!(bytes, (0u8..20).collect::<Vec<_>>());

    let raw = Sha1([0xab; 20]);
    let enc = STANDARD.encode(raw.as_bytes());
    assert!(enc.ends_with('='));
    assert_eq!(STANDARD.decode(enc).unwrap(), raw.as_bytes().to_vec());
}

#[test]
fn deleted_entities_are_refused() {
    let topic = Topic { forum_id: 1, id: 4, is_deleted: true, ..Default::default() };
    let err = serialize_topics(&[topic]).unwrap_err();
    assert!(matches!(err, ImportError::DeletedEntity { entity: Entity::Topic, id: 4 }));

    let post = Post { id: 9, is_deleted: true, ..Default::default() };
    let topic = Topic { forum_id: 1, id: 1, posts: vec![post], ..Default::default() };
    let err = serialize_topics(&[topic]).unwrap_err();
    assert!(matches!(err, ImportError::DeletedEntity { entity: Entity::Post, id: 9 }));
}
