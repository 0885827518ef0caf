#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// 40 hex chars = 20 bytes: 00 01 02 .. 13
pub const SHA1_HEX: &str = "000102030405060708090a0b0c0d0e0f10111213";

/// Base64 of the bytes above.
pub const SHA1_B64: &str = "AAECAwQFBgcICQoLDA0ODxAREhM=";

/// One topic record (no trailing separator).
pub fn topic_rec(forum: i64, id: i64, subject: &str, deleted: bool) -> String {
    format!(
        "I: {forum}.{id}\nS: {subject}\nOn: 2008-01-0{}\nBy: user{id}\nD: {}",
        id % 10,
        if deleted { "True" } else { "False" }
    )
}

/// One post record (no trailing separator).
pub fn post_rec(forum: i64, topic: i64, user: &str, deleted: bool) -> String {
    format!(
        "T: {forum}.{topic}\nOn: 2008-02-01 10:00:00\nM: {SHA1_HEX}\nD: {}\nIP: 10.0.0.1\nUN: {user}\nUE: {user}@example.com\nUH: http://{user}.example.com",
        if deleted { "True" } else { "False" }
    )
}

/// Join records into a dump where every record is followed by a blank line.
pub fn dump(records: &[String]) -> String {
    records.iter().map(|r| format!("{r}\n\n")).collect()
}

/// A throwaway tree shaped like a real checkout:
///   <root>/input/{topics,posts}.txt
///   <root>/data/<app>/            (only when `with_data_dir`)
pub struct Layout {
    pub root: PathBuf,
    pub input_dir: PathBuf,
    pub data_dir: PathBuf,
}

pub fn make_layout(app: &str, with_data_dir: bool) -> Layout {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.keep();
    let input_dir = root.join("input");
    fs::create_dir_all(&input_dir).unwrap();
    let data_dir = root.join("data");
    if with_data_dir {
        fs::create_dir_all(data_dir.join(app)).unwrap();
    }
    Layout { root, input_dir, data_dir }
}

pub fn write_inputs(input_dir: &Path, topics: &str, posts: &str) {
    fs::write(input_dir.join("topics.txt"), topics).unwrap();
    fs::write(input_dir.join("posts.txt"), posts).unwrap();
}

/// Non-empty lines of a text file.
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
