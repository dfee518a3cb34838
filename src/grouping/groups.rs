//! Insertion-ordered group map with structural sharing
//!
//! Keys are only ever added and members only ever appended, so every state the
//! generator passes through is a prefix of its final state. [`GroupLog`] records
//! that final state once; a [`GroupMap`] is a view of the log cut at a [`Cut`].
//! Taking a snapshot copies an `Arc` and two counters.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::sync::Arc;

/// Size of the grouping state at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cut {
    /// Keys created so far
    pub keys: usize,
    /// Members appended so far, across all groups
    pub members: usize,
}

/// One anagram class: its key and the members in arrival order
#[derive(Debug)]
struct Group {
    key: Arc<str>,
    members: Vec<String>,
    /// Global append number of each member, strictly increasing
    seq: Vec<usize>,
}

impl Group {
    /// Members appended before the `members`-th append overall
    fn members_before(&self, members: usize) -> &[String] {
        let n = self.seq.partition_point(|&seq| seq < members);
        &self.members[..n]
    }
}

/// Append-only record of every key and member, in insertion order
#[derive(Debug, Default)]
pub struct GroupLog {
    groups: Vec<Group>,
    index: FxHashMap<Arc<str>, usize>, // key -> position in `groups`
    appended: usize,
}

impl GroupLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `key` in insertion order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Add `key` with no members and return its position.
    ///
    /// An existing key is left alone and its position returned.
    pub fn insert_key(&mut self, key: &str) -> usize {
        if let Some(pos) = self.position(key) {
            return pos;
        }
        let key: Arc<str> = Arc::from(key);
        let pos = self.groups.len();
        self.index.insert(Arc::clone(&key), pos);
        self.groups.push(Group {
            key,
            members: Vec::new(),
            seq: Vec::new(),
        });
        pos
    }

    /// Append `member` to the group at `pos`, as returned by
    /// [`insert_key`](Self::insert_key) or [`position`](Self::position).
    pub fn push(&mut self, pos: usize, member: String) {
        let group = &mut self.groups[pos];
        group.members.push(member);
        group.seq.push(self.appended);
        self.appended += 1;
    }

    /// Current size, for viewing this instant later
    pub fn cut(&self) -> Cut {
        Cut {
            keys: self.groups.len(),
            members: self.appended,
        }
    }

    /// The grouping as a list of member lists, in key insertion order
    pub fn to_lists(&self) -> Vec<Vec<String>> {
        self.groups.iter().map(|g| g.members.clone()).collect()
    }

    /// View of the complete log
    pub fn freeze(self) -> GroupMap {
        let cut = self.cut();
        GroupMap::at(&Arc::new(self), cut)
    }
}

/// Mapping from group key to member list, as it stood at one [`Cut`] of a log.
///
/// Keys iterate in the order they were first inserted, members in the order they
/// were pushed.
#[derive(Clone, Default)]
pub struct GroupMap {
    log: Arc<GroupLog>,
    cut: Cut,
}

impl GroupMap {
    /// An empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(log: &Arc<GroupLog>, cut: Cut) -> Self {
        GroupMap {
            log: Arc::clone(log),
            cut,
        }
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.cut.keys
    }

    pub fn is_empty(&self) -> bool {
        self.cut.keys == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Position of `key` in insertion order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.log.position(key).filter(|&pos| pos < self.cut.keys)
    }

    /// Members of `key`, if present
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.position(key).map(|pos| self.members_at(pos))
    }

    /// Members of the group at `pos`, as returned by [`position`](Self::position).
    ///
    /// Panics if `pos` is not a position in this view.
    pub fn members_at(&self, pos: usize) -> &[String] {
        assert!(pos < self.cut.keys, "group {} outside the snapshot", pos);
        self.log.groups[pos].members_before(self.cut.members)
    }

    /// Iterate over `(key, members)` in key insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        let members = self.cut.members;
        self.log.groups[..self.cut.keys]
            .iter()
            .map(move |g| (&*g.key, g.members_before(members)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.log.groups[..self.cut.keys].iter().map(|g| &*g.key)
    }

    /// Total number of members across all groups
    pub fn total_members(&self) -> usize {
        self.cut.members
    }
}

impl PartialEq for GroupMap {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.log, &other.log) && self.cut == other.cut {
            return true;
        }
        self.len() == other.len()
            && self.total_members() == other.total_members()
            && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for GroupMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for GroupMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, members) in self.iter() {
            map.serialize_entry(key, members)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_and_push_preserve_order() {
        let mut log = GroupLog::new();
        let aet = log.insert_key("aet");
        let ant = log.insert_key("ant");
        log.push(ant, "tan".to_string());
        log.push(aet, "eat".to_string());
        log.push(aet, "tea".to_string());

        let map = log.freeze();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["aet", "ant"]);
        assert_eq!(map.get("aet"), Some(&strings(&["eat", "tea"])[..]));
        assert_eq!(map.total_members(), 3);
        assert_eq!(map.position("ant"), Some(1));
    }

    #[test]
    fn test_insert_existing_key_returns_its_position() {
        let mut log = GroupLog::new();
        let first = log.insert_key("a");
        log.push(first, "a".to_string());
        assert_eq!(log.insert_key("a"), first);

        let map = log.freeze();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_views_see_only_their_cut() {
        let mut log = GroupLog::new();
        let abc = log.insert_key("abc");
        log.push(abc, "abc".to_string());
        let early = log.cut();

        log.push(abc, "bca".to_string());
        let dgo = log.insert_key("dgo");
        let middle = log.cut();
        log.push(dgo, "dog".to_string());
        log.push(abc, "cab".to_string());

        let log = Arc::new(log);
        let snapshot = GroupMap::at(&log, early);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.contains_key("dgo"));
        assert_eq!(snapshot.get("abc"), Some(&strings(&["abc"])[..]));

        let snapshot = GroupMap::at(&log, middle);
        assert_eq!(snapshot.get("abc"), Some(&strings(&["abc", "bca"])[..]));
        assert_eq!(snapshot.get("dgo"), Some(&[] as &[String]));
        assert_eq!(snapshot.total_members(), 2);

        assert_eq!(snapshot.members_at(0), &strings(&["abc", "bca"])[..]);

        let full = GroupMap::at(&log, Cut { keys: 2, members: 4 });
        assert_eq!(full.get("abc"), Some(&strings(&["abc", "bca", "cab"])[..]));
    }

    #[test]
    fn test_equality_across_logs() {
        let mut a = GroupLog::new();
        let pos = a.insert_key("ab");
        a.push(pos, "ba".to_string());

        let mut b = GroupLog::new();
        let pos = b.insert_key("ab");
        b.push(pos, "ba".to_string());
        b.push(pos, "ab".to_string());
        let b = Arc::new(b);

        assert_eq!(a.freeze(), GroupMap::at(&b, Cut { keys: 1, members: 1 }));
        assert_ne!(GroupMap::new(), GroupMap::at(&b, Cut { keys: 1, members: 0 }));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut log = GroupLog::new();
        let b = log.insert_key("b");
        let a = log.insert_key("a");
        log.push(b, "b".to_string());
        log.push(a, "a".to_string());

        let json = serde_json::to_string(&log.freeze()).expect("serialize");
        assert_eq!(json, r#"{"b":["b"],"a":["a"]}"#);
    }
}
