// src/ecs/tags.rs

//! エンティティにくっつけるタグ (文字列ラベル) だよ！🏷️
//! このゲームではタグが唯一のポリモーフィズムの仕組み。
//! 「active なら update する」「visible なら render する」みたいに、型じゃなくてタグで振り分けるんだ。

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// update の対象になるタグ。
pub const ACTIVE: &str = "active";
/// render の対象になるタグ。
pub const VISIBLE: &str = "visible";
/// 次の cull で消されるタグ。
pub const DEAD: &str = "dead";
/// 位置の境界 (Bounds) を持ってるタグ。デバッグ表示で使う。
pub const SOLID: &str = "solid";

// --- ここから下はカテゴリ用の自由なタグ ---
pub const PLAYER: &str = "player";
pub const BULLET: &str = "bullet";
pub const STARS: &str = "stars";
pub const BACKGROUND: &str = "background";

/// タグの集合。中身はただの `HashSet<String>`。
/// エンティティ自身が自由に書き換えてOK (弾が画面外に出たら `{dead}` に差し替える、とか)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(HashSet<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// `tag` を持ってるか？ 空文字は誰も持ってない扱い。
    pub fn contains(&self, tag: &str) -> bool {
        !tag.is_empty() && self.0.contains(tag)
    }

    /// タグを 1 個足す。もう持ってたら false。
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// 中身をまるごと入れ替える。`tags = ['dead']` みたいな使い方。
    pub fn replace<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0 = tags.into_iter().map(Into::into).collect();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// ソート済みのタグ一覧。JSON 出力とかで順番を安定させたい時用。
    pub fn sorted(&self) -> Vec<&str> {
        self.iter().sorted().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Tags(iter.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tags {
    fn from(tags: [&str; N]) -> Self {
        tags.into_iter().collect()
    }
}

// `{active, visible}` みたいな表示。ログ用！
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().sorted().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_empty_tag() {
        let tags = Tags::from([ACTIVE, VISIBLE]);
        assert!(tags.contains(ACTIVE));
        assert!(tags.contains(VISIBLE));
        assert!(!tags.contains(DEAD));
        assert!(!tags.contains(""), "空タグは常に false のはず");
    }

    #[test]
    fn replace_swaps_whole_set() {
        let mut tags = Tags::from([VISIBLE, ACTIVE, BULLET]);
        tags.replace([DEAD]);
        assert_eq!(tags.len(), 1);
        assert!(tags.contains(DEAD));
        assert!(!tags.contains(ACTIVE));
    }

    #[test]
    fn display_is_sorted() {
        let tags = Tags::from([VISIBLE, ACTIVE, PLAYER]);
        assert_eq!(tags.to_string(), "{active, player, visible}");
        assert_eq!(tags.sorted(), vec![ACTIVE, PLAYER, VISIBLE]);
    }
}
