// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

use crate::ecs::context::{RenderContext, UpdateContext};
use crate::ecs::tags::Tags;

/// シーンの中でエンティティを見分けるための ID だよ！
/// シーンの add に受け付けられた瞬間に割り当てられる (実際にライブリストに入るのは次の flush)。
/// 同じシーンの中では二度と使い回されない。
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct EntityId(pub usize);

/// シーンごとの ID 発行係。1 から始まる連番をひたすら増やすだけ！🔢
/// ライブ数から ID を作ると同じフレームで add した子同士がぶつかるので、カウンタ方式にしてる。
#[derive(Debug)]
pub struct IdAllocator {
    next_id: usize,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl IdAllocator {
    /// 新しい ID を払い出す。
    pub fn allocate(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// 次に払い出される予定の ID (払い出しはしない)。
    pub fn peek_next(&self) -> EntityId {
        EntityId(self.next_id)
    }
}

/// `solid` タグ付きのエンティティが持ってる、画面上の位置と境界。
/// (x, y) が中心、left/right/top/bottom が四辺。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// 中心 (x, y) と幅・高さから境界を作る。半分の幅/高さは整数に切り捨てるよ。
    pub fn centered(x: f64, y: f64, w: f64, h: f64) -> Self {
        let hw = (w * 0.5).trunc();
        let hh = (h * 0.5).trunc();
        Self {
            x,
            y,
            left: x - hw,
            right: x + hw,
            top: y - hh,
            bottom: y + hh,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// 毎フレーム update してもらえる能力。`active` タグと組み合わせて使う。
pub trait Updatable {
    fn update(&mut self, ctx: &mut UpdateContext<'_>);
}

/// 毎フレーム描画してもらえる能力。`visible` タグと組み合わせて使う。
pub trait Renderable {
    fn render(&self, ctx: &mut RenderContext<'_>);
}

/// シーンに入れられる「モノ」の形。
///
/// 必須なのはタグだけ！ update/render はあってもなくてもいい。
/// ディスパッチャは `as_updatable` / `as_renderable` が `None` を返したら黙ってスキップするよ。
/// 具体的な型で振り分けることは絶対にしない。振り分けはタグと能力の有無だけ。
pub trait Entity {
    fn tags(&self) -> &Tags;

    fn tags_mut(&mut self) -> &mut Tags;

    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        None
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        None
    }

    /// `solid` なエンティティは境界を返す。デバッグ表示がこれを見る。
    fn bounds(&self) -> Option<Bounds> {
        None
    }
}

/// シーンが持ってるエンティティ 1 個分の入れ物。ID と本体のセット。
pub struct EntitySlot {
    id: EntityId,
    entity: Box<dyn Entity>,
}

impl EntitySlot {
    pub(crate) fn new(id: EntityId, entity: Box<dyn Entity>) -> Self {
        Self { id, entity }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tags(&self) -> &Tags {
        self.entity.tags()
    }

    /// 外からタグを書き換える用 (例: ホスト側で `dead` をつける)。
    /// 反映されるのは次のフレームのディスパッチから。
    pub fn tags_mut(&mut self) -> &mut Tags {
        self.entity.tags_mut()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.entity.tags().contains(tag)
    }

    pub fn entity(&self) -> &dyn Entity {
        self.entity.as_ref()
    }

    pub fn entity_mut(&mut self) -> &mut dyn Entity {
        self.entity.as_mut()
    }
}

impl std::fmt::Debug for EntitySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntitySlot")
            .field("id", &self.id)
            .field("tags", &self.tags().to_string())
            .finish()
    }
}
