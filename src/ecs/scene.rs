// src/ecs/scene.rs

// Scene (シーン) は、名前つきのエンティティ入れ物だよ！🎬
//
// ポイントは「ディスパッチ中はライブリストを絶対にいじらない」こと。
// add/remove は全部いったんキューに積んで、決まったタイミング (flush) でまとめて反映する。
// 2 段階コミットってやつ！
//
// 1 フレームの流れ (GameLoop が呼ぶ順番そのまま):
//   1. add-flush     : 追加待ちキューをライブリストの後ろにくっつける
//   2. update pass   : active タグのエンティティに update を配る
//   3. dead 回収     : dead タグのエンティティを remove キューに積む
//   4. remove-flush  : remove キューに入ってる ID をライブリストから消す
// render はこのあと別パスで、flush 後のライブリストに対してやる。

use log::{debug, trace};

use crate::ecs::context::{FrameInfo, RenderContext, UpdateContext};
use crate::ecs::entity::{Entity, EntityId, EntitySlot, IdAllocator};
use crate::ecs::tags::{ACTIVE, DEAD, VISIBLE};
use crate::surface::Surface;

/// `Scene::update` 1 回分の集計。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    /// add-flush でライブに入った数
    pub added: usize,
    /// update を実際に呼んだ数
    pub updated: usize,
    /// dead として remove キューに積んだ数
    pub culled: usize,
    /// remove-flush でライブから消えた数
    pub removed: usize,
}

pub struct Scene {
    name: String,
    live: Vec<EntitySlot>,
    pending_add: Vec<EntitySlot>,
    pending_remove: Vec<EntityId>,
    ids: IdAllocator,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Scene {
            name: name.into(),
            live: Vec::new(),
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            ids: IdAllocator::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// エンティティを追加待ちキューに積んで、割り当てた ID をすぐ返す。
    /// まだライブじゃないよ！次の add-flush で初めてライブになる。
    pub fn add<E: Entity + 'static>(&mut self, entity: E) -> EntityId {
        self.add_boxed(Box::new(entity))
    }

    pub fn add_boxed(&mut self, entity: Box<dyn Entity>) -> EntityId {
        queue_add(&self.name, &mut self.ids, &mut self.pending_add, entity)
    }

    /// 削除をお願いする。ライブにいない ID (None、未追加、もう消えた) なら何もしない。
    /// 実際に消えるのは remove-flush の時。
    pub fn remove(&mut self, id: impl Into<Option<EntityId>>) {
        let id = id.into();
        let is_live = id.map_or(false, |id| self.contains(id));
        queue_remove(&self.name, &mut self.pending_remove, id, is_live);
    }

    /// ライブリストを前から見て、最初に `tag` を持ってるエンティティ。
    pub fn find_first_with_tag(&self, tag: &str) -> Option<&EntitySlot> {
        if tag.is_empty() {
            return None;
        }
        self.live.iter().find(|slot| slot.has_tag(tag))
    }

    /// ライブリストを後ろから見て、最初に `tag` を持ってるエンティティ。
    pub fn find_last_with_tag(&self, tag: &str) -> Option<&EntitySlot> {
        if tag.is_empty() {
            return None;
        }
        self.live.iter().rev().find(|slot| slot.has_tag(tag))
    }

    /// `tag` を持ってるライブなエンティティ全部 (ライブリストの順番のまま)。
    pub fn find_all_with_tag(&self, tag: &str) -> Vec<&EntitySlot> {
        if tag.is_empty() || self.live.is_empty() {
            return Vec::new();
        }
        self.live.iter().filter(|slot| slot.has_tag(tag)).collect()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.live.iter().any(|slot| slot.id() == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntitySlot> {
        self.live.iter().find(|slot| slot.id() == id)
    }

    /// ライブなエンティティを外 (ホストとかループ) からいじる用。フレームとフレームの間で使ってね！
    /// ここで `dead` をつけたら、次のフレームの dead 回収でちゃんと消える。
    /// 追加待ちの子はまだライブじゃないので None。
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntitySlot> {
        self.live.iter_mut().find(|slot| slot.id() == id)
    }

    /// ライブなエンティティ (順番どおり)。
    pub fn entities(&self) -> impl Iterator<Item = &EntitySlot> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn pending_add_len(&self) -> usize {
        self.pending_add.len()
    }

    pub fn pending_remove_len(&self) -> usize {
        self.pending_remove.len()
    }

    /// 1 フレーム分のライフサイクル更新 (add-flush → update → dead 回収 → remove-flush)。
    pub fn update(&mut self, frame: FrameInfo<'_>) -> UpdateReport {
        // ★ この順番は絶対に変えちゃダメ！ ★
        let added = self.flush_added(); // 1. 前のフレームで add された子たちがここでデビュー
        let updated = self.dispatch_update(frame); // 2. active な子に update
        let culled = self.collect_dead(); // 3. dead になった子を削除キューへ
        let removed = self.flush_removed(); // 4. まとめて消す (render より前！)
        UpdateReport { added, updated, culled, removed }
    }

    /// 手順 1: 追加待ちをライブの後ろにそのままの順番でくっつける。
    pub fn flush_added(&mut self) -> usize {
        if self.pending_add.is_empty() {
            return 0;
        }
        let count = self.pending_add.len();
        // append はキューの中身を順番そのままで移して、キューを空にしてくれる
        self.live.append(&mut self.pending_add);
        debug!("Scene[{}]: flushed {} added entities (live {})", self.name, count, self.live.len());
        count
    }

    /// 手順 2: active なエンティティに update を配る。update を持ってない子はスキップ。
    ///
    /// ライブリストは `iter_mut` で回してるだけで、長さは一切変わらない。
    /// エンティティからの add/remove は `SceneCommands` 経由でキューに行く。
    pub fn dispatch_update(&mut self, frame: FrameInfo<'_>) -> usize {
        // パス開始時点のライブ ID。パス中はライブが変わらないのでこれで正確。
        let live_ids: Vec<EntityId> = self.live.iter().map(EntitySlot::id).collect();
        let mut ctx = UpdateContext {
            frame,
            commands: SceneCommands {
                scene_name: &self.name,
                ids: &mut self.ids,
                live_ids: &live_ids,
                pending_add: &mut self.pending_add,
                pending_remove: &mut self.pending_remove,
            },
        };

        let mut dispatched = 0;
        for slot in self.live.iter_mut() {
            // タグで選ぶ。型では選ばない！
            if !slot.has_tag(ACTIVE) {
                continue;
            }
            // update を持ってない子 (背景とか) は黙ってスキップ
            if let Some(updatable) = slot.entity_mut().as_updatable() {
                updatable.update(&mut ctx);
                dispatched += 1;
            }
        }
        trace!("Scene[{}]: dispatched update to {} entities", self.name, dispatched);
        dispatched
    }

    /// 手順 3: dead タグのエンティティを普通の remove ルートで削除キューへ。
    pub fn collect_dead(&mut self) -> usize {
        let dead: Vec<EntityId> = self
            .live
            .iter()
            .filter(|slot| slot.has_tag(DEAD))
            .map(EntitySlot::id)
            .collect();
        // 直接消さずに、普通の remove と同じルートを通す (もうキューにいる子は二重に積まれない)
        for &id in &dead {
            self.remove(id);
        }
        dead.len()
    }

    /// 手順 4: 削除キューに入ってる ID をライブから取り除く。
    pub fn flush_removed(&mut self) -> usize {
        if self.pending_remove.is_empty() {
            return 0;
        }
        let before = self.live.len();
        // キューを取り出して空にしておく
        let pending = std::mem::take(&mut self.pending_remove);
        // retain で残す子だけ残す。ライブの順番は崩れないよ
        self.live.retain(|slot| !pending.contains(&slot.id()));
        let removed = before - self.live.len();
        debug!("Scene[{}]: removed {} entities (live {})", self.name, removed, self.live.len());
        removed
    }

    /// visible なエンティティに render を配る。render を持ってない子はスキップ。
    /// 描画中はシーンを読み取り専用で見せるだけ。
    pub fn render(&self, frame: FrameInfo<'_>, surface: &mut dyn Surface) -> usize {
        let mut ctx = RenderContext { frame, scene: self, surface };
        let mut rendered = 0;
        for slot in self.live.iter().filter(|slot| slot.has_tag(VISIBLE)) {
            if let Some(renderable) = slot.entity().as_renderable() {
                renderable.render(&mut ctx);
                rendered += 1;
            }
        }
        rendered
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("live", &self.live)
            .field("pending_add", &self.pending_add.len())
            .field("pending_remove", &self.pending_remove)
            .finish()
    }
}

/// update 中のエンティティがシーンに add/remove をお願いするための窓口。
/// ライブリストには触れない。キューに積むだけ！
pub struct SceneCommands<'a> {
    scene_name: &'a str,
    ids: &'a mut IdAllocator,
    live_ids: &'a [EntityId],
    pending_add: &'a mut Vec<EntitySlot>,
    pending_remove: &'a mut Vec<EntityId>,
}

impl SceneCommands<'_> {
    pub fn add<E: Entity + 'static>(&mut self, entity: E) -> EntityId {
        queue_add(self.scene_name, self.ids, self.pending_add, Box::new(entity))
    }

    pub fn remove(&mut self, id: impl Into<Option<EntityId>>) {
        let id = id.into();
        let is_live = id.map_or(false, |id| self.is_live(id));
        queue_remove(self.scene_name, self.pending_remove, id, is_live);
    }

    pub fn is_live(&self, id: EntityId) -> bool {
        self.live_ids.contains(&id)
    }
}

fn queue_add(
    scene_name: &str,
    ids: &mut IdAllocator,
    pending_add: &mut Vec<EntitySlot>,
    entity: Box<dyn Entity>,
) -> EntityId {
    // ID は単調増加のカウンタから。同じフレームで何個 add してもぶつからない！
    let id = ids.allocate();
    debug!("Scene[{}]: queued {:?} {} for add", scene_name, id, entity.tags());
    pending_add.push(EntitySlot::new(id, entity));
    id
}

// すでに削除キューにいる ID はもう一回積まない。
fn queue_remove(
    scene_name: &str,
    pending_remove: &mut Vec<EntityId>,
    id: Option<EntityId>,
    is_live: bool,
) {
    let Some(id) = id else {
        return;
    };
    if !is_live || pending_remove.contains(&id) {
        return;
    }
    debug!("Scene[{}]: queued {:?} for removal", scene_name, id);
    pending_remove.push(id);
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod scene_tests;
