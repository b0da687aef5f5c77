// src/content/mod.rs
//! デバッグルームに置くサンプルのエンティティたち。
//! コアから見るとただの「タグ + update/render できるかも」なモノ。

pub mod bullet;
pub mod debug;
pub mod player;
pub mod stars;

pub use bullet::PlayerBullet;
pub use debug::{DebugEntities, DebugInput, DebugSolids};
pub use player::PlayerShip;
pub use stars::Starfield;
