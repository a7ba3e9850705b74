use crate::server::{
    data::favorite::FavoriteRepository,
    model::favorite::{FavoriteKind, FavoriteParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_by_user;

fn params(kind: FavoriteKind, user_id: i32, target_id: i32) -> FavoriteParams {
    FavoriteParams {
        kind,
        user_id,
        target_id,
    }
}
