use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
