use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_credentials_by_mail;
mod get_all;
mod username_taken;

fn params(username: Option<&str>, mail: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.map(str::to_string),
        mail: mail.to_string(),
        password_hash: "$2b$04$not-a-real-hash".to_string(),
    }
}
