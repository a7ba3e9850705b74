use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::LoginParams, user::RegisterUserParams},
    service::auth::{token::TokenService, CredentialService},
};
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod register;

const TEST_BCRYPT_COST: u32 = 4;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::minutes(60))
}

fn register_params(username: Option<&str>, mail: &str, password: &str) -> RegisterUserParams {
    RegisterUserParams {
        username: username.map(str::to_string),
        mail: mail.to_string(),
        password: password.to_string(),
    }
}
