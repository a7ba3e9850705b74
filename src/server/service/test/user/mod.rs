use crate::server::{error::AppError, model::user::UpdateUserParams, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod update;
