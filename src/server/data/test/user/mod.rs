use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;

fn create_param(telegram_id: &str, first_name: &str) -> CreateUserParam {
    CreateUserParam {
        telegram_id: telegram_id.to_string(),
        first_name: first_name.to_string(),
        last_name: None,
        username: None,
        registered_at: Utc::now(),
    }
}
