use crate::server::{data::player::PlayerRepository, model::player::CreatePlayerParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn create_param(email: &str, nickname: &str) -> CreatePlayerParam {
    CreatePlayerParam {
        email: email.to_string(),
        nickname: nickname.to_string(),
        password_hash: "hash".to_string(),
        coins: 0,
        skin_url: None,
        profile_image_url: None,
    }
}
