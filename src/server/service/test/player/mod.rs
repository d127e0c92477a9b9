use crate::server::{
    error::AppError,
    model::{player::UpdatePlayerParam, role::Role},
    service::player::PlayerService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_coins;
mod delete_player;
mod update_player;
