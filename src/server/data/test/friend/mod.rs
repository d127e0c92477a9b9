use crate::server::data::friend::FriendRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
