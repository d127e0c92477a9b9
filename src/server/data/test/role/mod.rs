use crate::server::{data::role::RoleRepository, model::role::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign;
