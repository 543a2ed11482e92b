use crate::server::{data::user::UserRepository, util::password::digest_password};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_credentials;
