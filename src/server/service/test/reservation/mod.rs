use super::*;

mod create;
mod find;
mod update;
