use crate::server::{
    data::reservation::{ReservationRepository, UpdateOutcome},
    model::reservation::{Accommodation, NewReservation, ReservationChanges},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_all_owned;
mod find_owned;
mod update_owned;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
