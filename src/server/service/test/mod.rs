use crate::server::{
    error::{account::AccountError, reservation::ReservationError},
    model::{
        account::SignInParams,
        principal::Principal,
        reservation::{Accommodation, CreateReservationParams, UpdateReservationParams},
    },
    service::{account::AccountService, reservation::ReservationService},
    util::{password::digest_password, token::TokenCodec},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod reservation;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_params(accommodation: &str, check_in: &str, check_out: &str) -> CreateReservationParams {
    CreateReservationParams {
        destination: "Antalya".to_string(),
        check_in_date: check_in.to_string(),
        check_out_date: check_out.to_string(),
        accommodation: accommodation.to_string(),
        guest_count: 2,
    }
}

fn update_params(pnr: &str, check_in: &str, check_out: &str) -> UpdateReservationParams {
    UpdateReservationParams {
        pnr: pnr.to_string(),
        destination: "Bodrum".to_string(),
        check_in_date: check_in.to_string(),
        check_out_date: check_out.to_string(),
        accommodation: "mountain".to_string(),
        guest_count: 5,
    }
}
