mod reservation;
mod user;
