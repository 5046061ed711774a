mod helpers;

mod discovery;
mod round_trip;
