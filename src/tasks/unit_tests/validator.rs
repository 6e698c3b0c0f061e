use crate::tasks::{clock::FixedClock, validator::TaskValidator};

mod description;
mod title;

const TODAY: &str = "2026-10-19";

fn validator() -> TaskValidator<FixedClock> {
    TaskValidator::with_clock(FixedClock::from_iso(TODAY).unwrap())
}
