//! Example: Print tracing messages
use todo_form::{
    router::table::app_routes,
    tasks::{clock::FixedClock, task::Task, validator::TaskValidator},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19")?);
    let task = Task::new("Buy milk").deadline("2026-10-18");
    let result = validator.validate(&task);
    println!("Valid: {}, errors: {:?}", result.is_valid(), result.errors());

    for route in &app_routes() {
        println!("Route: {} ({}) -> {}", route.path, route.name, route.page);
    }
    Ok(())
}
