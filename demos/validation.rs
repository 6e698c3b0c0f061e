//! Example: Task form validation
use todo_form::tasks::{task::Task, validator::TaskValidator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let validator = TaskValidator::new();

    let task = Task::new("Hi") // Invalid: title too short
        .description("Short") // Invalid: description too short
        .deadline("2020-01-01"); // Invalid: in the past
    let result = validator.validate(&task);
    if result.is_valid() {
        println!("Task is valid");
    } else {
        for (field, message) in result.errors() {
            println!("{}: {}", field, message);
        }
    }
    Ok(())
}
