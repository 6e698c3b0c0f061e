pub mod clock;
pub mod error;
pub mod result;
pub mod rules;
pub mod task;
pub mod validator;
