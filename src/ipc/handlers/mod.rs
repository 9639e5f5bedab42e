pub mod awards;
pub mod core;
pub mod filters;
pub mod person;
pub mod students;
pub mod teachers;
