pub mod extract;
pub mod mentors;
pub mod students;
