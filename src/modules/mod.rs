pub mod accounts;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod exams;
pub mod grades;
pub mod health;
pub mod lucky_number;
pub mod students;
pub mod subjects;
pub mod timetable;
