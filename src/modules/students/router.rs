use axum::{Router, routing::get};

use super::controller::{
    get_own_attendance, get_own_grades, get_own_subjects, get_student_attendance,
    get_student_grades, get_student_info,
};
use crate::state::AppState;

pub fn init_staff_students_router() -> Router<AppState> {
    Router::new()
        .route("/student-grades", get(get_student_grades))
        .route("/student-attendance", get(get_student_attendance))
        .route("/student-info", get(get_student_info))
}

pub fn init_student_router() -> Router<AppState> {
    Router::new()
        .route("/grades", get(get_own_grades))
        .route("/subjects", get(get_own_subjects))
        .route("/attendance", get(get_own_attendance))
}
