use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use mercury_models::{
    Account, Attendance, AttendanceStatus, ChangePasswordRequest, Class, ClassMember,
    ClassMemberInfo, CreateAttendanceDto, CreateClassDto, CreateClassMemberDto, CreateExamDto,
    CreateGradeDto, CreateStudentSubjectDto, CreateSubjectDto, CreateTimetableEntryDto, Exam,
    Grade, GradeType, LoginRequest, LoginResponse, MessageResponse, Profile, RegisterRequest,
    RegisterResponse, Role, StudentInfo, Subject, TimetableEntry, UserInfo,
};

use crate::modules::lucky_number::model::LuckyNumberResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::health::controller::ping,
        crate::modules::lucky_number::controller::get_lucky_number,
        crate::modules::accounts::controller::register,
        crate::modules::accounts::controller::change_password,
        crate::modules::accounts::controller::delete_account,
        crate::modules::accounts::controller::get_user,
        crate::modules::timetable::controller::add_timetable_entry,
        crate::modules::timetable::controller::get_timetable,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::add_class_member,
        crate::modules::classes::controller::get_class,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::add_student_subject,
        crate::modules::grades::controller::add_grade,
        crate::modules::attendance::controller::add_attendance,
        crate::modules::exams::controller::add_exam,
        crate::modules::exams::controller::get_exams,
        crate::modules::students::controller::get_student_grades,
        crate::modules::students::controller::get_student_attendance,
        crate::modules::students::controller::get_student_info,
        crate::modules::students::controller::get_own_grades,
        crate::modules::students::controller::get_own_subjects,
        crate::modules::students::controller::get_own_attendance,
    ),
    components(
        schemas(
            Role,
            Account,
            Profile,
            UserInfo,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            RegisterResponse,
            ChangePasswordRequest,
            MessageResponse,
            Class,
            CreateClassDto,
            ClassMember,
            CreateClassMemberDto,
            ClassMemberInfo,
            Subject,
            CreateSubjectDto,
            CreateStudentSubjectDto,
            TimetableEntry,
            CreateTimetableEntryDto,
            Grade,
            GradeType,
            CreateGradeDto,
            Attendance,
            AttendanceStatus,
            CreateAttendanceDto,
            Exam,
            CreateExamDto,
            StudentInfo,
            LuckyNumberResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and session tokens"),
        (name = "Accounts", description = "Registration, password change and account deletion"),
        (name = "Timetable", description = "Class timetables"),
        (name = "Classes", description = "Classes and class membership"),
        (name = "Subjects", description = "Subjects and enrolment"),
        (name = "Grades", description = "Student grades"),
        (name = "Attendance", description = "Student attendance"),
        (name = "Exams", description = "Exams, tests and quizzes"),
        (name = "Students", description = "Student records"),
        (name = "Misc", description = "Health check and lucky number")
    ),
    info(
        title = "Mercury API",
        version = "0.1.0",
        description = "School management REST API: timetables, grades, attendance and exams behind role-gated JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_guarded_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/login"));
        assert!(doc.paths.paths.contains_key("/api/admin/register"));
        assert!(doc.paths.paths.contains_key("/api/student/grades"));
    }
}
