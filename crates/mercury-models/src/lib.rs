//! # Mercury Models
//!
//! Database rows, request DTOs and response bodies for the Mercury API.
//!
//! - [`ids`]: typed integer identifiers
//! - [`accounts`]: accounts, profiles, registration and password change
//! - [`auth`]: login request/response
//! - [`classes`]: classes and class membership
//! - [`subjects`]: subjects and student enrolment
//! - [`timetable`]: timetable entries
//! - [`grades`]: grades, comments and custom marks
//! - [`attendance`]: attendance records
//! - [`exams`]: exams, tests and quizzes
//! - [`students`]: aggregated student information
//! - [`serde_helpers`]: lenient deserializers for client-supplied fields
//! - [`validation`]: shared field validators

pub mod accounts;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod exams;
pub mod grades;
pub mod ids;
pub mod serde_helpers;
pub mod students;
pub mod subjects;
pub mod timetable;
pub mod validation;

pub use mercury_auth::Role;

pub use accounts::{
    Account, ChangePasswordRequest, NewProfile, Profile, RegisterRequest, RegisterResponse,
    UserInfo,
};
pub use attendance::{Attendance, AttendanceStatus, CreateAttendanceDto};
pub use auth::{LoginRequest, LoginResponse, MessageResponse};
pub use classes::{Class, ClassMember, ClassMemberInfo, ClassQuery, CreateClassDto, CreateClassMemberDto};
pub use exams::{CreateExamDto, Exam, ExamQuery};
pub use grades::{CreateGradeDto, Grade, GradeType};
pub use ids::{AccountId, ClassId, RecordId, SubjectId};
pub use students::{StudentInfo, StudentQuery};
pub use subjects::{CreateStudentSubjectDto, CreateSubjectDto, Subject};
pub use timetable::{CreateTimetableEntryDto, TimetableEntry, TimetableQuery};
