//! # Mercury API
//!
//! A school-management REST backend built with Axum and SQLite. It
//! authenticates students, teachers and admins, and exposes timetables,
//! grades, attendance, exams, classes and personal records behind
//! role-gated session tokens.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # authenticate + role guards, AuthUser extractor
//! ├── modules/          # feature modules
//! │   ├── auth/         # login
//! │   ├── accounts/     # register, change password, delete account
//! │   ├── classes/      # classes and members
//! │   ├── subjects/     # subjects and enrolment
//! │   ├── timetable/
//! │   ├── grades/
//! │   ├── attendance/
//! │   ├── exams/
//! │   ├── students/     # staff and student views of student records
//! │   ├── lucky_number/ # daily cached lucky number
//! │   └── health/       # ping
//! └── utils/            # constraint violation mapping
//! ```
//!
//! Each feature module keeps the same layout: `controller.rs` for handlers,
//! `service.rs` for data access and `router.rs` for routes. Request and
//! response types live in `mercury-models`.
//!
//! ## Roles
//!
//! | Route prefix | Guard |
//! |---|---|
//! | `/api/login`, `/api/ping`, `/api/lucky-number` | none |
//! | `/api/*` (other top-level routes) | any valid token |
//! | `/api/admin/*` | `admin` |
//! | `/api/teacher/*` | `teacher` |
//! | `/api/student/*` | `student` |
//!
//! Role guards compare the token's role and then the account's current
//! role in the store, so a role change takes effect before the token
//! expires.
//!
//! ## Configuration
//!
//! ```bash
//! JWT_KEY=change-me
//! ADMIN_EMAIL=admin@school.test
//! ADMIN_PASSWORD=change-me-too
//! DB_PATH=./database.db
//! PORT=10800
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use mercury_auth;
pub use mercury_config;
pub use mercury_core;
pub use mercury_db;
pub use mercury_models;
