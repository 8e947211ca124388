/// CRUD coverage for the tables the site reads and writes; runs against a
/// real Postgres and skips gracefully when none is configured.
pub mod crud_tests;
