//! Diesel row structs for the employee directory.
//!
//! Internal to the persistence layer; adapters convert between these rows
//! and domain types.

use diesel::prelude::*;

use super::schema::employees;

/// Insertable employee row borrowing from a domain `Employee`.
///
/// `id` and `created_at` are filled in by column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub role: &'a str,
    pub department: &'a str,
    pub specialties: &'a [String],
    pub languages: &'a [String],
    pub experience: i32,
    pub rating: f32,
    pub total_reviews: i32,
    pub availability: &'a str,
    pub status: &'a str,
    pub response_time: &'a str,
    pub bio: &'a str,
}
