//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the table, update this file by hand or regenerate it
//! with `diesel print-schema`.

diesel::table! {
    /// Support-staff directory.
    ///
    /// Rows are replaced wholesale by the seeding binary. `email` carries a
    /// unique index; `status` is constrained to the `EmployeeStatus` values.
    employees (id) {
        /// Primary key, generated by `gen_random_uuid()`.
        id -> Uuid,
        name -> Text,
        /// Lower-cased directory address.
        email -> Text,
        phone -> Text,
        role -> Text,
        department -> Text,
        specialties -> Array<Text>,
        languages -> Array<Text>,
        /// Years of experience, never negative.
        experience -> Int4,
        /// Average review rating in `0..=5`.
        rating -> Float4,
        total_reviews -> Int4,
        availability -> Text,
        /// One of `available`, `busy`, `offline`.
        status -> Text,
        response_time -> Text,
        bio -> Text,
        /// Row creation timestamp.
        created_at -> Timestamptz,
    }
}
