//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Personnel records.
    employees (id) {
        /// Primary key, `gen_random_uuid()` on insert.
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        /// Always greater than zero (CHECK constraint).
        age -> Int4,
        department -> Varchar,
        /// Whole currency units, never negative (CHECK constraint).
        salary -> Int8,
        /// Insertion time; drives list ordering.
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
