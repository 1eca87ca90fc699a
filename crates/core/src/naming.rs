//! Display-name helpers.

/// Candidate display name: first and last name joined by a single space.
///
/// Parts are used as stored; no trimming or case normalisation.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
