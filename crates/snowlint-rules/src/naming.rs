//! Naming helpers shared by rules.

/// Whether `name` is exported, i.e. starts with an uppercase letter.
#[must_use]
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
