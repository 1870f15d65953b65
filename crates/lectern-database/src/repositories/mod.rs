//! Concrete repository implementations for catalog entities.

pub mod file;
pub mod folder;
pub mod user;

pub use file::FileRepository;
pub use folder::FolderRepository;
pub use user::UserRepository;

/// Escape LIKE wildcards (`%`, `_`) and the escape character itself so a
/// value can be embedded in a LIKE pattern as a literal. All patterns built
/// from this use `ESCAPE '\'`.
pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("/Lectures"), "/Lectures");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
