use super::full_name::{FullName, SEPARATORS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn from_full_name(full_name: &FullName) -> Self {
        let mut tokens = full_name
            .as_ref()
            .split(SEPARATORS)
            .filter(|token| !token.is_empty());

        let first_name = tokens.next().unwrap_or_default().to_owned();
        let last_name = tokens.collect::<Vec<_>>().join(" ");

        Self {
            first_name,
            last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(full_name: &str) -> User {
        let full_name = FullName::parse(full_name).unwrap();

        User::from_full_name(&full_name)
    }

    #[test]
    fn splits_first_and_last() {
        let user = split("山田 太郎");

        assert_eq!(user.first_name, "山田");
        assert_eq!(user.last_name, "太郎");
    }

    #[test]
    fn joins_remaining_tokens_with_single_spaces() {
        let user = split("John Michael Smith");

        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Michael Smith");
    }

    #[test]
    fn splits_on_ideographic_space() {
        let user = split("田中\u{3000}花子");

        assert_eq!(user.first_name, "田中");
        assert_eq!(user.last_name, "花子");
    }

    #[test]
    fn collapses_separator_runs() {
        let user = split("John  Michael\u{3000}Smith");

        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Michael Smith");
    }

    #[test]
    fn trailing_separator_run_leaves_last_name_empty() {
        // "山田  " passes validation because the regex treats the second
        // space as an ordinary character
        let user = split("山田  ");

        assert_eq!(user.first_name, "山田");
        assert_eq!(user.last_name, "");
    }
}
