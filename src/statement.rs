//! The statement compiler: turns one line of input into a [`Statement`].

use std::str::SplitWhitespace;

use crate::error::PrepareError;
use crate::row::Row;
use crate::{EMAIL_SIZE, USERNAME_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    /// Compiles `input` without looking at any table.
    ///
    /// `insert <id> <username> <email>` and a bare `select` are the only
    /// statements understood.
    pub fn prepare(input: &str) -> Result<Statement, PrepareError> {
        match input.strip_prefix("insert") {
            Some(args) if args.is_empty() || args.starts_with(char::is_whitespace) => {
                prepare_insert(args.split_whitespace())
            }
            _ if input == "select" => Ok(Statement::Select),
            _ => Err(PrepareError::UnrecognizedStatement(input.to_string())),
        }
    }
}

/// Anything after the email is ignored.
fn prepare_insert(mut args: SplitWhitespace<'_>) -> Result<Statement, PrepareError> {
    let (Some(id), Some(username), Some(email)) = (args.next(), args.next(), args.next()) else {
        return Err(PrepareError::SyntaxError);
    };

    let id = parse_id(id)?;
    if username.len() > USERNAME_SIZE || email.len() > EMAIL_SIZE {
        return Err(PrepareError::StringTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}

fn parse_id(token: &str) -> Result<u32, PrepareError> {
    match token.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            if digits.bytes().all(|b| b == b'0') {
                Ok(0)
            } else {
                Err(PrepareError::NegativeId)
            }
        }
        _ => token.parse::<u32>().map_err(|_| PrepareError::SyntaxError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepares_insert() {
        let statement = Statement::prepare("insert 1 user1 person1@example.com").unwrap();
        assert_eq!(
            statement,
            Statement::Insert(Row::new(1, "user1", "person1@example.com"))
        );
    }

    #[test]
    fn insert_tolerates_repeated_spaces() {
        let statement = Statement::prepare("insert  7   bob  bob@example.com").unwrap();
        assert_eq!(statement, Statement::Insert(Row::new(7, "bob", "bob@example.com")));
    }

    #[test]
    fn prepares_select() {
        assert_eq!(Statement::prepare("select").unwrap(), Statement::Select);
    }

    #[test]
    fn select_with_arguments_is_unrecognized() {
        assert_eq!(
            Statement::prepare("select *"),
            Err(PrepareError::UnrecognizedStatement("select *".to_string()))
        );
    }

    #[test]
    fn missing_email_is_syntax_error() {
        assert_eq!(Statement::prepare("insert 1 foo"), Err(PrepareError::SyntaxError));
    }

    #[test]
    fn bare_insert_is_syntax_error() {
        assert_eq!(Statement::prepare("insert"), Err(PrepareError::SyntaxError));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        assert_eq!(
            Statement::prepare("insert 1 foo foo@bar.com extra"),
            Ok(Statement::Insert(Row::new(1, "foo", "foo@bar.com")))
        );
    }

    #[test]
    fn leading_whitespace_is_unrecognized() {
        assert_eq!(
            Statement::prepare(" insert 1 a b"),
            Err(PrepareError::UnrecognizedStatement(" insert 1 a b".to_string()))
        );
        assert!(matches!(
            Statement::prepare("  select"),
            Err(PrepareError::UnrecognizedStatement(_))
        ));
    }

    #[test]
    fn non_numeric_id_is_syntax_error() {
        assert_eq!(
            Statement::prepare("insert one foo foo@bar.com"),
            Err(PrepareError::SyntaxError)
        );
    }

    #[test]
    fn id_past_u32_is_syntax_error() {
        let input = format!("insert {} foo foo@bar.com", u64::from(u32::MAX) + 1);
        assert_eq!(Statement::prepare(&input), Err(PrepareError::SyntaxError));

        let input = format!("insert {} foo foo@bar.com", u32::MAX);
        assert!(Statement::prepare(&input).is_ok());
    }

    #[test]
    fn negative_id_is_rejected() {
        assert_eq!(
            Statement::prepare("insert -1 user1 person1@example.com"),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn huge_negative_id_is_rejected_as_negative() {
        assert_eq!(
            Statement::prepare("insert -99999999999999999999 user1 person1@example.com"),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(
            Statement::prepare("insert -0 a a@b.c"),
            Ok(Statement::Insert(Row::new(0, "a", "a@b.c")))
        );
    }

    #[test]
    fn lone_minus_is_syntax_error() {
        assert_eq!(Statement::prepare("insert - a a@b.c"), Err(PrepareError::SyntaxError));
    }

    #[test]
    fn maximum_length_strings_are_accepted() {
        let username = "a".repeat(USERNAME_SIZE);
        let email = "b".repeat(EMAIL_SIZE);
        let input = format!("insert 1 {username} {email}");
        assert!(matches!(Statement::prepare(&input), Ok(Statement::Insert(_))));
    }

    #[test]
    fn oversized_username_is_rejected() {
        let input = format!("insert 1 {} a@b.c", "a".repeat(USERNAME_SIZE + 1));
        assert_eq!(Statement::prepare(&input), Err(PrepareError::StringTooLong));
    }

    #[test]
    fn oversized_email_is_rejected() {
        let input = format!("insert 1 user {}", "b".repeat(EMAIL_SIZE + 1));
        assert_eq!(Statement::prepare(&input), Err(PrepareError::StringTooLong));
    }

    #[test]
    fn unknown_keyword_is_unrecognized() {
        assert_eq!(
            Statement::prepare("delete 1"),
            Err(PrepareError::UnrecognizedStatement("delete 1".to_string()))
        );
    }

    #[test]
    fn keyword_is_case_sensitive() {
        assert!(matches!(
            Statement::prepare("INSERT 1 a b"),
            Err(PrepareError::UnrecognizedStatement(_))
        ));
        assert!(matches!(
            Statement::prepare("insertx 1 a b"),
            Err(PrepareError::UnrecognizedStatement(_))
        ));
    }
}
