//! Custom message selection shared by rule constructors.
//!
//! Rules take their optional custom message as a slice so the `nonzero!`,
//! `len!` and `assert_that!` macros can forward whatever the caller wrote.
//! Zero messages picks the default, one picks it, more is a bug in the
//! caller and aborts construction.
//!
//! A custom message may be built at runtime; it is copied into the rule.

use super::error::RuleError;
use std::borrow::Cow;

/// Picks the message for `rule`, or reports why it cannot.
pub fn try_select(
    rule: &'static str,
    default: &'static str,
    messages: &[&str],
) -> Result<Cow<'static, str>, RuleError> {
    match messages {
        [] => Ok(Cow::Borrowed(default)),
        [message] => Ok(Cow::Owned((*message).to_owned())),
        _ => Err(RuleError::TooManyMessages {
            rule,
            count: messages.len(),
        }),
    }
}

/// Picks the message for `rule`.
///
/// # Panics
///
/// Panics if more than one message is given.
#[track_caller]
pub fn select(
    rule: &'static str,
    default: &'static str,
    messages: &[&str],
) -> Cow<'static, str> {
    match try_select(rule, default, messages) {
        Ok(message) => message,
        Err(error) => panic!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_when_none_given() {
        assert_eq!(select("Nonzero", "is zero valued", &[]), "is zero valued");
    }

    #[test]
    fn custom_when_one_given() {
        assert_eq!(select("Nonzero", "is zero valued", &["is required"]), "is required");
    }

    #[test]
    fn runtime_message_is_copied() {
        let limit = 5;
        let message = format!("must be at most {limit} long");
        let selected = select("Len", "with an invalid length", &[message.as_str()]);
        drop(message);
        assert_eq!(selected, "must be at most 5 long");
    }

    #[test]
    fn too_many_is_reported() {
        assert_eq!(
            try_select("Len", "with an invalid length", &["a", "b", "c"]),
            Err(RuleError::TooManyMessages {
                rule: "Len",
                count: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "`Assert` only accepts at most one message, got 2")]
    fn too_many_panics() {
        let _ = select("Assert", "is invalid", &["a", "b"]);
    }
}
