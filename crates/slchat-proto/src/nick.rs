//! Name validation.
//!
//! Nicknames and channel names share one rule: a name is valid iff it is
//! non-empty and every character is a letter (general category `L*`) or a
//! decimal digit (`Nd`). Other numerics such as `½`, `²` or `Ⅷ`, combining
//! marks, whitespace, punctuation and symbols are rejected.

use unicode_general_category::{GeneralCategory, get_general_category};

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Extension trait for checking whether a string is a valid name.
pub trait NameExt {
    /// Check if this string is a valid nickname or channel name.
    ///
    /// # Examples
    ///
    /// ```
    /// use slchat_proto::NameExt;
    ///
    /// assert!("User0".is_valid_name());
    /// assert!("42".is_valid_name());
    /// assert!("Zoë".is_valid_name());
    ///
    /// assert!(!"".is_valid_name());
    /// assert!(!"two words".is_valid_name());
    /// assert!(!"#room".is_valid_name());
    /// ```
    fn is_valid_name(&self) -> bool;
}

impl NameExt for &str {
    fn is_valid_name(&self) -> bool {
        !self.is_empty() && self.chars().all(is_letter_or_digit)
    }
}

impl NameExt for String {
    fn is_valid_name(&self) -> bool {
        self.as_str().is_valid_name()
    }
}

/// Free-function form of [`NameExt::is_valid_name`].
#[inline]
pub fn is_valid_name(name: &str) -> bool {
    name.is_valid_name()
}
