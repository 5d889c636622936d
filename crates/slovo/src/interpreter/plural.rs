//! Numeral agreement for Russian nouns and their modifiers.
//!
//! A counted word takes one of three shapes depending on the last digits of
//! the count:
//! - "one": 1, 21, 101 ... (but not 11, 111) → singular
//! - "few": 2-4, 22-24 ... (but not 12-14) → plural, case kept
//! - "many": everything else → plural, nominative/accusative become genitive
//!
//! These match the CLDR cardinal categories for `ru` on integers.

use crate::types::{AttributeSet, Case, Number};

/// Plural class of an integer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralClass {
    One,
    Few,
    Many,
}

/// Classify a count. Negative counts classify by absolute value.
///
/// # Examples
///
/// ```
/// use slovo::interpreter::{PluralClass, plural_class};
///
/// assert_eq!(plural_class(1), PluralClass::One);
/// assert_eq!(plural_class(3), PluralClass::Few);
/// assert_eq!(plural_class(11), PluralClass::Many);
/// assert_eq!(plural_class(121), PluralClass::One);
/// ```
pub fn plural_class(count: i64) -> PluralClass {
    let n = count.unsigned_abs() % 100;
    let last = n % 10;
    if last == 1 && n != 11 {
        PluralClass::One
    } else if (2..=4).contains(&last) && !(12..=14).contains(&n) {
        PluralClass::Few
    } else {
        PluralClass::Many
    }
}

/// Adjust `attrs` for a word counted by `count`.
pub fn pluralize(count: i64, attrs: &mut AttributeSet) {
    match plural_class(count) {
        PluralClass::One => attrs.number = Number::Singular,
        PluralClass::Few => attrs.number = Number::Plural,
        PluralClass::Many => {
            attrs.number = Number::Plural;
            if matches!(attrs.case, Case::Nominative | Case::Accusative) {
                attrs.case = Case::Genitive;
            }
        }
    }
}

/// Return a copy of `attrs` adjusted for `count`.
pub fn pluralized(count: i64, mut attrs: AttributeSet) -> AttributeSet {
    pluralize(count, &mut attrs);
    attrs
}
