//! Hook bodies, grouped by what the abilities do.

pub mod absorb;
pub mod after_move;
pub mod guards;
pub mod immunity;
pub mod modifiers;
pub mod switch_in;

use crate::battle::descriptor::MoveDescriptor;

/// Lowercase a move name and drop everything but letters and digits, so
/// "Self-Destruct" and "selfdestruct" match the same keyword.
pub(crate) fn compact_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub(crate) fn name_matches(name: &str, keywords: &[&str]) -> bool {
    let compact = compact_name(name);
    keywords.iter().any(|keyword| compact.contains(keyword))
}

/// Moves that deal direct damage.
pub(crate) fn is_attack(descriptor: &MoveDescriptor) -> bool {
    descriptor.data.is_damaging()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hyphenated", "Self-Destruct", &["selfdestruct"], true)]
    #[case("spaced", "Hyper Voice", &["hypervoice"], true)]
    #[case("substring", "Thunder Punch", &["punch"], true)]
    #[case("no match", "Tackle", &["roar", "whirlwind"], false)]
    fn test_name_matches(
        #[case] _desc: &str,
        #[case] name: &str,
        #[case] keywords: &[&str],
        #[case] expected: bool,
    ) {
        assert_eq!(name_matches(name, keywords), expected);
    }
}
