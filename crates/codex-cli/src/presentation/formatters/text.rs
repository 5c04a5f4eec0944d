/// Separator between category and affinity names on spotlight cards.
pub const DOT_SEPARATOR: &str = " • ";

/// Title-cases identifiers like `ice_storm` into `Ice Storm`.
///
/// Any run of non-alphanumeric characters becomes one space; the result is
/// trimmed.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut new_word = true;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if new_word {
                result.extend(ch.to_uppercase());
                new_word = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        } else {
            if !result.is_empty() && !result.ends_with(' ') {
                result.push(' ');
            }
            new_word = true;
        }
    }

    result.trim().to_string()
}

/// Title-cased affinities joined with `•`, or `Unaligned` when there are none.
pub fn join_affinities(affinities: &[String]) -> String {
    if affinities.is_empty() {
        return "Unaligned".to_string();
    }

    affinities
        .iter()
        .map(|affinity| title_case(affinity))
        .collect::<Vec<_>>()
        .join(DOT_SEPARATOR)
}

/// `Category • Affinity • Affinity`, dropping the category when blank.
pub fn category_line(category: &str, affinities: &[String]) -> String {
    let category = title_case(category);
    let affinities = join_affinities(affinities);
    if category.is_empty() {
        affinities
    } else {
        format!("{category}{DOT_SEPARATOR}{affinities}")
    }
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ice_storm"), "Ice Storm");
        assert_eq!(title_case("  metal "), "Metal");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("FIRE"), "Fire");
        assert_eq!(title_case("nine--treasure  pagoda"), "Nine Treasure Pagoda");
        assert_eq!(title_case("grade7beast"), "Grade7beast");
        assert_eq!(title_case("__"), "");
    }

    #[test]
    fn test_join_affinities() {
        assert_eq!(join_affinities(&[]), "Unaligned");
        assert_eq!(
            join_affinities(&["fire".to_string(), "ICE_STORM".to_string()]),
            "Fire • Ice Storm"
        );
    }

    #[test]
    fn test_category_line() {
        assert_eq!(
            category_line("tool", &["Metal".to_string(), "lightning".to_string()]),
            "Tool • Metal • Lightning"
        );
        assert_eq!(category_line("", &[]), "Unaligned");
        assert_eq!(category_line("beast", &[]), "Beast • Unaligned");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "soul", "souls"), "1 soul");
        assert_eq!(pluralize(0, "soul", "souls"), "0 souls");
        assert_eq!(pluralize(12, "entry", "entries"), "12 entries");
    }
}
