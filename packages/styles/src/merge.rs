//! Symmetry merge: paired side classes with the same value collapse into the
//! axis class (`pt-[8px] pb-[8px]` -> `py-[8px]`).

/// (first, second, merged)
const SYMMETRIC_PAIRS: &[(&str, &str, &str)] = &[
    ("pt", "pb", "py"),
    ("pl", "pr", "px"),
    ("mt", "mb", "my"),
    ("ml", "mr", "mx"),
    ("w", "h", "size"),
];

/// A utility class split into variant prefix, utility prefix and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityClass<'a> {
    /// `hover:md:` or empty
    pub variants: &'a str,
    pub prefix: &'a str,
    pub value: &'a str,
}

impl<'a> UtilityClass<'a> {
    /// Template conditionals (`${...}`) and classes without a value yield `None`
    pub fn parse(class: &'a str) -> Option<Self> {
        if class.starts_with('$') {
            return None;
        }

        let (variants, utility) = split_variants(class);
        let (prefix, value) = utility.split_once('-')?;
        if prefix.is_empty() || value.is_empty() {
            return None;
        }

        Some(Self {
            variants,
            prefix,
            value,
        })
    }
}

/// Split `hover:md:pt-[8px]` into (`hover:md:`, `pt-[8px]`). Colons inside
/// brackets belong to the utility.
pub fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;

    for (index, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(index),
            _ => {}
        }
    }

    match split {
        Some(index) => (&class[..=index], &class[index + 1..]),
        None => ("", class),
    }
}

pub fn merge_symmetric(mut classes: Vec<String>) -> Vec<String> {
    for (first, second, merged) in SYMMETRIC_PAIRS {
        let mut index = 0;
        while index < classes.len() {
            if let Some((partner, replacement)) = find_partner(&classes, index, first, second, merged)
            {
                classes[index] = replacement;
                classes.remove(partner);
            }
            index += 1;
        }
    }
    classes
}

fn find_partner(
    classes: &[String],
    index: usize,
    first: &str,
    second: &str,
    merged: &str,
) -> Option<(usize, String)> {
    let class = UtilityClass::parse(&classes[index])?;
    let wanted = if class.prefix == first {
        second
    } else if class.prefix == second {
        first
    } else {
        return None;
    };

    let partner = classes
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, other)| {
            UtilityClass::parse(other).map_or(false, |o| {
                o.prefix == wanted && o.variants == class.variants && o.value == class.value
            })
        })
        .map(|(i, _)| i)?;

    Some((
        partner,
        format!("{}{}-{}", class.variants, merged, class.value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(classes: &[&str]) -> Vec<String> {
        merge_symmetric(classes.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_split_variants() {
        assert_eq!(split_variants("hover:md:pt-[8px]"), ("hover:md:", "pt-[8px]"));
        assert_eq!(split_variants("[border-style:dashed]"), ("", "[border-style:dashed]"));
        assert_eq!(split_variants("flex"), ("", "flex"));
    }

    #[test]
    fn test_merge_pairs() {
        assert_eq!(merge(&["pt-[8px]", "pb-[8px]"]), vec!["py-[8px]"]);
        assert_eq!(merge(&["pr-[4px]", "flex", "pl-[4px]"]), vec!["px-[4px]", "flex"]);
        assert_eq!(merge(&["w-full", "h-full"]), vec!["size-full"]);
        assert_eq!(merge(&["mb-[2px]", "mt-[2px]"]), vec!["my-[2px]"]);
    }

    #[test]
    fn test_no_merge_on_mismatch() {
        assert_eq!(merge(&["pt-[8px]", "pb-[4px]"]), vec!["pt-[8px]", "pb-[4px]"]);
        assert_eq!(
            merge(&["hover:pt-[8px]", "pb-[8px]"]),
            vec!["hover:pt-[8px]", "pb-[8px]"]
        );
        assert_eq!(merge(&["min-w-[4px]", "min-h-[4px]"]), vec!["min-w-[4px]", "min-h-[4px]"]);
    }

    #[test]
    fn test_merge_keeps_variants() {
        assert_eq!(merge(&["hover:pl-[1px]", "hover:pr-[1px]"]), vec!["hover:px-[1px]"]);
    }
}
