//! Free-text search over a configurable set of fields.
//!
//! Search is case-insensitive substring matching. Fields are exposed through
//! typed accessors; an accessor returning `None` (no textual value for the
//! item) never matches, it is skipped rather than coerced.

/// A typed accessor for a searchable text field.
///
/// Returning `None` marks the field as having no textual value for this
/// item, which never matches a search term.
pub type TextField<T> = fn(&T) -> Option<&str>;

/// Returns true if any of the item's fields contains the lowercased needle.
pub(crate) fn matches_term<T>(item: &T, fields: &[TextField<T>], needle_lower: &str) -> bool {
    fields
        .iter()
        .any(|field| field(item).is_some_and(|value| value.to_lowercase().contains(needle_lower)))
}

/// Filters items by a free-text search term over the given fields.
///
/// Returns the subsequence of `items` (input order preserved) where at least
/// one field contains the term, compared case-insensitively. A term that is
/// blank after trimming matches everything, so the input comes back
/// unchanged. Filtering twice with the same term yields the same result as
/// filtering once.
///
/// # Examples
///
/// ```
/// use books_engine::query::search;
///
/// struct Contact {
///     name: String,
///     company: String,
/// }
///
/// let contacts = vec![
///     Contact { name: "Asha Rahman".to_string(), company: "Acme Traders".to_string() },
///     Contact { name: "Marco Díaz".to_string(), company: "Harborview".to_string() },
/// ];
/// let fields: Vec<fn(&Contact) -> Option<&str>> = vec![
///     |c| Some(&c.name),
///     |c| Some(&c.company),
/// ];
///
/// let hits = search(&contacts, &fields, "acme");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Asha Rahman");
///
/// // A blank term is the identity
/// assert_eq!(search(&contacts, &fields, "  ").len(), 2);
/// ```
pub fn search<'a, T>(items: &'a [T], fields: &[TextField<T>], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| matches_term(*item, fields, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contact {
        name: String,
        company: String,
        notes: Option<String>,
    }

    fn contact(name: &str, company: &str, notes: Option<&str>) -> Contact {
        Contact {
            name: name.to_string(),
            company: company.to_string(),
            notes: notes.map(str::to_string),
        }
    }

    fn create_contacts() -> Vec<Contact> {
        vec![
            contact("Asha Rahman", "Acme Traders", Some("net 30")),
            contact("Marco Díaz", "Harborview Consulting", None),
            contact("Priya Nair", "Northwind Supplies", Some("prefers email")),
        ]
    }

    fn all_fields() -> Vec<TextField<Contact>> {
        vec![
            |c| Some(&c.name),
            |c| Some(&c.company),
            |c| c.notes.as_deref(),
        ]
    }

    #[test]
    fn test_blank_term_returns_all_items() {
        let contacts = create_contacts();
        let fields = all_fields();
        assert_eq!(search(&contacts, &fields, "").len(), 3);
        assert_eq!(search(&contacts, &fields, "   ").len(), 3);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let contacts = create_contacts();
        let fields = all_fields();

        let hits = search(&contacts, &fields, "ACME");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Asha Rahman");
    }

    #[test]
    fn test_substring_matches_any_field() {
        let contacts = create_contacts();
        let fields = all_fields();

        // "email" only appears in a notes field
        let hits = search(&contacts, &fields, "email");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Priya Nair");
    }

    #[test]
    fn test_none_fields_never_match() {
        let contacts = create_contacts();
        let notes_only: Vec<TextField<Contact>> = vec![|c| c.notes.as_deref()];

        // Marco has no notes, so he cannot match even on his own name
        let hits = search(&contacts, &notes_only, "marco");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let contacts = create_contacts();
        let fields = all_fields();
        assert!(search(&contacts, &fields, "zzz").is_empty());
    }

    #[test]
    fn test_input_order_is_preserved() {
        let contacts = create_contacts();
        let fields = all_fields();

        // "a" matches every contact; order must be unchanged
        let hits = search(&contacts, &fields, "a");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rahman", "Marco Díaz", "Priya Nair"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let contacts = create_contacts();
        let fields = all_fields();

        let once = search(&contacts, &fields, "acme");
        let once_names: Vec<&str> = once.iter().map(|c| c.name.as_str()).collect();

        let cloned: Vec<Contact> = once
            .iter()
            .map(|c| contact(&c.name, &c.company, c.notes.as_deref()))
            .collect();
        let twice = search(&cloned, &fields, "acme");
        let twice_names: Vec<&str> = twice.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(once_names, twice_names);
    }

    #[test]
    fn test_term_is_trimmed_before_matching() {
        let contacts = create_contacts();
        let fields = all_fields();

        let hits = search(&contacts, &fields, "  acme  ");
        assert_eq!(hits.len(), 1);
    }
}
