use super::{compare, composite, null_check, Predicate};
use crate::sql::SqlValue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringFilter {
    pub equals: Option<String>,
    /// Substring match, rendered as `LIKE '%v%'`.
    pub contains: Option<String>,
    pub is_not: Option<String>,
    pub is_null: Option<bool>,
    pub or: Option<Vec<StringFilter>>,
    pub and: Option<Vec<StringFilter>>,
}

impl StringFilter {
    pub fn equals(value: impl Into<String>) -> Self {
        StringFilter { equals: Some(value.into()), ..Default::default() }
    }

    pub fn contains(value: impl Into<String>) -> Self {
        StringFilter { contains: Some(value.into()), ..Default::default() }
    }

    pub fn is_not(value: impl Into<String>) -> Self {
        StringFilter { is_not: Some(value.into()), ..Default::default() }
    }

    pub fn is_null(value: bool) -> Self {
        StringFilter { is_null: Some(value), ..Default::default() }
    }

    pub fn and(filters: Vec<StringFilter>) -> Self {
        StringFilter { and: Some(filters), ..Default::default() }
    }

    pub fn or(filters: Vec<StringFilter>) -> Self {
        StringFilter { or: Some(filters), ..Default::default() }
    }
}

impl Predicate for StringFilter {
    fn render(&self, column_key: &str) -> (String, Vec<SqlValue>) {
        if let Some(v) = &self.equals {
            compare(column_key, "=", v.as_str().into())
        } else if let Some(v) = &self.contains {
            compare(column_key, "LIKE", SqlValue::Text(format!("%{}%", v)))
        } else if let Some(v) = &self.is_not {
            compare(column_key, "!=", v.as_str().into())
        } else if let Some(v) = self.is_null {
            null_check(column_key, v)
        } else if let Some(filters) = &self.and {
            composite(filters, column_key, " AND ")
        } else if let Some(filters) = &self.or {
            composite(filters, column_key, " OR ")
        } else {
            (String::new(), Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::placeholder_count;

    #[test]
    fn contains_wraps_value_in_wildcards() {
        let (sql, params) = StringFilter::contains("ab").render("email");
        assert_eq!(sql, "email LIKE ?");
        assert_eq!(params, vec![SqlValue::Text("%ab%".into())]);
    }

    #[test]
    fn equals_and_is_not() {
        assert_eq!(
            StringFilter::equals("a@x.com").render("email"),
            ("email = ?".to_string(), vec![SqlValue::Text("a@x.com".into())])
        );
        assert_eq!(
            StringFilter::is_not("L").render("label"),
            ("label != ?".to_string(), vec![SqlValue::Text("L".into())])
        );
    }

    #[test]
    fn null_checks_bind_nothing() {
        assert_eq!(StringFilter::is_null(true).render("coverPhotoPath").0, "coverPhotoPath IS NULL");
        let (sql, params) = StringFilter::is_null(false).render("coverPhotoPath");
        assert_eq!(sql, "coverPhotoPath IS NOT NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn or_drops_empty_children() {
        let filter = StringFilter::or(vec![
            StringFilter::default(),
            StringFilter::contains("x"),
            StringFilter::equals("y"),
        ]);
        let (sql, params) = filter.render("label");
        assert_eq!(sql, "(label LIKE ? OR label = ?)");
        assert_eq!(placeholder_count(&sql), params.len());
    }

    #[test]
    fn equals_beats_contains() {
        let filter = StringFilter {
            contains: Some("a".into()),
            equals: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(filter.render("label").0, "label = ?");
    }

    #[test]
    fn empty_filter_renders_nothing() {
        assert_eq!(StringFilter::default().render("label"), (String::new(), Vec::new()));
        assert_eq!(StringFilter::and(Vec::new()).render("label"), (String::new(), Vec::new()));
    }
}
