//! Incremental `WHERE` clause construction with numbered SQLite parameters.
//!
//! Fragments are written with a `{}` marker where the bound value belongs. The
//! marker is replaced by `?N`, `N` being the value's position in the parameter
//! list at the moment it is pushed, so placeholder numbering always matches
//! the order values are bound in.

const PLACEHOLDER: &str = "{}";

/// Season type used when the caller does not supply one.
pub const DEFAULT_SEASON_TYPE: &str = "regular";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    fragments: Vec<String>,
    params: Vec<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `fragment`, binding `value` to every `{}` marker in it.
    pub fn push(&mut self, fragment: &str, value: impl Into<String>) -> &mut Self {
        self.params.push(value.into());
        let placeholder = format!("?{}", self.params.len());
        self.fragments.push(fragment.replace(PLACEHOLDER, &placeholder));
        self
    }

    /// Appends `fragment` only when `value` is present.
    pub fn push_opt(&mut self, fragment: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.push(fragment, value);
        }
        self
    }

    /// Case-insensitive equality against a text column.
    pub fn push_name(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        self.push_opt(&format!("LOWER({column}) = LOWER({PLACEHOLDER})"), value)
    }

    /// Case-insensitive match against either of two columns, sharing one parameter.
    pub fn push_either_name(&mut self, first: &str, second: &str, value: Option<&str>) -> &mut Self {
        self.push_opt(
            &format!(
                "(LOWER({first}) = LOWER({PLACEHOLDER}) OR LOWER({second}) = LOWER({PLACEHOLDER}))"
            ),
            value,
        )
    }

    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Renders the clause, or an empty string when nothing was pushed.
    pub fn to_sql(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("WHERE {}", self.fragments.join(" AND "))
    }
}

/// Treats empty query-string values the same as missing ones.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
