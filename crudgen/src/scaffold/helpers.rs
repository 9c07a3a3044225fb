//! Naming helpers for code generation
//!
//! Generated JavaScript keeps the model name as typed for variables and file
//! names, and uses a capitalized form for the Mongoose model and handler names.

/// Naming helpers used by the renderers and templates
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Upper-case the first character, leave the rest unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize("user"), "User");
    /// assert_eq!(TemplateHelpers::capitalize("blogPost"), "BlogPost");
    /// assert_eq!(TemplateHelpers::capitalize(""), "");
    /// ```
    #[must_use]
    pub fn capitalize(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Collection form used for "all" handlers and list variables
    ///
    /// This is a plain `s` suffix, which is what generated handler names
    /// (`getAllUsers`) have always used.
    ///
    /// ```
    /// # use crudgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_plural("user"), "users");
    /// ```
    #[must_use]
    pub fn to_plural(input: &str) -> String {
        format!("{input}s")
    }

    /// Route mount path for a model
    ///
    /// ```
    /// # use crudgen::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_path("user"), "/user");
    /// ```
    #[must_use]
    pub fn to_route_path(model: &str) -> String {
        format!("/{model}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(TemplateHelpers::capitalize("user"), "User");
        assert_eq!(TemplateHelpers::capitalize("User"), "User");
        assert_eq!(TemplateHelpers::capitalize("u"), "U");
        assert_eq!(TemplateHelpers::capitalize("userProfile"), "UserProfile");
        assert_eq!(TemplateHelpers::capitalize("string"), "String");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(TemplateHelpers::capitalize(""), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(TemplateHelpers::capitalize("école"), "École");
        assert_eq!(TemplateHelpers::capitalize("ßtraße"), "SStraße");
    }

    #[test]
    fn test_capitalize_leaves_rest() {
        assert_eq!(TemplateHelpers::capitalize("hTTP"), "HTTP");
        assert_eq!(TemplateHelpers::capitalize("1st"), "1st");
    }

    #[test]
    fn test_plural() {
        assert_eq!(TemplateHelpers::to_plural("post"), "posts");
        assert_eq!(TemplateHelpers::to_plural("category"), "categorys");
    }

    #[test]
    fn test_route_path() {
        assert_eq!(TemplateHelpers::to_route_path("post"), "/post");
    }
}
