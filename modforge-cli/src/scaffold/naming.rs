//! Resource name normalization
//!
//! Turns operator input such as `user`, `Blog Post` or `order_item2` into the
//! identifier forms the generated TypeScript uses:
//!
//! - the *identifier* (`blogPost`): variables, imports and file names
//! - the *capitalized* form (`BlogPost`): types and function names
//!
//! Names made only of ASCII letters are lowercased. Anything else (digits,
//! punctuation, whitespace) acts as a word separator and the words are joined
//! in camelCase.

use inflector::Inflector;

use crate::error::{Result, ScaffoldError};

/// A normalized resource name with its derived case variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    raw: String,
    identifier: String,
    capitalized: String,
}

impl ResourceName {
    /// Normalize a raw resource name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidResourceName`] when the input holds no
    /// ASCII letter, since nothing usable as an identifier would remain.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modforge_cli_lib::scaffold::naming::ResourceName;
    /// let name = ResourceName::parse("blog post").unwrap();
    /// assert_eq!(name.identifier(), "blogPost");
    /// assert_eq!(name.capitalized(), "BlogPost");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let identifier =
            normalize(raw).ok_or_else(|| ScaffoldError::InvalidResourceName(raw.to_string()))?;
        let capitalized = capitalize(&identifier);

        Ok(Self {
            raw: raw.to_string(),
            identifier,
            capitalized,
        })
    }

    /// Name as supplied by the operator
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// camelCase identifier (`blogPost`)
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Capitalized identifier (`BlogPost`)
    #[must_use]
    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// kebab-case form (`blog-post`)
    #[must_use]
    pub fn kebab(&self) -> String {
        self.identifier.to_kebab_case()
    }

    /// Plural identifier (`blogPosts`)
    #[must_use]
    pub fn plural(&self) -> String {
        self.kebab().to_plural().to_camel_case()
    }

    /// Plural capitalized identifier (`BlogPosts`)
    #[must_use]
    pub fn plural_capitalized(&self) -> String {
        capitalize(&self.plural())
    }

    /// HTTP mount path (`/blog-posts`)
    #[must_use]
    pub fn route_path(&self) -> String {
        format!("/{}", self.kebab().to_plural())
    }
}

/// Whether the input contains anything besides ASCII letters
#[must_use]
pub fn has_separators(raw: &str) -> bool {
    raw.chars().any(|c| !c.is_ascii_alphabetic())
}

/// Normalize a raw name to its identifier form
///
/// Returns `None` if the input has no ASCII letters.
///
/// # Examples
///
/// ```
/// # use modforge_cli_lib::scaffold::naming::normalize;
/// assert_eq!(normalize("User").as_deref(), Some("user"));
/// assert_eq!(normalize("--order  item--").as_deref(), Some("orderItem"));
/// assert_eq!(normalize("2024"), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    if !has_separators(raw) {
        return (!raw.is_empty()).then(|| raw.to_ascii_lowercase());
    }

    let mut words = raw
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase);

    let mut identifier = words.next()?;
    for word in words {
        identifier.push_str(&capitalize(&word));
    }

    Some(identifier)
}

/// Uppercase the first character, leave the rest untouched
///
/// # Examples
///
/// ```
/// # use modforge_cli_lib::scaffold::naming::capitalize;
/// assert_eq!(capitalize("blogPost"), "BlogPost");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_names_are_lowercased() {
        assert_eq!(normalize("user").as_deref(), Some("user"));
        assert_eq!(normalize("UserProfile").as_deref(), Some("userprofile"));
        assert_eq!(normalize("BLOG").as_deref(), Some("blog"));
    }

    #[test]
    fn test_separated_names_are_camel_cased() {
        assert_eq!(normalize("user-profile").as_deref(), Some("userProfile"));
        assert_eq!(normalize("user_profile").as_deref(), Some("userProfile"));
        assert_eq!(normalize("Blog Post").as_deref(), Some("blogPost"));
        assert_eq!(normalize("ORDER--LINE  item").as_deref(), Some("orderLineItem"));
    }

    #[test]
    fn test_leading_and_trailing_separators_are_stripped() {
        assert_eq!(normalize("  -user- ").as_deref(), Some("user"));
        assert_eq!(normalize("__blog_post__").as_deref(), Some("blogPost"));
    }

    #[test]
    fn test_digits_act_as_separators() {
        assert_eq!(normalize("user2").as_deref(), Some("user"));
        assert_eq!(normalize("2fa-token").as_deref(), Some("faToken"));
        assert_eq!(normalize("v2api").as_deref(), Some("vApi"));
    }

    #[test]
    fn test_names_without_letters_are_rejected() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("123"), None);
        assert_eq!(normalize("--- !"), None);
        assert!(matches!(
            ResourceName::parse("42"),
            Err(ScaffoldError::InvalidResourceName(raw)) if raw == "42"
        ));
    }

    #[test]
    fn test_lowercase_output_is_stable() {
        for raw in ["user", "Blog", "user 2", "__x__"] {
            let once = normalize(raw).unwrap();
            assert_eq!(normalize(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("blogPost"), "BlogPost");
        assert_eq!(capitalize("X"), "X");
    }

    #[test]
    fn test_resource_name_variants() {
        let name = ResourceName::parse("blog-post").unwrap();
        assert_eq!(name.raw(), "blog-post");
        assert_eq!(name.identifier(), "blogPost");
        assert_eq!(name.capitalized(), "BlogPost");
        assert_eq!(name.kebab(), "blog-post");
        assert_eq!(name.plural(), "blogPosts");
        assert_eq!(name.plural_capitalized(), "BlogPosts");
        assert_eq!(name.route_path(), "/blog-posts");
    }

    #[test]
    fn test_plural_of_regular_words() {
        let name = ResourceName::parse("category").unwrap();
        assert_eq!(name.plural(), "categories");
        assert_eq!(name.route_path(), "/categories");
    }
}
