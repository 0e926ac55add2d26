//! Path template for middleware access.

/// The original locator before parameter substitution.
///
/// Stored in request extensions by the path-parameter middleware so that
/// outer layers can access the template pattern (e.g., `/users/{id}`) rather
/// than the resolved locator (e.g., `/users/123`).
///
/// # Example
///
/// ```ignore
/// // In middleware
/// if let Some(template) = request.extensions().get::<PathTemplate>() {
///     tracing::debug!(template = %template, "resolved locator");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate(String);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Get the template string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn path_template_as_str() {
        let template = PathTemplate::new("/users/{id}/posts/{post_id}");
        check!(template.as_str() == "/users/{id}/posts/{post_id}");
    }

    #[test]
    fn path_template_as_ref() {
        let template = PathTemplate::new("/users/{}");
        let s: &str = template.as_ref();
        check!(s == "/users/{}");
    }
}
