//! Project name substitution

/// Placeholder replaced by the project name in every template
pub const NAME_TOKEN: &str = "{{name}}";

/// Substitute `name` for every [`NAME_TOKEN`] in `template`.
///
/// Single pass and unescaped: the name is inserted verbatim, whatever it
/// contains, and is never scanned for further tokens. A name with quotes or
/// backticks can therefore produce Go source that does not compile.
pub fn render(template: &str, name: &str) -> String {
    template.replace(NAME_TOKEN, name)
}
