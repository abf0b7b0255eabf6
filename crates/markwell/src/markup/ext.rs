//! Tag-wrapping helpers for building markup strings.

/// Wraps string slices in markup tags.
///
/// Empty strings pass through unchanged, so optional fragments compose
/// without emitting stray tags.
///
/// # Example
///
/// ```
/// use markwell::MarkupExt;
///
/// assert_eq!("update".bold(), "<b>update</b>");
/// assert_eq!("docs".linked("app://docs"), "<a href=\"app://docs\">docs</a>");
/// assert_eq!("".bold(), "");
/// ```
pub trait MarkupExt {
    /// Wraps the text in `<tag>`/`</tag>`.
    fn tagged(&self, tag: &str) -> String;

    /// Wraps the text in a link tag pointing at `href`.
    fn linked(&self, href: &str) -> String;

    /// Wraps the text in a color tag carrying a hex spec.
    fn colored(&self, spec: &str) -> String;

    fn bold(&self) -> String {
        self.tagged("b")
    }

    fn italic(&self) -> String {
        self.tagged("i")
    }

    fn underlined(&self) -> String {
        self.tagged("u")
    }

    fn tiny(&self) -> String {
        self.tagged("tiny")
    }

    fn small(&self) -> String {
        self.tagged("small")
    }

    fn large(&self) -> String {
        self.tagged("large")
    }

    fn huge(&self) -> String {
        self.tagged("huge")
    }

    fn left(&self) -> String {
        self.tagged("left")
    }

    fn center(&self) -> String {
        self.tagged("center")
    }

    fn right(&self) -> String {
        self.tagged("right")
    }
}

impl MarkupExt for str {
    fn tagged(&self, tag: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<{}>{}</{}>", tag, self, tag)
    }

    fn linked(&self, href: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<a href=\"{}\">{}</a>", href, self)
    }

    fn colored(&self, spec: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<font color=\"{}\">{}</font>", spec, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_wrappers() {
        assert_eq!("x".bold(), "<b>x</b>");
        assert_eq!("x".italic(), "<i>x</i>");
        assert_eq!("x".underlined(), "<u>x</u>");
        assert_eq!("x".huge(), "<huge>x</huge>");
        assert_eq!("x".center(), "<center>x</center>");
    }

    #[test]
    fn test_linked() {
        assert_eq!(
            "here".linked("https://example.com"),
            "<a href=\"https://example.com\">here</a>"
        );
    }

    #[test]
    fn test_colored() {
        assert_eq!(
            "warn".colored("#FF0000"),
            "<font color=\"#FF0000\">warn</font>"
        );
    }

    #[test]
    fn test_empty_passes_through() {
        assert_eq!("".bold(), "");
        assert_eq!("".linked("x"), "");
        assert_eq!("".colored("#000000"), "");
    }

    #[test]
    fn test_wrappers_nest() {
        assert_eq!("x".bold().as_str().italic(), "<i><b>x</b></i>");
    }
}
