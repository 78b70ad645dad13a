const STRIPPED: [&str; 4] = ["<![CDATA[", "]]>", "<p>", "</p>"];
const LINE_BREAKS: [&str; 2] = ["<br>", "<br/>"];

/// Minimal cleanup of a wire text body: CDATA markers and paragraph tags are removed,
/// line breaks become `\n`, and surrounding whitespace is trimmed. Everything else is
/// left as is.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_owned();
    for marker in STRIPPED {
        cleaned = cleaned.replace(marker, "");
    }
    for marker in LINE_BREAKS {
        cleaned = cleaned.replace(marker, "\n");
    }
    cleaned.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn paragraphs_and_breaks() {
        assert_eq!(clean_text("<p>Hello</p><br>World"), "Hello\nWorld");
        assert_eq!(clean_text("one<br/>two<br>three"), "one\ntwo\nthree");
    }

    #[test]
    fn cdata_markers() {
        assert_eq!(clean_text("<![CDATA[raw]]>"), "raw");
        assert_eq!(clean_text("  <![CDATA[<p>x</p>]]>\n"), "x");
    }

    #[test]
    fn other_markup_is_kept() {
        assert_eq!(clean_text("<p dir=\"ltr\">a <b>bold</b></p>"), "<p dir=\"ltr\">a <b>bold</b>");
        assert_eq!(clean_text("<br />"), "<br />");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean_text("\t  plain  \n"), "plain");
        assert_eq!(clean_text(""), "");
    }
}
