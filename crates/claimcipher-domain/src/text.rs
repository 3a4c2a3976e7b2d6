//! Text module - raw document text handed to the matcher

/// Concatenated text of a document
///
/// Pages that yielded no text are skipped; every kept page is followed by a
/// newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// The concatenated page text
    pub text: String,

    /// Pages visited (after applying any page limit)
    pub pages_read: usize,

    /// Pages that contributed text
    pub pages_with_text: usize,
}

impl ExtractedText {
    /// Join page strings, skipping pages with no text
    ///
    /// # Examples
    ///
    /// ```
    /// use claimcipher_domain::ExtractedText;
    ///
    /// let text = ExtractedText::from_pages(["VIN 1HGCM82633A004352", "", "Make: Honda"]);
    /// assert_eq!(text.text, "VIN 1HGCM82633A004352\nMake: Honda\n");
    /// assert_eq!(text.pages_read, 3);
    /// assert_eq!(text.pages_with_text, 2);
    /// ```
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extracted = Self::default();
        for page in pages {
            extracted.pages_read += 1;
            let page = page.as_ref();
            if page.trim().is_empty() {
                continue;
            }
            extracted.text.push_str(page);
            extracted.text.push('\n');
            extracted.pages_with_text += 1;
        }
        extracted
    }

    /// Whether no page produced any text
    pub fn is_empty(&self) -> bool {
        self.pages_with_text == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pages() {
        let text = ExtractedText::from_pages(Vec::<String>::new());
        assert!(text.is_empty());
        assert_eq!(text.text, "");
    }

    #[test]
    fn test_whitespace_only_pages_skipped() {
        let text = ExtractedText::from_pages(["  \n ", "\t"]);
        assert!(text.is_empty());
        assert_eq!(text.pages_read, 2);
    }
}
