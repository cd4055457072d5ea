//! Text with highlighted spans
//!
//! Translation passes never edit a string in place. The working document is a
//! sequence of segments: plain text that later passes may still rewrite, and
//! highlighted text that was produced by an earlier substitution and is
//! immutable from then on. Matching only ever looks inside plain segments, so
//! a substitution can never be translated a second time.

/// Opening markup written around every highlighted span
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
/// Closing markup written around every highlighted span
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// One run of text in an [`AnnotatedText`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Untouched input, still open to matching
    Plain(String),
    /// Output of a substitution, closed to matching
    Highlighted(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlighted(text) => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }
}

/// A document made of plain and highlighted segments
///
/// Adjacent plain segments are always merged, so every boundary between two
/// segments has a highlight on at least one side of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    segments: Vec<Segment>,
}

impl AnnotatedText {
    /// A document holding `text` as a single plain segment
    pub fn new(text: &str) -> Self {
        let mut annotated = Self::default();
        annotated.push_plain(text);
        annotated
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The contents of every highlighted segment, in document order
    pub fn highlighted(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_highlighted())
            .map(Segment::as_str)
    }

    /// Append plain text, merging with a trailing plain segment
    pub fn push_plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Plain(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Plain(text.to_string())),
        }
    }

    /// Append a highlighted span
    pub fn push_highlighted(&mut self, text: String) {
        self.segments.push(Segment::Highlighted(text));
    }

    /// Append any segment, keeping plain runs merged
    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Plain(text) => self.push_plain(&text),
            Segment::Highlighted(text) => self.push_highlighted(text),
        }
    }

    /// Rebuild the document by passing every plain segment through `rewrite`.
    ///
    /// `rewrite` receives the segment text and whether the segment ends the
    /// whole document; a plain segment followed by a highlight does not.
    /// Highlighted segments are carried over untouched.
    pub fn rewrite_plain<F>(self, mut rewrite: F) -> AnnotatedText
    where
        F: FnMut(&str, bool) -> Vec<Segment>,
    {
        let count = self.segments.len();
        let mut output = AnnotatedText::default();
        for (index, segment) in self.segments.into_iter().enumerate() {
            match segment {
                Segment::Plain(text) => {
                    for rewritten in rewrite(&text, index + 1 == count) {
                        output.push(rewritten);
                    }
                }
                highlighted => output.push(highlighted),
            }
        }
        output
    }

    /// The document with every highlight wrapped in markup
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => rendered.push_str(text),
                Segment::Highlighted(text) => {
                    rendered.push_str(HIGHLIGHT_OPEN);
                    rendered.push_str(text);
                    rendered.push_str(HIGHLIGHT_CLOSE);
                }
            }
        }
        rendered
    }

    /// The document text without any markup
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::as_str).collect()
    }
}
