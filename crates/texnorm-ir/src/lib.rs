//! Rendering intermediate representation for normalized question text.

/// A rendered field: an ordered sequence of lines plus any losses that
/// were recorded while producing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub lines: Vec<RichLine>,
    pub losses: Vec<LossRecord>,
}

impl RichText {
    pub fn new(lines: Vec<RichLine>) -> Self {
        Self {
            lines,
            losses: Vec::new(),
        }
    }

    pub fn with_losses(lines: Vec<RichLine>, losses: Vec<LossRecord>) -> Self {
        Self { lines, losses }
    }

    pub fn has_losses(&self) -> bool {
        !self.losses.is_empty()
    }
}

/// One display line of a stored question/answer/passage field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichLine {
    /// The stored source line, untouched.
    pub source: String,
    pub content: LineContent,
}

impl RichLine {
    pub fn new(source: impl Into<String>, content: LineContent) -> Self {
        Self {
            source: source.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    /// Prose with markdown emphasis already expanded to inline HTML.
    Plain(String),
    /// Markup that must be handed to a math renderer, `$...$` included.
    Math(String),
    /// Localized stand-in for an empty field.
    Placeholder(String),
    /// The line could not be rendered; the consumer shows `message`
    /// alongside the raw source instead of breaking the page.
    Broken { message: String, markup: String },
}

impl LineContent {
    /// The markup a consumer should feed to its renderer, whatever the kind.
    pub fn markup(&self) -> &str {
        match self {
            LineContent::Plain(s)
            | LineContent::Math(s)
            | LineContent::Placeholder(s)
            | LineContent::Broken { markup: s, .. } => s,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, LineContent::Math(_))
    }
}

/// A non-fatal defect recorded while normalizing or rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossRecord {
    pub kind: String,
    pub message: String,
}

impl LossRecord {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
