use std::fmt;

/// Normalized identifier of the screen the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Story,
    Vault,
    Quiz,
    #[default]
    Unknown,
}

impl PageId {
    /// Parse a normalized page id (`home`, `story-page`, `vault-page`, `quiz-page`).
    ///
    /// Anything else maps to `PageId::Unknown`; an unknown page simply has no
    /// applicable tutorial step.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "home" => PageId::Home,
            "story-page" => PageId::Story,
            "vault-page" => PageId::Vault,
            "quiz-page" => PageId::Quiz,
            _ => PageId::Unknown,
        }
    }

    /// Derive the page id from a navigation location such as `/app/wordVault.html`.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or_default();
        match file {
            "" | "index.html" => PageId::Home,
            "wordVault.html" => PageId::Vault,
            "question.html" => PageId::Quiz,
            name if name.to_ascii_lowercase().contains("hen") => PageId::Story,
            _ => PageId::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Story => "story-page",
            PageId::Vault => "vault-page",
            PageId::Quiz => "quiz-page",
            PageId::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the page host reports about the current screen.
///
/// Story pages need two extra facts: whether the cover's "start" control is
/// on screen, and whether the reading view (text box) is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub page: PageId,
    pub start_control: bool,
    pub reading_marker: bool,
}

impl PageSnapshot {
    #[must_use]
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            start_control: false,
            reading_marker: false,
        }
    }

    #[must_use]
    pub fn with_start_control(mut self) -> Self {
        self.start_control = true;
        self
    }

    #[must_use]
    pub fn with_reading_marker(mut self) -> Self {
        self.reading_marker = true;
        self
    }

    /// The story cover was replaced by the reading view.
    #[must_use]
    pub fn opened_book(self) -> Self {
        Self {
            page: self.page,
            start_control: false,
            reading_marker: true,
        }
    }

    #[must_use]
    pub fn is(&self, page: PageId) -> bool {
        self.page == page
    }
}
