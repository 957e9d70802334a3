const MARKERS: [&str; 6] = [
    "PASSAGE:",
    "QUESTION:",
    "CORRECT:",
    "WRONG1:",
    "WRONG2:",
    "WRONG3:",
];

/// A passage question as returned by the model, before option shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageDraft {
    pub passage: String,
    pub question: String,
    pub correct: String,
    pub wrong: [String; 3],
}

/// Parse a `PASSAGE:/QUESTION:/CORRECT:/WRONG1:/WRONG2:/WRONG3:` response.
///
/// Each field runs from its marker to the next marker (or the end of the
/// text). Returns `None` if any marker is missing or any field is blank.
#[must_use]
pub fn parse_passage(content: &str) -> Option<PassageDraft> {
    let mut fields = Vec::with_capacity(MARKERS.len());
    for (idx, marker) in MARKERS.iter().enumerate() {
        let start = content.find(marker)? + marker.len();
        let rest = &content[start..];
        let end = MARKERS
            .get(idx + 1)
            .and_then(|next| rest.find(next))
            .unwrap_or(rest.len());
        let value = rest[..end].trim();
        if value.is_empty() {
            return None;
        }
        fields.push(value.to_string());
    }

    let [passage, question, correct, wrong1, wrong2, wrong3]: [String; 6] =
        fields.try_into().ok()?;
    Some(PassageDraft {
        passage,
        question,
        correct,
        wrong: [wrong1, wrong2, wrong3],
    })
}
