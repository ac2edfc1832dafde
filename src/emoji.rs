/// Keyword-to-glyph pairs checked top-down; the first substring match wins,
/// so a name hitting several keywords always resolves the same way.
const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("water", "💧"),
    ("drink", "💧"),
    ("cook", "🍳"),
    ("run", "🏃"),
    ("jog", "🏃"),
    ("read", "📚"),
    ("book", "📚"),
    ("journal", "📓"),
    ("gym", "💪"),
    ("workout", "💪"),
    ("exercise", "💪"),
    ("sleep", "😴"),
    ("bed", "😴"),
    ("meditate", "🧘"),
    ("code", "💻"),
    ("program", "💻"),
    ("walk", "🚶"),
    ("garden", "🌱"),
];

const DEFAULT_EMOJI: &str = "✨";

pub fn suggest_emoji(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    EMOJI_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_EMOJI)
}
