//! Display names for the blog's category keys.

use super::text::titleify;

/// `(key, display name)` pairs.
pub const KNOWN_CATEGORIES: [(&str, &str); 10] = [
    ("AI", "🤖 ML/AI"),
    ("API", "🔌 API"),
    ("DE", "⚙️ DE"),
    ("cloud_devops", "☁️ Cloud/DevOps"),
    ("git", "🔀 GIT"),
    ("hardware", "🖥️ Hardware"),
    ("others", "📦 Others"),
    ("python", "🐍 Python"),
    ("tools", "🛠️ Tools/Utils"),
    ("web", "🌍 Web"),
];

pub fn lookup(key: &str) -> Option<&'static str> {
    KNOWN_CATEGORIES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(key))
        .map(|(_, name)| *name)
}

/// Known display name, or the title-cased key.
pub fn display_name(key: &str) -> String {
    lookup(key).map_or_else(|| titleify(key), str::to_string)
}
