const REMOVED: [char; 6] = ['?', '.', ',', '!', '-', ':'];
const SEPARATORS: [char; 2] = [' ', '/'];

/// Filename slug for a post title.
///
/// Punctuation (hyphens included) is stripped before spaces and slashes become
/// hyphens, so `Pre-release notes` turns into `prerelease-notes`.
pub(crate) fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(&REMOVED[..], "")
        .replace(&SEPARATORS[..], "-")
}
