use super::store::CatalogStore;

/// Picks the name of the first item holding the strictly highest like count.
///
/// Items with zero likes never win, so an empty or unliked collection yields
/// `None`.
fn most_liked<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    likes: impl Fn(&T) -> u64,
    name: impl Fn(&'a T) -> &'a str,
) -> Option<&'a str> {
    let mut best: Option<(&'a T, u64)> = None;
    for item in items {
        let count = likes(item);
        if count > best.map_or(0, |(_, max)| max) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| name(item))
}

impl CatalogStore {
    /// Name of the artist with the most likes.
    ///
    /// Ties go to the artist created first.
    pub fn most_popular_artist(&self) -> Option<&str> {
        most_liked(&self.artists, |a| a.likes, |a| a.name.as_str())
    }

    /// Title of the song with the most likes.
    ///
    /// Ties go to the song created first.
    pub fn most_popular_song(&self) -> Option<&str> {
        most_liked(&self.songs, |s| s.likes, |s| s.title.as_str())
    }
}
