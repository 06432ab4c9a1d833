//! Derive and order the index entries for the navigation page.

use crate::core::schema::Release;

use super::schema::IndexEntry;

/// Sort entries by year descending (most recent release first), ties broken
/// by set label ascending, case-sensitive.
fn sort_entries(entries: &mut [IndexEntry]) {
    entries.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.set.cmp(&b.set)));
}

/// Derive the ordered index entries for the full release collection.
///
/// Releases with no eligible players are excluded entirely. The first entry
/// of the result is the one the index pre-selects.
pub fn build_index_entries(releases: &[Release]) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> =
        releases.iter().filter_map(IndexEntry::from_release).collect();
    sort_entries(&mut entries);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::Player;

    fn eligible_player() -> Player {
        Player {
            name: "p".to_string(),
            debut: Some("2020-04-01".to_string()),
            war: Some(2.0),
            career_length: Some(4.0),
        }
    }

    fn release(name: &str, year: i32, set: &str, players: Vec<Player>) -> Release {
        Release {
            name: name.to_string(),
            year,
            set: set.to_string(),
            players,
        }
    }

    #[test]
    fn test_entries_sorted_year_descending_then_set() {
        let releases = vec![
            release("2020 Bowman", 2020, "Paper", vec![eligible_player()]),
            release("2021 Bowman Draft", 2021, "Draft", vec![eligible_player()]),
            release("2021 Bowman", 2021, "Chrome", vec![eligible_player()]),
        ];

        let entries = build_index_entries(&releases);
        let keys: Vec<(i32, &str)> = entries.iter().map(|e| (e.year, e.set.as_str())).collect();
        assert_eq!(
            keys,
            vec![(2021, "Chrome"), (2021, "Draft"), (2020, "Paper")]
        );
    }

    #[test]
    fn test_set_tiebreak_is_case_sensitive() {
        let releases = vec![
            release("A", 2021, "chrome", vec![eligible_player()]),
            release("B", 2021, "Draft", vec![eligible_player()]),
        ];

        let entries = build_index_entries(&releases);
        // Uppercase sorts before lowercase in a case-sensitive comparison.
        assert_eq!(entries[0].set, "Draft");
        assert_eq!(entries[1].set, "chrome");
    }

    #[test]
    fn test_releases_without_eligible_players_are_excluded() {
        let releases = vec![
            release("2021 Bowman", 2021, "Paper", vec![eligible_player()]),
            release("2020 Bowman", 2020, "Paper", vec![]),
        ];

        let entries = build_index_entries(&releases);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "2021 Bowman");
    }

    #[test]
    fn test_empty_collection_yields_no_entries() {
        assert!(build_index_entries(&[]).is_empty());
    }

    #[test]
    fn test_entries_deterministic() {
        let releases = vec![
            release("2020 Bowman", 2020, "Paper", vec![eligible_player()]),
            release("2021 Bowman", 2021, "Chrome", vec![eligible_player()]),
        ];

        assert_eq!(build_index_entries(&releases), build_index_entries(&releases));
    }
}
