//! Sort transforms

use std::cmp::Ordering;

use airtime_core::types::{ContentSubtype, Program};

use crate::types::SortOrder;

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Stable sort by title
///
/// Entries without a title (flex, unnamed redirects) compare as the empty
/// string.
pub fn sort_alphabetically(programs: &[Program], order: SortOrder) -> Vec<Program> {
    let mut out = programs.to_vec();
    out.sort_by(|a, b| {
        directed(
            a.title().unwrap_or("").cmp(b.title().unwrap_or("")),
            order,
        )
    });
    out
}

/// Sort episodes by (show, season, episode)
///
/// Partitions the lineup into show episodes and everything else; the rest
/// is appended verbatim at the end regardless of direction. The chosen
/// direction applies uniformly to all three sort keys.
pub fn sort_by_episode(programs: &[Program], order: SortOrder) -> Vec<Program> {
    let (mut shows, rest): (Vec<Program>, Vec<Program>) =
        programs.iter().cloned().partition(|p| {
            matches!(
                p,
                Program::Content(c) if c.subtype == ContentSubtype::Episode
            )
        });

    shows.sort_by(|a, b| directed(episode_key(a).cmp(&episode_key(b)), order));
    shows.extend(rest);
    shows
}

fn episode_key(program: &Program) -> (String, u32, u32) {
    match program.content_detail() {
        Some(c) => (
            c.show_id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .or_else(|| c.show_title.clone())
                .unwrap_or_default(),
            c.season_number.unwrap_or(0),
            c.episode_number.unwrap_or(0),
        ),
        None => (String::new(), 0, 0),
    }
}

/// Sort by release date
///
/// Content without a date sorts as epoch zero; non-content entries sort
/// last in ascending order. Same-date episodes fall back to a composite
/// season/episode key so the order stays deterministic.
pub fn sort_by_release_date(programs: &[Program], order: SortOrder) -> Vec<Program> {
    let mut out = programs.to_vec();
    out.sort_by(|a, b| directed(release_key(a).cmp(&release_key(b)), order));
    out
}

fn release_key(program: &Program) -> (i64, i64) {
    match program.content_detail() {
        Some(c) => {
            let date = c.release_date_ms().unwrap_or(0);
            let tiebreak = i64::from(c.season_number.unwrap_or(0)) * 10_000
                + i64::from(c.episode_number.unwrap_or(0)) * 100;
            (date, tiebreak)
        }
        None => (i64::MAX, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airtime_core::types::{ContentProgram, ShowId};
    use chrono::{TimeZone, Utc};

    fn movie(title: &str) -> Program {
        Program::Content(ContentProgram::new(ContentSubtype::Movie, title, 60_000))
    }

    fn episode(show: &str, season: u32, number: u32) -> Program {
        let mut c = ContentProgram::new(
            ContentSubtype::Episode,
            format!("s{season}e{number}"),
            60_000,
        );
        c.show_id = Some(ShowId::new(show));
        c.season_number = Some(season);
        c.episode_number = Some(number);
        Program::Content(c)
    }

    fn dated(title: &str, year: i32) -> Program {
        let mut c = ContentProgram::new(ContentSubtype::Movie, title, 60_000);
        c.release_date = Some(Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap());
        Program::Content(c)
    }

    fn titles(programs: &[Program]) -> Vec<&str> {
        programs.iter().map(|p| p.title().unwrap_or("")).collect()
    }

    #[test]
    fn alphabetical_asc_and_desc() {
        let input = vec![movie("Charlie"), movie("Alpha"), movie("Bravo")];

        let asc = sort_alphabetically(&input, SortOrder::Asc);
        assert_eq!(titles(&asc), vec!["Alpha", "Bravo", "Charlie"]);

        let desc = sort_alphabetically(&input, SortOrder::Desc);
        assert_eq!(titles(&desc), vec!["Charlie", "Bravo", "Alpha"]);
    }

    #[test]
    fn episode_sort_orders_by_season_then_episode() {
        let input = vec![episode("s", 3, 7), episode("s", 2, 1), episode("s", 3, 2)];
        let out = sort_by_episode(&input, SortOrder::Asc);
        assert_eq!(titles(&out), vec!["s2e1", "s3e2", "s3e7"]);
    }

    #[test]
    fn episode_sort_appends_non_shows_verbatim() {
        let input = vec![
            movie("Zed"),
            episode("s", 2, 1),
            movie("Apple"),
            episode("s", 1, 1),
        ];

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let out = sort_by_episode(&input, order);
            // Movies keep their relative input order at the tail
            assert_eq!(out[2].title(), Some("Zed"));
            assert_eq!(out[3].title(), Some("Apple"));
        }
    }

    #[test]
    fn release_sort_places_undated_content_first_and_non_content_last() {
        let input = vec![
            dated("Late", 2_020),
            Program::flex(30_000),
            movie("Undated"),
            dated("Early", 1_999),
        ];
        let out = sort_by_release_date(&input, SortOrder::Asc);

        assert_eq!(out[0].title(), Some("Undated"));
        assert_eq!(out[1].title(), Some("Early"));
        assert_eq!(out[2].title(), Some("Late"));
        assert!(out[3].is_flex());
    }

    #[test]
    fn same_date_episodes_break_ties_by_season_and_episode() {
        let date = Utc.with_ymd_and_hms(2_010, 1, 1, 0, 0, 0).unwrap();
        let mut a = episode("s", 2, 4);
        let mut b = episode("s", 1, 9);
        for p in [&mut a, &mut b] {
            if let Program::Content(c) = p {
                c.release_date = Some(date);
            }
        }

        let out = sort_by_release_date(&[a, b], SortOrder::Asc);
        assert_eq!(titles(&out), vec!["s1e9", "s2e4"]);
    }
}
