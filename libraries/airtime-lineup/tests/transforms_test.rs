//! Transform integration tests
//!
//! Example-based coverage for the sort, padding, removal, intersperse
//! and cyclic shuffle transforms, matching the editor's documented
//! behavior end to end.

use chrono::{TimeZone, Utc};

use airtime_core::types::{
    ArtistId, ChannelId, ContentProgram, ContentSubtype, Program, ProgramId, RedirectProgram,
    ShowId,
};
use airtime_lineup::{
    cyclic_shuffle, intersperse_flex, pad_start_times, random_shuffle, remove_programming,
    sort_alphabetically, sort_by_episode, sort_by_release_date, PaddingOptions, RemovalRequest,
    SortOrder, INTERSPERSE_FLEX_MS,
};

// ===== Test Helpers =====

fn movie(title: &str) -> Program {
    Program::Content(ContentProgram::new(ContentSubtype::Movie, title, 6_000_000))
}

fn episode(show: &str, season: u32, number: u32) -> Program {
    let mut c = ContentProgram::new(
        ContentSubtype::Episode,
        format!("{show} s{season}e{number}"),
        1_800_000,
    );
    c.id = Some(ProgramId::new(format!("{show}-{season}-{number}")));
    c.persisted = true;
    c.show_id = Some(ShowId::new(show));
    c.season_number = Some(season);
    c.episode_number = Some(number);
    Program::Content(c)
}

fn track(artist: &str, title: &str) -> Program {
    let mut c = ContentProgram::new(ContentSubtype::Track, title, 240_000);
    c.artist_id = Some(ArtistId::new(artist));
    Program::Content(c)
}

fn titles(programs: &[Program]) -> Vec<&str> {
    programs.iter().map(|p| p.title().unwrap_or("<flex>")).collect()
}

// ===== Sorting =====

#[test]
fn alphabetical_sort_both_directions() {
    let input = vec![movie("Charlie"), movie("Alpha"), movie("Bravo")];

    let asc = sort_alphabetically(&input, SortOrder::Asc);
    assert_eq!(titles(&asc), vec!["Alpha", "Bravo", "Charlie"]);

    let desc = sort_alphabetically(&input, SortOrder::Desc);
    assert_eq!(titles(&desc), vec!["Charlie", "Bravo", "Alpha"]);
}

#[test]
fn episode_sort_orders_one_show_by_season_and_episode() {
    let input = vec![
        episode("s", 3, 7),
        episode("s", 2, 1),
        episode("s", 3, 2),
    ];
    let out = sort_by_episode(&input, SortOrder::Asc);
    assert_eq!(titles(&out), vec!["s s2e1", "s s3e2", "s s3e7"]);
}

#[test]
fn episode_sort_keeps_movies_at_the_tail_in_both_directions() {
    let input = vec![movie("Heat"), episode("s", 1, 2), episode("s", 1, 1)];

    let asc = sort_by_episode(&input, SortOrder::Asc);
    assert_eq!(titles(&asc), vec!["s s1e1", "s s1e2", "Heat"]);

    let desc = sort_by_episode(&input, SortOrder::Desc);
    assert_eq!(titles(&desc), vec!["s s1e2", "s s1e1", "Heat"]);
}

#[test]
fn release_date_sort_is_deterministic_for_same_day_episodes() {
    let day = Utc.with_ymd_and_hms(2_015, 3, 10, 0, 0, 0).unwrap();
    let mut early = episode("s", 1, 2);
    let mut late = episode("s", 2, 1);
    for p in [&mut early, &mut late] {
        if let Program::Content(c) = p {
            c.release_date = Some(day);
        }
    }

    let out = sort_by_release_date(&[late, early], SortOrder::Asc);
    assert_eq!(titles(&out), vec!["s s1e2", "s s2e1"]);
}

// ===== Padding =====

#[test]
fn twenty_six_minute_program_gets_four_minutes_of_flex() {
    let program = Program::Content(ContentProgram::new(
        ContentSubtype::Movie,
        "feature",
        26 * 60_000,
    ));
    let out = pad_start_times(
        &[program, movie("next")],
        0,
        &PaddingOptions {
            mod_minutes: Some(15),
        },
    );

    // ceil(26 / 15) * 15 = 30; leftover 4 min >= 30 s threshold
    assert_eq!(out.programs.len(), 3);
    assert!(out.programs[1].is_flex());
    assert_eq!(out.programs[1].duration_ms(), 4 * 60_000);
}

#[test]
fn padding_aligns_the_anchor_down() {
    let anchor = Utc
        .with_ymd_and_hms(2_024, 5, 1, 20, 7, 33)
        .unwrap()
        .timestamp_millis();
    let aligned = Utc
        .with_ymd_and_hms(2_024, 5, 1, 20, 0, 0)
        .unwrap()
        .timestamp_millis();

    let out = pad_start_times(
        &[movie("a")],
        anchor,
        &PaddingOptions {
            mod_minutes: Some(15),
        },
    );
    assert_eq!(out.start_time_ms, aligned);
}

// ===== Removal =====

#[test]
fn flex_removal_round_trip_preserves_relative_order() {
    let input = vec![
        episode("a", 1, 1),
        Program::flex(30_000),
        movie("Heat"),
        Program::flex(45_000),
        episode("a", 1, 2),
    ];
    let out = remove_programming(
        &input,
        &RemovalRequest {
            flex: true,
            ..Default::default()
        },
    );

    assert!(out.iter().all(|p| !p.is_flex()));
    assert_eq!(titles(&out), vec!["a s1e1", "Heat", "a s1e2"]);
}

#[test]
fn independent_predicates_compose() {
    let redirect = Program::Redirect(RedirectProgram {
        channel_id: ChannelId::new("ch-9"),
        channel_name: Some("Cartoons".to_string()),
        duration_ms: 600_000,
        persisted: true,
    });
    let input = vec![
        episode("keep", 1, 1),
        track("artist-1", "Song A"),
        redirect,
        movie("Heat"),
    ];
    let out = remove_programming(
        &input,
        &RemovalRequest {
            artist_ids: vec![ArtistId::new("artist-1")],
            channel_ids: vec![ChannelId::new("ch-9")],
            movies: true,
            ..Default::default()
        },
    );

    assert_eq!(titles(&out), vec!["keep s1e1"]);
}

// ===== Intersperse =====

#[test]
fn intersperse_doubles_the_lineup() {
    let input = vec![movie("a"), movie("b"), movie("c")];
    let out = intersperse_flex(&input);

    assert_eq!(out.len(), 6);
    for (i, program) in out.iter().enumerate() {
        if i % 2 == 0 {
            assert!(!program.is_flex());
        } else {
            assert!(program.is_flex());
            assert_eq!(program.duration_ms(), INTERSPERSE_FLEX_MS);
        }
    }
}

// ===== Shuffles =====

#[test]
fn random_shuffle_keeps_every_entry() {
    let input: Vec<Program> = (1..=20).map(|i| episode("s", 1, i)).collect();
    let out = random_shuffle(&input);

    assert_eq!(out.len(), 20);
    for program in &input {
        assert!(out.contains(program));
    }
}

#[test]
fn cyclic_shuffle_mixes_shows_but_walks_each_in_order() {
    let input = vec![
        episode("a", 1, 1),
        episode("a", 1, 2),
        episode("a", 1, 3),
        episode("a", 1, 4),
        episode("b", 1, 1),
        episode("b", 1, 2),
    ];
    let out = cyclic_shuffle(&input);
    assert_eq!(out.len(), 6);

    // Within one show the emitted episode numbers advance by one,
    // modulo the group length, from a random start
    for (show, len) in [("a", 4u32), ("b", 2u32)] {
        let numbers: Vec<u32> = out
            .iter()
            .filter_map(Program::content_detail)
            .filter(|c| c.show_id.as_ref().is_some_and(|id| id.as_str() == show))
            .filter_map(|c| c.episode_number)
            .collect();
        assert_eq!(numbers.len(), len as usize);
        for pair in numbers.windows(2) {
            assert_eq!(pair[1], pair[0] % len + 1, "show {show} skipped ahead");
        }
    }
}
