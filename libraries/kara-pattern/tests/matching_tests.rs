use kara_pattern::{compile, split_path, NoMatch, SongMetadata, TokenName};

use test_helpers::init_tracing;

fn song(
    creator: Option<&str>,
    identifier: Option<&str>,
    artist: Option<&str>,
    title: Option<&str>,
) -> SongMetadata {
    SongMetadata {
        creator_name: creator.map(String::from),
        identifier: identifier.map(String::from),
        artist_name: artist.map(String::from),
        song_title: title.map(String::from),
    }
}

#[test]
fn test_identifier_artist_title_file_name() {
    init_tracing();
    let pattern = compile("{identifier} - {artist} - {title}").unwrap();

    let metadata = pattern
        .match_path("KFS-00602 - Morgan Wallen - Thinkin' Bout Me (Parody).mp4")
        .unwrap();

    assert_eq!(
        metadata,
        song(
            None,
            Some("KFS-00602"),
            Some("Morgan Wallen"),
            Some("Thinkin' Bout Me (Parody)")
        )
    );
}

#[test]
fn test_creator_with_double_wildcard_and_backslashes() {
    init_tracing();
    let pattern = compile("{creator}/**/{artist} ? {title}").unwrap();

    let metadata = pattern
        .match_path(r"numerous\folders\along\Some person ? needs help badly.cdg")
        .unwrap();

    assert_eq!(
        metadata,
        song(
            Some("numerous"),
            None,
            Some("Some person"),
            Some("needs help badly")
        )
    );
}

#[test]
fn test_leading_separator_makes_no_difference() {
    init_tracing();
    let pattern = compile("/*/{creator}/**/{identifier} - {artist} - {title}").unwrap();

    let absolute = pattern
        .match_path("/karaoke/Sunfly/SF090/SF090-01 - Abba - Waterloo.mp3")
        .unwrap();
    let relative = pattern
        .match_path("karaoke/Sunfly/SF090/SF090-01 - Abba - Waterloo.mp3")
        .unwrap();

    assert_eq!(absolute, relative);
    assert_eq!(
        absolute,
        song(Some("Sunfly"), Some("SF090-01"), Some("Abba"), Some("Waterloo"))
    );

    let without_slash = compile("*/{creator}/**/{identifier} - {artist} - {title}").unwrap();
    assert_eq!(without_slash, pattern);
}

#[test]
fn test_extra_leading_folder_is_discarded() {
    init_tracing();
    let pattern = compile("{creator}/*/skip/*/{artist}/*/{title} - {identifier}").unwrap();

    let metadata = pattern
        .match_path("/extra/Sunfly/x/skip/y/Abba/z/Waterloo - SF001.mp3")
        .unwrap();

    assert_eq!(
        metadata,
        song(Some("Sunfly"), Some("SF001"), Some("Abba"), Some("Waterloo"))
    );

    // Shift everything by one folder: the literal no longer lines up
    assert_eq!(
        pattern.match_path("/Sunfly/x/skip/y/Abba/z/extra/Waterloo - SF001.mp3"),
        Err(NoMatch::FolderMismatch {
            index: 3,
            expected: "skip".into(),
            actual: "y".into()
        })
    );
}

#[test]
fn test_too_few_folders() {
    let pattern = compile("{creator}/*/{title}").unwrap();

    assert_eq!(
        pattern.match_path("Sunfly/Waterloo.mp3"),
        Err(NoMatch::InsufficientFolders {
            required: 2,
            actual: 1
        })
    );
}

#[test]
fn test_double_wildcard_windows_must_not_overlap() {
    let pattern = compile("{creator}/**/{artist}/{title}").unwrap();

    assert!(pattern.match_path("Sunfly/Abba/Waterloo.mp3").is_ok());
    assert!(matches!(
        pattern.match_path("Sunfly/Waterloo.mp3"),
        Err(NoMatch::InsufficientFolders { required: 2, .. })
    ));
}

#[test]
fn test_composite_folder_segment() {
    let pattern = compile("{creator} Karaoke/Disc */{identifier} - {title}").unwrap();

    let metadata = pattern
        .match_path("/music/Sound Choice Karaoke/Disc 8125/SC8125-04 - Hey Jude.cdg")
        .unwrap();

    assert_eq!(metadata.creator_name.as_deref(), Some("Sound Choice"));
    assert_eq!(metadata.identifier.as_deref(), Some("SC8125-04"));
    assert_eq!(metadata.song_title.as_deref(), Some("Hey Jude"));
    assert_eq!(metadata.artist_name, None);

    assert!(matches!(
        pattern.match_path("/music/Sound Choice Karaoke/Bonus/SC8125-04 - Hey Jude.cdg"),
        Err(NoMatch::FolderMismatch { index: 2, .. })
    ));
}

#[test]
fn test_first_capture_in_document_order_wins() {
    let pattern = compile("{artist}/{artist} - {title}").unwrap();

    let metadata = pattern
        .match_path("ABBA/Abba (Tribute) - Waterloo.mp3")
        .unwrap();

    assert_eq!(metadata.artist_name.as_deref(), Some("ABBA"));
    assert_eq!(metadata.song_title.as_deref(), Some("Waterloo"));
}

#[test]
fn test_captures_are_trimmed() {
    let pattern = compile("{identifier}-{artist}-{title}").unwrap();

    let metadata = pattern.match_path("SF001 - Abba - Waterloo .mp3").unwrap();

    assert_eq!(
        metadata,
        song(None, Some("SF001"), Some("Abba"), Some("Waterloo"))
    );
}

#[test]
fn test_literals_are_case_sensitive() {
    let pattern = compile("Karaoke/{title}").unwrap();

    assert!(pattern.match_path("Karaoke/Waterloo.mp3").is_ok());
    assert!(pattern.match_path("karaoke/Waterloo.mp3").is_err());
}

#[test]
fn test_no_partial_metadata_on_failure() {
    let pattern = compile("{creator}/{artist} - {title}").unwrap();

    // creator would capture, the file name then fails
    assert_eq!(
        pattern.match_path("Sunfly/Waterloo.mp3"),
        Err(NoMatch::FileMismatch {
            expected: "{artist} - {title}".into(),
            actual: "Waterloo".into()
        })
    );
}

#[test]
fn test_whitespace_only_capture_fails() {
    let pattern = compile("{creator}/{title}").unwrap();

    assert_eq!(
        pattern.match_path("   /Waterloo.mp3"),
        Err(NoMatch::EmptyCapture {
            token: TokenName::Creator
        })
    );
}

#[test]
fn test_blank_split_gives_way_to_a_valid_one() {
    let pattern = compile("{artist}-{title}").unwrap();

    assert_eq!(
        pattern.match_path(" -x-y.mp3").unwrap(),
        song(None, None, Some("-x"), Some("y"))
    );
}

#[test]
fn test_composite_with_no_valid_split_still_fails() {
    let pattern = compile("{artist} - {title}").unwrap();

    assert_eq!(
        pattern.match_path("   -  .mp3"),
        Err(NoMatch::FileMismatch {
            expected: "{artist} - {title}".into(),
            actual: "   -  ".into()
        })
    );
}

#[test]
fn test_written_extension_in_pattern_is_ignored() {
    let pattern = compile("{artist} - {title}.mp3").unwrap();

    assert_eq!(
        pattern.match_path("Abba - SOS.mp3").unwrap(),
        song(None, None, Some("Abba"), Some("SOS"))
    );
    assert_eq!(pattern, compile("{artist} - {title}").unwrap());
    assert!(compile("{title}.*").unwrap().match_path("Sunfly/SOS.cdg").is_ok());
}

#[test]
fn test_dot_inside_pattern_name_is_kept() {
    let pattern = compile("Mr. {title}").unwrap();

    assert_eq!(
        pattern.match_path("Mr. Brightside.mp3").unwrap(),
        song(None, None, None, Some("Brightside"))
    );
}

#[test]
fn test_match_candidate_reuses_normalized_path() {
    let pattern = compile("{artist} - {title}").unwrap();
    let candidate = split_path(r"C:\Karaoke\Abba - Waterloo.mp3");

    assert_eq!(candidate.folders, vec!["C:", "Karaoke"]);
    assert_eq!(
        pattern.match_candidate(&candidate).unwrap(),
        song(None, None, Some("Abba"), Some("Waterloo"))
    );
}

#[test]
fn test_no_match_messages() {
    let pattern = compile("Karaoke/{title}").unwrap();
    let err = pattern.match_path("Pop/Waterloo.mp3").unwrap_err();

    assert_eq!(err.to_string(), "Folder 0 'Pop' does not match 'Karaoke'");
}
