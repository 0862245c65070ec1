use kara_pattern::{compile, get_regex_equivalent, PatternError};

#[test]
fn test_ambiguous_patterns_are_rejected() {
    let rejected = [
        "test/*/**/stuff",
        "test/**/*/stuff",
        "test/**/**/stuff",
        "test/**/my/**/stuff",
        "test/***/stuff",
        "test/**stuff",
        "blah {token}* blah",
        "blah *{token} blah",
    ];

    for spec in rejected {
        assert!(compile(spec).is_err(), "'{}' should be rejected", spec);
        assert_eq!(
            get_regex_equivalent(spec).unwrap_err(),
            compile(spec).unwrap_err(),
            "'{}' should fail the same way in both entry points",
            spec
        );
    }
}

#[test]
fn test_rejections_name_the_rule() {
    assert_eq!(
        compile("test/*/**/stuff"),
        Err(PatternError::DoubleWildcardNextToWildcard { index: 2 })
    );
    assert_eq!(
        compile("test/**/*/stuff"),
        Err(PatternError::DoubleWildcardNextToWildcard { index: 1 })
    );
    assert_eq!(
        compile("test/**/**/stuff"),
        Err(PatternError::MultipleDoubleWildcards { index: 2 })
    );
    assert_eq!(
        compile("test/**/my/**/stuff"),
        Err(PatternError::MultipleDoubleWildcards { index: 3 })
    );
    assert_eq!(
        compile("test/***/stuff"),
        Err(PatternError::WildcardRunTooLong {
            segment: "***".into(),
            len: 3
        })
    );
    assert_eq!(
        compile("test/**stuff"),
        Err(PatternError::DoubleWildcardInSegment {
            segment: "**stuff".into()
        })
    );
    assert_eq!(
        compile("blah {token}* blah"),
        Err(PatternError::WildcardAdjacentToToken {
            segment: "blah {token}* blah".into(),
            token: "token".into()
        })
    );
    assert_eq!(
        compile("blah *{token} blah"),
        Err(PatternError::WildcardAdjacentToToken {
            segment: "blah *{token} blah".into(),
            token: "token".into()
        })
    );
}

#[test]
fn test_adjacency_applies_to_real_tokens_in_folders() {
    assert!(matches!(
        compile("{creator}*/{title}"),
        Err(PatternError::WildcardAdjacentToToken { .. })
    ));
}

#[test]
fn test_accepted_wildcard_layouts() {
    let accepted = [
        "*/{title}",
        "**/{title}",
        "*/{creator}/**/{identifier} - {artist} - {title}",
        "{creator}/*/skip/*/{artist}/*/{title} - {identifier}",
        "Disc */{artist} - * - {title}",
        "*",
        "**/a/*/b",
    ];

    for spec in accepted {
        assert!(compile(spec).is_ok(), "'{}' should compile", spec);
    }
}

#[test]
fn test_error_messages_name_the_fragment() {
    let err = compile("test/**stuff").unwrap_err();
    assert!(err.to_string().contains("**stuff"));

    let err = compile("blah {artist}* blah").unwrap_err();
    assert_eq!(
        err.to_string(),
        "'*' directly touches token '{artist}' in segment 'blah {artist}* blah'"
    );
}
