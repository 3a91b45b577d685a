use phishin::api::Client;
use phishin::error::ArgumentError;
use phishin::query::{Endpoint, Flags, normalize};

// Helper to build flags with every list-related option set, to prove they
// are dropped where they don't apply
fn noisy_flags() -> Flags {
    Flags {
        per_page: 5,
        page: 3,
        sort_dir: Some("asc".to_string()),
        sort_attr: Some("name".to_string()),
        tag: Some("sbd".to_string()),
        ..Flags::default()
    }
}

fn test_client() -> Client {
    Client::new("test-key".to_string()).with_base_url("https://phish.in/api/v1")
}

#[test]
fn test_unpaged_endpoints_ignore_list_flags() {
    for endpoint in ["eras", "tours", "tags"] {
        let spec = normalize(endpoint, noisy_flags()).unwrap();
        assert!(
            spec.parameters.is_empty(),
            "{endpoint} should not pick up list parameters: {:?}",
            spec.parameters
        );
    }
}

#[test]
fn test_years_list_always_includes_show_counts() {
    let spec = normalize("years", Flags::default()).unwrap();
    assert_eq!(spec.parameters, vec!["include_show_counts=true"]);

    // other flags never add anything for years
    let spec = normalize("years", noisy_flags()).unwrap();
    assert_eq!(spec.parameters, vec!["include_show_counts=true"]);
}

#[test]
fn test_per_page_rules() {
    for endpoint in ["venues", "shows", "tracks", "songs"] {
        let flags = Flags {
            per_page: 10,
            ..Flags::default()
        };
        let spec = normalize(endpoint, flags).unwrap();
        assert_eq!(spec.parameters, vec!["per_page=10"], "{endpoint}");

        // the default collapses to "omit"
        let spec = normalize(endpoint, Flags::default()).unwrap();
        assert!(spec.parameters.is_empty(), "{endpoint}");

        // so do invalid values
        for per_page in [0, -5] {
            let flags = Flags {
                per_page,
                ..Flags::default()
            };
            let spec = normalize(endpoint, flags).unwrap();
            assert!(spec.parameters.is_empty(), "{endpoint} per_page={per_page}");
        }
    }
}

#[test]
fn test_page_rules() {
    let flags = Flags {
        page: 3,
        ..Flags::default()
    };
    let spec = normalize("shows", flags).unwrap();
    assert_eq!(spec.parameters, vec!["page=3"]);

    for page in [1, 0, -2] {
        let flags = Flags {
            page,
            ..Flags::default()
        };
        let spec = normalize("shows", flags).unwrap();
        assert!(spec.parameters.is_empty(), "page={page}");
    }
}

#[test]
fn test_sort_direction_allow_list() {
    for dir in ["asc", "desc"] {
        let flags = Flags {
            sort_dir: Some(dir.to_string()),
            ..Flags::default()
        };
        let spec = normalize("shows", flags).unwrap();
        assert_eq!(spec.parameters, vec![format!("sort_dir={dir}")]);
    }

    // anything else is silently ignored, never an error
    for dir in ["ascending", "up", "DESC", ""] {
        let flags = Flags {
            sort_dir: Some(dir.to_string()),
            ..Flags::default()
        };
        let spec = normalize("shows", flags).unwrap();
        assert!(spec.parameters.is_empty(), "sort_dir={dir:?}");
    }
}

#[test]
fn test_sort_attr_added_verbatim() {
    let flags = Flags {
        sort_attr: Some("date".to_string()),
        ..Flags::default()
    };
    let spec = normalize("tracks", flags).unwrap();
    assert_eq!(spec.parameters, vec!["sort_attr=date"]);

    // no allow-list validation at all
    let flags = Flags {
        sort_attr: Some("definitely-not-an-attribute".to_string()),
        ..Flags::default()
    };
    let spec = normalize("tracks", flags).unwrap();
    assert_eq!(spec.parameters, vec!["sort_attr=definitely-not-an-attribute"]);

    let flags = Flags {
        sort_attr: Some(String::new()),
        ..Flags::default()
    };
    let spec = normalize("tracks", flags).unwrap();
    assert!(spec.parameters.is_empty());
}

#[test]
fn test_tag_filter_restricted_to_shows_and_tracks() {
    for endpoint in ["shows", "tracks"] {
        let flags = Flags {
            tag: Some("sbd".to_string()),
            ..Flags::default()
        };
        let spec = normalize(endpoint, flags).unwrap();
        assert_eq!(spec.parameters, vec!["tag=sbd"], "{endpoint}");
    }

    for endpoint in ["songs", "venues"] {
        let flags = Flags {
            tag: Some("sbd".to_string()),
            ..Flags::default()
        };
        let spec = normalize(endpoint, flags).unwrap();
        assert!(spec.parameters.is_empty(), "{endpoint}");
    }
}

#[test]
fn test_random_show_always_clears_identifier() {
    let flags = Flags {
        search: Some("1994-10-31".to_string()),
        ..Flags::default()
    };
    let spec = normalize("random-show", flags).unwrap();
    assert!(spec.identifier.is_none());

    let spec = normalize("random-show", Flags::default()).unwrap();
    assert!(spec.identifier.is_none());
}

#[test]
fn test_required_identifiers() {
    assert_eq!(
        normalize("show-on-date", Flags::default()).unwrap_err(),
        ArgumentError::MissingQuery("date")
    );
    assert_eq!(
        normalize("shows-on-day-of-year", Flags::default()).unwrap_err(),
        ArgumentError::MissingQuery("day")
    );
    assert_eq!(
        normalize("search", Flags::default()).unwrap_err(),
        ArgumentError::MissingQuery("search term")
    );

    // a blank query counts as absent
    let flags = Flags {
        search: Some(String::new()),
        ..Flags::default()
    };
    assert_eq!(
        normalize("search", flags).unwrap_err(),
        ArgumentError::MissingQuery("search term")
    );
}

#[test]
fn test_invalid_output_format() {
    let flags = Flags {
        output: "yaml".to_string(),
        ..Flags::default()
    };
    assert_eq!(
        normalize("shows", flags).unwrap_err(),
        ArgumentError::InvalidOutputFormat("yaml".to_string())
    );
}

#[test]
fn test_unrecognized_command_lists_endpoints() {
    let err = normalize("setlists", Flags::default()).unwrap_err();
    match &err {
        ArgumentError::UnrecognizedCommand(name) => assert_eq!(name, "setlists"),
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("setlists is not a recognized command"));
    assert!(message.contains("supported endpoints:"));
    assert!(message.contains("/random-show"));
}

#[test]
fn test_identifier_wins_over_parameters() {
    let flags = Flags {
        search: Some("1994-10-31".to_string()),
        ..noisy_flags()
    };
    let spec = normalize("shows", flags).unwrap();
    assert_eq!(spec.identifier.as_deref(), Some("1994-10-31"));
    assert!(spec.parameters.is_empty());
}

#[test]
fn test_format_url() {
    let client = test_client();

    let flags = Flags {
        per_page: 10,
        page: 2,
        ..Flags::default()
    };
    let spec = normalize("shows", flags).unwrap();
    assert_eq!(
        client.format_url(&spec),
        "https://phish.in/api/v1/shows?per_page=10&page=2"
    );

    let spec = normalize("shows", Flags::default()).unwrap();
    assert_eq!(client.format_url(&spec), "https://phish.in/api/v1/shows");

    let flags = Flags {
        search: Some("harry-hood".to_string()),
        ..Flags::default()
    };
    let spec = normalize("songs", flags).unwrap();
    assert_eq!(
        client.format_url(&spec),
        "https://phish.in/api/v1/songs/harry-hood"
    );

    let spec = normalize("years", Flags::default()).unwrap();
    assert_eq!(
        client.format_url(&spec),
        "https://phish.in/api/v1/years?include_show_counts=true"
    );
}

#[test]
fn test_endpoint_paths_round_trip() {
    for endpoint in [
        "eras",
        "years",
        "songs",
        "tours",
        "venues",
        "shows",
        "show-on-date",
        "shows-on-day-of-year",
        "random-show",
        "tracks",
        "search",
        "tags",
    ] {
        let parsed: Endpoint = endpoint.parse().unwrap();
        assert_eq!(parsed.path(), endpoint);
    }
}
