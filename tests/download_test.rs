use phishin::download::{humanize_bytes, track_file_name};

#[test]
fn test_humanize_bytes() {
    // tiny counts print as-is
    assert_eq!(humanize_bytes(0), "0 B");
    assert_eq!(humanize_bytes(5), "5 B");
    assert_eq!(humanize_bytes(1023), "1023 B");

    // one decimal place below 10 units of the chosen suffix
    assert_eq!(humanize_bytes(9216), "9.0 KiB");
    assert_eq!(humanize_bytes(5 * 1024 * 1024 * 1024), "5.0 GiB");

    // an integer at or above it
    assert_eq!(humanize_bytes(10240), "10 KiB");
    assert_eq!(humanize_bytes(54 * 1024 * 1024), "54 MiB");
}

#[test]
fn test_track_file_name() {
    assert_eq!(track_file_name(1, "tweezer"), "01-tweezer.mp3");
    assert_eq!(track_file_name(12, "you-enjoy-myself"), "12-you-enjoy-myself.mp3");
}

#[test]
fn test_file_numbering_follows_track_order() {
    // filenames are fixed at task creation time from the api-returned order,
    // so completion order can never renumber them
    let slugs = ["buried-alive", "ac-dc-bag", "possum"];
    let names: Vec<String> = slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| track_file_name(i + 1, slug))
        .collect();
    assert_eq!(
        names,
        vec!["01-buried-alive.mp3", "02-ac-dc-bag.mp3", "03-possum.mp3"]
    );
}
