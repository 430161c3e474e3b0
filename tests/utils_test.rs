use playgen::types::Track;
use playgen::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: Vec::new(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 16 characters
    assert_eq!(state.len(), 16);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );

    // SHA-256 digests are 32 bytes, so the unpadded base64 form is 43 chars
    assert_eq!(challenge.len(), 43);
}

#[test]
fn test_mood_keywords_known_mood() {
    assert_eq!(mood_keywords("chill"), "chill acoustic ambient");
    assert_eq!(mood_keywords("sleep"), "sleep ambient calm");

    // Lookup is case-insensitive and trims whitespace
    assert_eq!(mood_keywords("  Chill "), "chill acoustic ambient");
}

#[test]
fn test_mood_keywords_unknown_mood_falls_back_to_identity() {
    assert_eq!(mood_keywords("sea shanty hour"), "sea shanty hour");
}

#[test]
fn test_normalize_genre() {
    assert_eq!(normalize_genre("Techno"), "techno");
    assert_eq!(normalize_genre("Hip Hop"), "hip-hop");
    assert_eq!(normalize_genre("  k pop  "), "k-pop");
    assert_eq!(normalize_genre("rock"), "rock");
}

#[test]
fn test_is_seed_genre() {
    assert!(is_seed_genre("techno"));
    assert!(is_seed_genre("pop"));
    assert!(is_seed_genre("hip-hop"));

    assert!(!is_seed_genre("yodeling"));
    assert!(!is_seed_genre(""));

    // Allow-list entries are pre-normalized; raw user input is not
    assert!(!is_seed_genre("Hip Hop"));
    assert!(is_seed_genre(&normalize_genre("Hip Hop")));
}

#[test]
fn test_clamp_desired_count() {
    assert_eq!(clamp_desired_count(0), 1);
    assert_eq!(clamp_desired_count(1), 1);
    assert_eq!(clamp_desired_count(20), 20);
    assert_eq!(clamp_desired_count(50), 50);
    assert_eq!(clamp_desired_count(51), 50);
    assert_eq!(clamp_desired_count(500), 50);
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("id1"),
        create_test_track("id2"),
        create_test_track("id1"), // Duplicate
        create_test_track("id3"),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should contain the first occurrence of each unique ID, in order
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_shuffle_tracks_preserves_membership() {
    let original: Vec<Track> = (0..30)
        .map(|i| create_test_track(&format!("id{}", i)))
        .collect();
    let mut shuffled = original.clone();

    shuffle_tracks(&mut shuffled);

    // Same length and the same set of ids, possibly reordered
    assert_eq!(shuffled.len(), original.len());
    let mut original_ids: Vec<&String> = original.iter().map(|t| &t.id).collect();
    let mut shuffled_ids: Vec<&String> = shuffled.iter().map(|t| &t.id).collect();
    original_ids.sort();
    shuffled_ids.sort();
    assert_eq!(original_ids, shuffled_ids);
}
