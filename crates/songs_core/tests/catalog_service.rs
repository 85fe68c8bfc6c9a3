use songs_core::db::open_db_in_memory;
use songs_core::{
    AddSongRequest, CatalogError, CatalogService, SongRepository, SongStatus,
    SqliteSongRepository,
};
use std::collections::HashSet;

fn request(title: &str, artist: Option<&str>) -> AddSongRequest {
    AddSongRequest::new(title, artist, "Sam")
}

#[test]
fn add_song_returns_detail_and_positive_id() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let (detail, id) = service
        .add_song(&request("Midnight Train", Some("Gladys Knight")))
        .unwrap();

    assert!(id > 0);
    assert_eq!(detail.id, id);
    assert_eq!(detail.title, "Midnight Train");
    assert_eq!(detail.artist.as_deref(), Some("Gladys Knight"));
    assert_eq!(detail.recommended_by, "Sam");

    let stored = SqliteSongRepository::try_new(&conn)
        .unwrap()
        .find_song(id, true)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, SongStatus::Active);
}

#[test]
fn get_song_round_trips_submitted_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let (_, id) = service.add_song(&request("Demo", None)).unwrap();
    let detail = service.get_song(id).unwrap();

    assert_eq!(detail.id, id);
    assert_eq!(detail.title, "Demo");
    assert_eq!(detail.artist, None);
    assert_eq!(detail.recommended_by, "Sam");
}

#[test]
fn disliked_song_is_rejected_without_touching_the_store() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let err = service
        .add_song(&request("Walk On The Ocean", Some("Toad The Wet Sprocket")))
        .unwrap_err();

    match err {
        CatalogError::ValidationFailed(violations) => {
            let tagged: Vec<(&str, &str)> = violations
                .iter()
                .map(|v| (v.field.as_str(), v.message.as_str()))
                .collect();
            assert_eq!(
                tagged,
                vec![("title", "I Hate that Song"), ("artist", "I Hate that Song")]
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM songs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn every_violated_field_is_reported_at_once() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let too_long = AddSongRequest {
        title: Some("x".repeat(101)),
        artist: None,
        recommended_by: None,
    };
    let err = service.add_song(&too_long).unwrap_err();
    let CatalogError::ValidationFailed(violations) = err else {
        panic!("expected validation failure");
    };
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["title", "recommendedBy"]);
}

#[test]
fn get_unknown_song_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let err = service.get_song(9999).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(9999)));
}

#[test]
fn list_songs_sorts_by_title() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    service.add_song(&request("Zebra", None)).unwrap();
    service.add_song(&request("Apple", None)).unwrap();
    service.add_song(&request("Mango", None)).unwrap();

    let titles: Vec<String> = service
        .list_songs()
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["Apple", "Mango", "Zebra"]);
}

#[test]
fn list_songs_uses_ordinal_comparison_and_keeps_store_order_for_ties() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let (_, first_echo) = service.add_song(&request("echo", Some("A"))).unwrap();
    service.add_song(&request("Echo", None)).unwrap();
    let (_, second_echo) = service.add_song(&request("echo", Some("B"))).unwrap();

    let listed = service.list_songs().unwrap();
    let titles: Vec<&str> = listed.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Echo", "echo", "echo"]);
    assert_eq!(listed[1].id, first_echo);
    assert_eq!(listed[2].id, second_echo);
}

#[test]
fn remove_song_is_idempotent_and_hides_the_song() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let (_, id) = service.add_song(&request("Short Lived", None)).unwrap();
    let (_, kept) = service.add_song(&request("Kept", None)).unwrap();

    service.remove_song(id).unwrap();
    assert!(matches!(service.get_song(id), Err(CatalogError::NotFound(_))));
    service.remove_song(id).unwrap();
    assert!(matches!(service.get_song(id), Err(CatalogError::NotFound(_))));

    let ids: Vec<_> = service.list_songs().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![kept]);
}

#[test]
fn remove_unknown_song_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    service.remove_song(424_242).unwrap();
}

#[test]
fn ids_stay_unique_across_removals() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    let mut seen = HashSet::new();
    for n in 0..5 {
        let (_, id) = service.add_song(&request(&format!("song {n}"), None)).unwrap();
        assert!(seen.insert(id));
        service.remove_song(id).unwrap();
    }
}

#[test]
fn infrastructure_failures_pass_through() {
    let conn = open_db_in_memory().unwrap();
    let service = CatalogService::new(SqliteSongRepository::try_new(&conn).unwrap());

    conn.execute_batch("DROP TABLE songs;").unwrap();
    let err = service.list_songs().unwrap_err();
    assert!(matches!(err, CatalogError::Repo(_)));
}
