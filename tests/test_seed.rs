//! Seeder integration tests

use jokes_lib::app::{joke_count, joke_texts, seed_if_empty, seed_with, DEFAULT_JOKES};
use jokes_lib::infra::db::init_test_db;
use std::collections::HashSet;

// ══════════════════════════════════════════════════════════
//  seed_if_empty
// ══════════════════════════════════════════════════════════

#[test]
fn seed_fresh_store_inserts_default_jokes() {
    let pool = init_test_db();
    assert_eq!(seed_if_empty(&pool).unwrap(), 5);

    let texts = joke_texts(&pool).unwrap();
    assert_eq!(texts.len(), 5);
    let unique: HashSet<&str> = texts.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), 5);
    for text in &texts {
        assert!(DEFAULT_JOKES.contains(&text.as_str()), "unexpected joke {text}");
    }
}

#[test]
fn seed_twice_is_idempotent() {
    let pool = init_test_db();
    seed_if_empty(&pool).unwrap();
    let first = joke_texts(&pool).unwrap();

    assert_eq!(seed_if_empty(&pool).unwrap(), 0);

    assert_eq!(joke_texts(&pool).unwrap(), first);
}

#[test]
fn seeded_list_is_newest_first() {
    let pool = init_test_db();
    seed_if_empty(&pool).unwrap();

    let texts = joke_texts(&pool).unwrap();
    assert_eq!(
        texts.first().map(String::as_str),
        Some("Hvorfor er programmører alltid kalde? De jobber med Windows!")
    );
    assert_eq!(
        texts.last().map(String::as_str),
        Some("Hvorfor kan ikke syklister stå opp? Fordi de er to-hjulte!")
    );
    let expected: Vec<String> = DEFAULT_JOKES.iter().rev().map(|s| s.to_string()).collect();
    assert_eq!(texts, expected);
}

#[test]
fn seed_skips_non_empty_store() {
    let pool = init_test_db();
    pool.0
        .lock()
        .unwrap()
        .execute("INSERT INTO jokes (text) VALUES ('Egen vits')", [])
        .unwrap();

    assert_eq!(seed_if_empty(&pool).unwrap(), 0);

    assert_eq!(joke_texts(&pool).unwrap(), vec!["Egen vits".to_string()]);
}

#[test]
fn seed_does_not_top_up_partial_seed() {
    let pool = init_test_db();
    {
        let conn = pool.0.lock().unwrap();
        for joke in &DEFAULT_JOKES[..2] {
            conn.execute("INSERT INTO jokes (text) VALUES (?1)", [joke])
                .unwrap();
        }
    }

    assert_eq!(seed_if_empty(&pool).unwrap(), 0);
    assert_eq!(joke_count(&pool).unwrap(), 2);
}

#[test]
fn seed_without_table_is_seed_failure() {
    let pool = init_test_db();
    pool.0.lock().unwrap().execute("DROP TABLE jokes", []).unwrap();

    let err = seed_if_empty(&pool).unwrap_err();
    assert_eq!(err.code(), "SEED_FAILURE");
}

#[test]
fn seed_insert_failure_leaves_partial_seed() {
    let pool = init_test_db();
    pool.0
        .lock()
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER jokes_disk_full BEFORE INSERT ON jokes
             WHEN (SELECT COUNT(*) FROM jokes) >= 2
             BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
        )
        .unwrap();

    let err = seed_if_empty(&pool).unwrap_err();
    assert_eq!(err.code(), "SEED_FAILURE");
    assert!(err.to_string().contains("disk full"));
    assert_eq!(joke_count(&pool).unwrap(), 2);
    assert_eq!(
        joke_texts(&pool).unwrap(),
        vec![DEFAULT_JOKES[1].to_string(), DEFAULT_JOKES[0].to_string()]
    );

    // The next start sees a non-empty table and leaves the partial set alone.
    pool.0
        .lock()
        .unwrap()
        .execute("DROP TRIGGER jokes_disk_full", [])
        .unwrap();
    assert_eq!(seed_if_empty(&pool).unwrap(), 0);
    assert_eq!(joke_count(&pool).unwrap(), 2);
}

// ══════════════════════════════════════════════════════════
//  seed_with
// ══════════════════════════════════════════════════════════

#[test]
fn seed_with_custom_list_preserves_insertion_order() {
    let pool = init_test_db();
    assert_eq!(seed_with(&pool, &["a", "b", "c"]).unwrap(), 3);

    let ids: Vec<(i64, String)> = {
        let conn = pool.0.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, text FROM jokes ORDER BY id").unwrap();
        let rows = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        let out: Vec<(i64, String)> = rows.map(|r| r.unwrap()).collect();
        out
    };
    let texts: Vec<&str> = ids.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
    assert!(ids.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn seed_with_empty_list_inserts_nothing() {
    let pool = init_test_db();
    assert_eq!(seed_with(&pool, &[]).unwrap(), 0);
    assert_eq!(joke_count(&pool).unwrap(), 0);
}
