use serde_json::json;
use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};
use vitrine_content::Entity;

#[tokio::test]
async fn db_actor_crud_ordering_and_singleton_upsert() {
    // NOTE: `vitrine::db::spawn()` registers a singleton ractor actor by name
    // within a process. Keep this test file to a single test.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "vitrine-db-records-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    let database_url = format!("sqlite:{}", temp_path.display());
    let db = vitrine::db::spawn(&database_url).await;

    // 1) empty table lists as empty.
    let rows = db.list(Entity::Projects).await.expect("list failed");
    assert!(rows.is_empty());

    // 2) inserts without an explicit order append: positions 0, then 1.
    let first = db
        .insert(Entity::Projects, json!({ "title": "Alpha" }))
        .await
        .expect("insert failed");
    assert_eq!(first["order"], json!(0));
    let first_id = first["id"].as_i64().expect("id missing");

    let second = db
        .insert(Entity::Projects, json!({ "title": "Beta" }))
        .await
        .expect("insert failed");
    assert_eq!(second["order"], json!(1));
    let second_id = second["id"].as_i64().expect("id missing");

    // 3) an explicit order is honored; equal positions tie-break by id.
    let third = db
        .insert(Entity::Projects, json!({ "title": "Gamma", "order": 0 }))
        .await
        .expect("insert failed");
    assert_eq!(third["order"], json!(0));
    let third_id = third["id"].as_i64().expect("id missing");

    let rows = db.list(Entity::Projects).await.expect("list failed");
    let ids: Vec<i64> = rows
        .iter()
        .map(|r| r["id"].as_i64().expect("id missing"))
        .collect();
    assert_eq!(ids, vec![first_id, third_id, second_id]);

    // 4) updates shallow-merge over the stored document; untouched fields
    //    survive and updated_at moves.
    let updated = db
        .update(
            Entity::Projects,
            first_id,
            json!({ "description": "rewritten" }),
        )
        .await
        .expect("update failed");
    assert_eq!(updated["title"], json!("Alpha"));
    assert_eq!(updated["description"], json!("rewritten"));
    assert_eq!(updated["created_at"], first["created_at"]);

    // 5) the stored id cannot be overwritten through the payload.
    let updated = db
        .update(Entity::Projects, first_id, json!({ "id": 999, "title": "Alpha2" }))
        .await
        .expect("update failed");
    assert_eq!(updated["id"].as_i64(), Some(first_id));
    assert_eq!(updated["title"], json!("Alpha2"));

    // 6) updating a missing id is an error.
    let missing = db
        .update(Entity::Projects, 424_242, json!({ "title": "x" }))
        .await;
    assert!(missing.is_err());

    // 7) singleton entities upsert: a second create updates the single row.
    let hero = db
        .insert(Entity::Hero, json!({ "name": "Ada", "title": "Dr." }))
        .await
        .expect("insert failed");
    let hero_id = hero["id"].as_i64().expect("id missing");

    let hero_again = db
        .insert(Entity::Hero, json!({ "name": "Grace" }))
        .await
        .expect("insert failed");
    assert_eq!(hero_again["id"].as_i64(), Some(hero_id));
    assert_eq!(hero_again["name"], json!("Grace"));
    assert_eq!(hero_again["title"], json!("Dr."));

    let only = db.first(Entity::Hero).await.expect("first failed");
    assert_eq!(
        only.expect("singleton row missing")["name"],
        json!("Grace")
    );

    // 8) delete removes the row; deleting again is a no-op.
    db.delete(Entity::Projects, second_id)
        .await
        .expect("delete failed");
    db.delete(Entity::Projects, second_id)
        .await
        .expect("repeat delete failed");

    let rows = db.list(Entity::Projects).await.expect("list failed");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["id"].as_i64() != Some(second_id)));

    let _ = fs::remove_file(&temp_path);
}
