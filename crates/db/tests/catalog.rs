//! Integration tests for the raw-material catalog repository.

use sqlx::PgPool;

use padoca_db::models::raw_material::CreateRawMaterial;
use padoca_db::repositories::RawMaterialRepo;

fn new_material(name: &str, unit: &str) -> CreateRawMaterial {
    CreateRawMaterial {
        name: name.to_string(),
        unit_of_measure: unit.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_ordered_by_name(pool: PgPool) {
    RawMaterialRepo::create(&pool, &new_material("Sal", "kg"))
        .await
        .expect("create should succeed");
    RawMaterialRepo::create(&pool, &new_material("Farinha", "kg"))
        .await
        .expect("create should succeed");
    RawMaterialRepo::create(&pool, &new_material("Ovo", "un"))
        .await
        .expect("create should succeed");

    let materials = RawMaterialRepo::list(&pool).await.expect("list should succeed");
    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Farinha", "Ovo", "Sal"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_assigned_identity(pool: PgPool) {
    let material = RawMaterialRepo::create(&pool, &new_material("Fermento", "g"))
        .await
        .expect("create should succeed");

    assert!(material.id > 0);
    assert_eq!(material.name, "Fermento");
    assert_eq!(material.unit_of_measure, "g");

    let found = RawMaterialRepo::find_by_id(&pool, material.id)
        .await
        .expect("find should succeed")
        .expect("row must exist");
    assert_eq!(found.name, "Fermento");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_violates_unique_constraint(pool: PgPool) {
    RawMaterialRepo::create(&pool, &new_material("Farinha", "kg"))
        .await
        .expect("first create should succeed");

    let err = RawMaterialRepo::create(&pool, &new_material("Farinha", "g"))
        .await
        .expect_err("duplicate name must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_raw_materials_name"));
        }
        other => panic!("expected database error, got {other:?}"),
    }

    // Exactly one row named Farinha exists afterwards.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM raw_materials WHERE name = 'Farinha'")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count.0, 1);
}
