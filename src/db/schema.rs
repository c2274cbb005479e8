//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

use vitrine_content::Entity;

/// Every content entity shares the same table shape: envelope columns plus a
/// JSON document holding the entity's freeform fields. Table names come from
/// the `Entity` enum, never from request input.
fn table_statements(table: &str) -> [String; 2] {
    [
        format!(
            r"CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY NOT NULL,
    position INTEGER NOT NULL DEFAULT 0,
    data TEXT NOT NULL DEFAULT '{{}}',
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL -- RFC3339
)"
        ),
        format!("CREATE INDEX IF NOT EXISTS idx_{table}_position ON {table}(position)"),
    ]
}

/// All statements needed to initialize an empty database.
pub fn init_statements() -> Vec<String> {
    Entity::ALL
        .into_iter()
        .flat_map(|entity| table_statements(entity.table()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_table_and_index_per_entity() {
        let statements = init_statements();
        assert_eq!(statements.len(), Entity::ALL.len() * 2);
        assert!(statements[0].contains("CREATE TABLE IF NOT EXISTS hero"));
        assert!(
            statements
                .iter()
                .any(|s| s.contains("idx_work_experience_position"))
        );
    }
}
