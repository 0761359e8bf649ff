//! Integration tests for sorm using in-memory SQLite database
//!
//! These tests verify the full session workflow including:
//! - Table creation and schema management
//! - Insert, find, update, delete and count
//! - WHERE accumulation and IN expansion
//! - Hooks
//! - Transactions
//! - Error handling and session reset

use fake::Fake;
use fake::faker::name::en::Name;
use sorm::prelude::*;

#[ctor::ctor]
unsafe fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Test Model Definitions
// =============================================================================

/// User model for basic record operations
#[derive(Clone, Debug, PartialEq, Model)]
#[sorm(table_name = "users")]
pub struct User {
    #[sorm(primary_key, auto_increment)]
    pub id:    i64,
    pub name:  String,
    #[sorm(unique)]
    pub email: String,
    pub age:   Option<i64>,
}

impl User {
    fn new(name: &str, age: Option<i64>) -> Self {
        Self { id: 0, name: name.to_string(), email: format!("{}@example.com", name.to_lowercase()), age }
    }
}

/// Model relying on the default table name and column renames
#[derive(Clone, Debug, PartialEq, Model)]
pub struct UserAccount {
    #[sorm(primary_key, auto_increment)]
    pub id:     i64,
    #[sorm(column_name = "display_name")]
    pub name:   String,
    #[sorm(default = "'free'")]
    pub plan:   String,
    pub avatar: Option<Vec<u8>>,
}

/// Note model with hand-written hooks: archived notes are hidden and notes are never deleted
#[derive(Clone, Debug, PartialEq, Model)]
#[sorm(table_name = "notes", hooks)]
pub struct Note {
    #[sorm(primary_key, auto_increment)]
    pub id:       i64,
    pub title:    String,
    #[sorm(default = "0")]
    pub archived: bool,
}

impl Hooks for Note {
    fn before_query(session: &mut Session) -> Result<()> {
        session.where_("archived = ?", args![false]);
        Ok(())
    }

    fn before_insert(&mut self) -> Result<()> {
        self.title = self.title.trim().to_string();
        Ok(())
    }

    fn after_query(&mut self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::Query(format!("note {} has no title", self.id)));
        }
        Ok(())
    }

    fn before_delete(_session: &mut Session) -> Result<()> {
        Err(Error::Query("notes are archived, not deleted".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Open an in-memory database and return a session on it
async fn create_test_session() -> Session {
    let engine = Builder::new_local(":memory:").build().await.unwrap();
    engine.new_session().unwrap()
}

/// Create the users table and insert sample users
async fn create_sample_users(session: &mut Session) -> Vec<User> {
    session.model::<User>().create_table().await.unwrap();
    session
        .insert(vec![
            User::new("Alice", Some(30)),
            User::new("Bob", Some(25)),
            User::new("Charlie", None),
            User::new("Diana", Some(35)),
            User::new("Eve", Some(28)),
        ])
        .await
        .unwrap()
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

// =============================================================================
// Model Derive Tests
// =============================================================================

mod derive_tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(User::table_name(), "users");
        assert_eq!(UserAccount::table_name(), "user_account");
    }

    #[test]
    fn test_columns() {
        assert_eq!(User::column_names(), vec!["id", "name", "email", "age"]);
        assert_eq!(User::insert_columns(), vec!["name", "email", "age"]);

        let columns = User::columns();
        assert!(columns[0].primary_key && columns[0].auto_increment);
        assert_eq!(columns[0].column_type, ColumnType::BigInt);
        assert!(columns[2].unique);
        assert!(columns[3].nullable);
        assert!(!columns[1].nullable);
    }

    #[test]
    fn test_column_attributes() {
        let columns = UserAccount::columns();
        assert_eq!(columns[1].field, "name");
        assert_eq!(columns[1].name, "display_name");
        assert_eq!(columns[2].default, Some("'free'"));
        assert_eq!(columns[3].column_type, ColumnType::Blob);
        assert!(columns[3].nullable);
    }

    #[test]
    fn test_insert_values_skip_auto_increment() {
        let user = User::new("Alice", None);
        assert_eq!(
            user.insert_values(),
            vec![Value::Text("Alice".into()), Value::Text("alice@example.com".into()), Value::Null]
        );
    }

    #[test]
    fn test_schema_from_derive() {
        let schema = sorm::Schema::parse::<UserAccount>(&sorm::dialect::Sqlite3);
        assert_eq!(
            schema.create_table_sql(false),
            "CREATE TABLE user_account (id integer PRIMARY KEY AUTOINCREMENT, display_name text NOT NULL, plan text \
             NOT NULL DEFAULT 'free', avatar blob)"
        );
        assert_eq!(schema.get_field("name").unwrap().column, "display_name");
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config_tests {
    use super::*;

    #[tokio::test]
    async fn test_open() {
        let session = sorm::open("sqlite3", ":memory:").await.unwrap();
        assert_eq!(session.dialect().name(), "sqlite3");
        assert_eq!(session.connection().path(), ":memory:");
    }

    #[tokio::test]
    async fn test_unknown_dialect() {
        let err = Builder::new_local(":memory:").dialect("oracle").build().await.unwrap_err();
        assert!(matches!(err, Error::DialectNotFound(ref name) if name == "oracle"));
    }

    #[tokio::test]
    async fn test_dialect_aliases() {
        let engine = Builder::new_local(":memory:").dialect("turso").build().await.unwrap();
        assert_eq!(engine.connect().unwrap().dialect().name(), "sqlite3");
    }
}

// =============================================================================
// Table Tests
// =============================================================================

mod table_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_has_drop_table() {
        let mut session = create_test_session().await;
        session.model::<User>();

        assert!(!session.has_table().await.unwrap());
        session.create_table().await.unwrap();
        assert!(session.has_table().await.unwrap());
        session.drop_table().await.unwrap();
        assert!(!session.has_table().await.unwrap());
    }

    #[tokio::test]
    async fn test_drop_missing_table() {
        let mut session = create_test_session().await;
        session.model::<UserAccount>().drop_table().await.unwrap();
    }

    #[tokio::test]
    async fn test_create_table_twice_fails() {
        let mut session = create_test_session().await;
        session.model::<User>().create_table().await.unwrap();
        let err = session.create_table().await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }

    #[tokio::test]
    async fn test_table_ops_without_model() {
        let mut session = create_test_session().await;
        assert!(matches!(session.create_table().await, Err(Error::ModelNotSet)));
        assert!(matches!(session.ref_table(), Err(Error::ModelNotSet)));
    }

    #[tokio::test]
    async fn test_model_switch() {
        let mut session = create_test_session().await;
        session.model::<User>();
        assert_eq!(session.ref_table().unwrap().name, "users");
        session.model::<UserAccount>();
        assert_eq!(session.ref_table().unwrap().name, "user_account");
    }
}

// =============================================================================
// Insert Tests
// =============================================================================

mod insert_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_returns_stored_rows() {
        let mut session = create_test_session().await;
        let users = create_sample_users(&mut session).await;

        assert_eq!(users.len(), 5);
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(users[0], User { id: 1, ..User::new("Alice", Some(30)) });
        assert_eq!(users[2].age, None);
    }

    #[tokio::test]
    async fn test_create_single() {
        let mut session = create_test_session().await;
        session.model::<User>().create_table().await.unwrap();

        let user = session.create(User::new("Tom", Some(18))).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Tom");
    }

    #[tokio::test]
    async fn test_insert_renamed_column_and_blob() {
        let mut session = create_test_session().await;
        session.model::<UserAccount>().create_table().await.unwrap();

        let account = session
            .create(UserAccount { id: 0, name: "tom".into(), plan: "pro".into(), avatar: Some(vec![1, 2, 3]) })
            .await
            .unwrap();
        assert_eq!(account.name, "tom");
        assert_eq!(account.plan, "pro");
        assert_eq!(account.avatar, Some(vec![1, 2, 3]));

        let stored = session.where_("display_name = ?", args!["tom"]).first::<UserAccount>().await.unwrap();
        assert_eq!(stored, account);
    }

    #[tokio::test]
    async fn test_insert_unique_violation() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let err = session.create(User::new("Alice", None)).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert_eq!(session.model::<User>().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_insert_empty_batch() {
        let mut session = create_test_session().await;
        session.model::<User>().create_table().await.unwrap();

        let err = session.insert(Vec::<User>::new()).await.unwrap_err();
        assert!(matches!(err, Error::MalformedClauseArgs { kind: ClauseKind::Values, .. }));
        assert!(session.clause().is_empty());
    }

    #[tokio::test]
    async fn test_insert_fake_batch() {
        let mut session = create_test_session().await;
        session.model::<User>().create_table().await.unwrap();

        let users: Vec<User> = (0..20)
            .map(|idx| {
                let name: String = Name().fake();
                User { id: 0, email: format!("user{}@example.com", idx), age: Some(20 + idx), name }
            })
            .collect();

        let stored = session.insert(users.clone()).await.unwrap();
        assert_eq!(stored.len(), 20);
        assert_eq!(stored[19].name, users[19].name);
        assert_eq!(session.count().await.unwrap(), 20);
    }
}

// =============================================================================
// Find Tests
// =============================================================================

mod find_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all() {
        let mut session = create_test_session().await;
        let inserted = create_sample_users(&mut session).await;

        let users = session.find::<User>().await.unwrap();
        assert_eq!(users, inserted);
    }

    #[tokio::test]
    async fn test_find_where_accumulates() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session
            .where_("age > ?", args![26])
            .where_("age < ?", args![35])
            .order_by("age DESC")
            .find::<User>()
            .await
            .unwrap();
        assert_eq!(names(&users), vec!["Alice", "Eve"]);
    }

    #[tokio::test]
    async fn test_find_in_expansion() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session
            .where_("age > ?", args![20])
            .where_("name in (?)", args![Arg::list(["Alice", "Bob", "Charlie"])])
            .where_("id <> ?", args![2])
            .order_by("id")
            .find::<User>()
            .await
            .unwrap();
        assert_eq!(names(&users), vec!["Alice"]);
    }

    #[tokio::test]
    async fn test_find_in_with_parentheses() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session.where_("id IN (?)", args![Arg::list([2, 4])]).order_by("id").find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Bob", "Diana"]);
    }

    #[tokio::test]
    async fn test_find_literal_in_list() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users =
            session.where_("name in ('Bob', 'Eve')", args![]).where_("age > ?", args![26]).find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Eve"]);
    }

    #[tokio::test]
    async fn test_find_limit_offset() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session.order_by("id").limit(2).offset(1).find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Bob", "Charlie"]);
    }

    #[tokio::test]
    async fn test_find_empty_where() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session.where_("", args![]).find::<User>().await.unwrap();
        assert_eq!(users.len(), 5);

        let users = session.where_("", args![]).where_("id = ?", args![1]).find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Alice"]);

        let count = session.model::<User>().where_("age > ?", args![29]).where_("", args![]).count().await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_find_null_check() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let users = session.where_("age IS NULL", args![]).find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Charlie"]);
    }

    #[tokio::test]
    async fn test_first() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let user = session.order_by("age DESC").first::<User>().await.unwrap();
        assert_eq!(user.name, "Diana");
    }

    #[tokio::test]
    async fn test_first_not_found() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let err = session.where_("age > ?", args![100]).first::<User>().await.unwrap_err();
        assert!(matches!(err, Error::RecordNotFound));
    }

    #[tokio::test]
    async fn test_clauses_reset_between_statements() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let filtered = session.where_("age > ?", args![29]).find::<User>().await.unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(session.clause().is_empty());

        let all = session.find::<User>().await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_in_without_argument() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let err = session.where_("id in ?", args![]).find::<User>().await.unwrap_err();
        assert!(matches!(err, Error::PlaceholderArgumentMismatch { index: 0, available: 0 }));
        assert!(session.clause().is_empty());
    }
}

// =============================================================================
// Update / Delete / Count Tests
// =============================================================================

mod write_tests {
    use super::*;

    #[tokio::test]
    async fn test_update() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let affected = session
            .model::<User>()
            .where_("name in (?)", args![Arg::list(["Alice", "Bob"])])
            .update([("age", 40)])
            .await
            .unwrap();
        assert_eq!(affected, 2);

        let users = session.where_("age = ?", args![40]).order_by("id").find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_update_several_columns() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let affected = session
            .model::<User>()
            .where_("id = ?", args![3])
            .update([("name", Value::Text("Chuck".into())), ("age", Value::Integer(41))])
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let user = session.where_("id = ?", args![3]).first::<User>().await.unwrap();
        assert_eq!((user.name.as_str(), user.age), ("Chuck", Some(41)));
    }

    #[tokio::test]
    async fn test_update_without_sets() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let err =
            session.model::<User>().where_("id = ?", args![1]).update(Vec::<(&str, i64)>::new()).await.unwrap_err();
        assert!(matches!(err, Error::MalformedClauseArgs { kind: ClauseKind::Update, .. }));
        assert!(session.clause().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let affected = session.model::<User>().where_("age < ?", args![30]).delete().await.unwrap();
        assert_eq!(affected, 2);
        assert_eq!(session.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        assert_eq!(session.model::<User>().delete().await.unwrap(), 5);
        assert_eq!(session.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count_where() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let count = session.model::<User>().where_("age >= ?", args![28]).count().await.unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_verbs_without_model() {
        let mut session = create_test_session().await;

        let err = session.where_("id = ?", args![1]).count().await.unwrap_err();
        assert!(matches!(err, Error::ModelNotSet));
        assert!(session.clause().is_empty());

        assert!(matches!(session.delete().await, Err(Error::ModelNotSet)));
        assert!(matches!(session.update([("age", 1)]).await, Err(Error::ModelNotSet)));
    }
}

// =============================================================================
// Hook Tests
// =============================================================================

mod hook_tests {
    use super::*;

    async fn create_notes(session: &mut Session) {
        session.model::<Note>().create_table().await.unwrap();
        session
            .insert(vec![
                Note { id: 0, title: "  groceries ".into(), archived: false },
                Note { id: 0, title: "taxes".into(), archived: true },
                Note { id: 0, title: "garden".into(), archived: false },
            ])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_before_insert_runs_per_record() {
        let mut session = create_test_session().await;
        create_notes(&mut session).await;

        let note = session.where_("id = ?", args![1]).first::<Note>().await.unwrap();
        assert_eq!(note.title, "groceries");
    }

    #[tokio::test]
    async fn test_before_query_adds_filter() {
        let mut session = create_test_session().await;
        create_notes(&mut session).await;

        let notes = session.find::<Note>().await.unwrap();
        assert_eq!(notes.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(), vec!["groceries", "garden"]);

        let notes = session.where_("title like ?", args!["g%"]).order_by("title").find::<Note>().await.unwrap();
        assert_eq!(notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3, 1]);

        assert_eq!(session.model::<Note>().count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_after_query_error_propagates() {
        let mut session = create_test_session().await;
        session.model::<Note>().create_table().await.unwrap();
        session.create(Note { id: 0, title: "   ".into(), archived: false }).await.unwrap();

        let err = session.find::<Note>().await.unwrap_err();
        assert!(matches!(err, Error::Query(ref msg) if msg == "note 1 has no title"));
    }

    #[tokio::test]
    async fn test_before_delete_error_aborts() {
        let mut session = create_test_session().await;
        create_notes(&mut session).await;

        let err = session.model::<Note>().where_("id = ?", args![1]).delete().await.unwrap_err();
        assert!(matches!(err, Error::Query(_)));
        assert!(session.clause().is_empty());
        assert_eq!(session.count().await.unwrap(), 3);
    }
}

// =============================================================================
// Transaction Tests
// =============================================================================

mod transaction_tests {
    use super::*;

    async fn create_engine_with_users() -> (Engine, Session) {
        let engine = Builder::new_local(":memory:").build().await.unwrap();
        let mut session = engine.new_session().unwrap();
        create_sample_users(&mut session).await;
        (engine, session)
    }

    #[tokio::test]
    async fn test_rollback_restores_rows() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        session.begin().await.unwrap();
        let affected = session.model::<User>().where_("age < ?", args![30]).delete().await.unwrap();
        assert_eq!(affected, 2);
        assert_eq!(session.count().await.unwrap(), 3);
        session.rollback().await.unwrap();

        assert_eq!(session.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_commit_keeps_changes() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        session.begin().await.unwrap();
        session.create(User::new("Frank", Some(40))).await.unwrap();
        session.commit().await.unwrap();

        assert_eq!(session.model::<User>().count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_engine_transaction_commits_on_ok() {
        let (engine, mut session) = create_engine_with_users().await;

        let created = engine
            .transaction(|tx| {
                Box::pin(async move {
                    tx.model::<User>().where_("name = ?", args!["Bob"]).delete().await?;
                    tx.create(User::new("Grace", Some(22))).await
                })
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Grace");

        let users = session.order_by("id").find::<User>().await.unwrap();
        assert_eq!(names(&users), vec!["Alice", "Charlie", "Diana", "Eve", "Grace"]);
    }

    #[tokio::test]
    async fn test_engine_transaction_rolls_back_on_err() {
        let (engine, mut session) = create_engine_with_users().await;

        let result: Result<()> = engine
            .transaction(|tx| {
                Box::pin(async move {
                    tx.model::<User>().delete().await?;
                    Err(Error::Query("abort".to_string()))
                })
            })
            .await;
        assert!(matches!(result, Err(Error::Query(ref msg)) if msg == "abort"));

        assert_eq!(session.model::<User>().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_engine_close() {
        let engine = Builder::new_local(":memory:").build().await.unwrap();
        let mut session = engine.new_session().unwrap();
        session.model::<User>().create_table().await.unwrap();
        engine.close();
    }
}

// =============================================================================
// Raw Statement Tests
// =============================================================================

mod raw_tests {
    use super::*;

    #[tokio::test]
    async fn test_raw_exec_with_in_expansion() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let affected =
            session.raw("DELETE FROM users WHERE id IN (?)", args![Arg::list([1, 3, 5])]).exec().await.unwrap();
        assert_eq!(affected, 3);
    }

    #[tokio::test]
    async fn test_raw_query_row() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let row = session
            .raw("SELECT name FROM users", args![])
            .raw("WHERE age = ?", args![25])
            .query_row()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(String::from_value(row.get_value(0).unwrap()).unwrap(), "Bob");
    }

    #[tokio::test]
    async fn test_raw_query_rows() {
        let mut session = create_test_session().await;
        create_sample_users(&mut session).await;

        let mut rows =
            session.raw("SELECT id FROM users WHERE age > ? ORDER BY id", args![29]).query_rows().await.unwrap();
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            ids.push(i64::from_value(row.get_value(0).unwrap()).unwrap());
        }
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn test_stray_sequence() {
        let mut session = create_test_session().await;

        let err = session.raw("SELECT ?", args![Arg::list([1, 2])]).exec().await.unwrap_err();
        assert!(matches!(err, Error::UnboundSequence { index: 0 }));
    }

    #[tokio::test]
    async fn test_prepare_resets_session() {
        let mut session = create_test_session().await;
        session.where_("id = ?", args![1]).raw("SELECT 1", args![]);

        let (sql, values) = session.prepare().unwrap();
        assert_eq!(sql, "SELECT 1 ");
        assert!(values.is_empty());
        assert!(session.clause().is_empty());

        let (sql, _) = session.prepare().unwrap();
        assert_eq!(sql, "");
    }

    #[tokio::test]
    async fn test_prepare_postgres_placeholders() {
        let engine = Builder::new_local(":memory:").dialect("postgres").build().await.unwrap();
        let mut session = engine.new_session().unwrap();

        let (sql, values) = session
            .raw("SELECT * FROM users WHERE age > ? AND id in ?", args![18, Arg::list([7, 8, 9])])
            .raw("LIMIT ?", args![10])
            .prepare()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE age > $1 AND id IN $2,$3,$4 LIMIT $5 ");
        assert_eq!(
            values,
            vec![Value::Integer(18), Value::Integer(7), Value::Integer(8), Value::Integer(9), Value::Integer(10)]
        );
    }
}
