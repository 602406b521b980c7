//! SQLite Database
//!
//! Embedded record store for surveys, responses, questions, and answers,
//! using rusqlite with r2d2 connection pooling. Durable ids are uuid
//! strings assigned at insertion time; reads return records in insertion
//! order. No foreign-key constraints are enforced here: write ordering is
//! the responsibility of the services that call in.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use uuid::Uuid;

use crate::models::records::{Answer, Question, Response, Survey, UserType};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::database_path;

/// Fields of a response prior to durable-id assignment
#[derive(Debug, Clone)]
pub struct NewResponseRecord {
    pub name: String,
    pub age: i64,
    pub feedback: String,
    pub rating: i64,
    pub user_type: UserType,
    pub survey_id: Option<String>,
    pub sentiment: f64,
    pub emotion: HashMap<String, f64>,
}

/// Fields of a question prior to durable-id assignment
#[derive(Debug, Clone)]
pub struct NewQuestionRecord {
    pub survey_id: String,
    pub response_id: String,
    pub domain: String,
    pub question: String,
}

/// Fields of an answer prior to durable-id assignment
#[derive(Debug, Clone)]
pub struct NewAnswerRecord {
    pub question_id: String,
    pub response_id: String,
    pub answer: String,
    pub sentiment: f64,
}

/// Type alias for the connection pool
pub type DbPool = Pool<SqliteConnectionManager>;

/// Database service for managing SQLite operations
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a database from an existing connection pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create an in-memory database for testing.
    ///
    /// Uses an in-memory SQLite database with the same schema as the
    /// production database. Useful for integration and unit tests.
    pub fn new_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Create a new database instance with connection pooling
    pub fn new() -> AppResult<Self> {
        let db_path = database_path()?;

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        let db = Self { pool };
        db.init_schema()?;

        Ok(db)
    }

    /// Access the underlying connection pool
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn get_connection(&self) -> AppResult<r2d2::PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))
    }

    /// Initialize the database schema
    fn init_schema(&self) -> AppResult<()> {
        let conn = self.get_connection()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS surveys (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS responses (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                feedback TEXT NOT NULL,
                rating INTEGER NOT NULL,
                user_type TEXT NOT NULL,
                survey_id TEXT,
                sentiment REAL NOT NULL,
                emotion TEXT NOT NULL DEFAULT '{}'
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id TEXT PRIMARY KEY,
                survey_id TEXT NOT NULL,
                response_id TEXT NOT NULL,
                domain TEXT NOT NULL,
                question TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_questions_survey_id ON questions(survey_id)",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS answers (
                id TEXT PRIMARY KEY,
                question_id TEXT NOT NULL,
                response_id TEXT NOT NULL,
                answer TEXT NOT NULL,
                sentiment REAL NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_answers_response_id ON answers(response_id)",
            [],
        )?;

        Ok(())
    }

    // ========================================================================
    // Surveys
    // ========================================================================

    /// Insert a new survey and return it with its durable id
    pub fn insert_survey(&self, title: &str) -> AppResult<Survey> {
        let conn = self.get_connection()?;
        let survey = Survey {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        };

        conn.execute(
            "INSERT INTO surveys (id, title, created_at) VALUES (?1, ?2, ?3)",
            params![survey.id, survey.title, survey.created_at.to_rfc3339()],
        )?;

        Ok(survey)
    }

    /// List all surveys in insertion order
    pub fn list_surveys(&self) -> AppResult<Vec<Survey>> {
        let conn = self.get_connection()?;
        let mut stmt =
            conn.prepare("SELECT id, title, created_at FROM surveys ORDER BY rowid")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, title, created_at)| {
                Ok(Survey {
                    id,
                    title,
                    created_at: parse_timestamp(&created_at)?,
                })
            })
            .collect()
    }

    // ========================================================================
    // Responses
    // ========================================================================

    /// Insert a new response and return its durable id
    pub fn insert_response(&self, record: NewResponseRecord) -> AppResult<String> {
        let conn = self.get_connection()?;
        let id = Uuid::new_v4().to_string();
        let emotion_json = serde_json::to_string(&record.emotion)?;

        conn.execute(
            "INSERT INTO responses (id, name, age, feedback, rating, user_type, survey_id, sentiment, emotion)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                id,
                record.name,
                record.age,
                record.feedback,
                record.rating,
                record.user_type.as_str(),
                record.survey_id,
                record.sentiment,
                emotion_json,
            ],
        )?;

        Ok(id)
    }

    /// List all responses in insertion order
    pub fn list_responses(&self) -> AppResult<Vec<Response>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, age, feedback, rating, user_type, survey_id, sentiment, emotion
             FROM responses ORDER BY rowid",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, Option<String>>(6)?,
                    row.get::<_, f64>(7)?,
                    row.get::<_, String>(8)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(
                |(id, name, age, feedback, rating, user_type, survey_id, sentiment, emotion)| {
                    Ok(Response {
                        id,
                        name,
                        age,
                        feedback,
                        rating,
                        user_type: parse_user_type(&user_type)?,
                        survey_id,
                        sentiment,
                        emotion: serde_json::from_str(&emotion)?,
                    })
                },
            )
            .collect()
    }

    // ========================================================================
    // Questions
    // ========================================================================

    /// Insert a batch of questions atomically and return their durable ids,
    /// in input order.
    ///
    /// All inserts run inside a single transaction: either every question
    /// receives a durable id or none is stored.
    pub fn insert_questions(&self, records: &[NewQuestionRecord]) -> AppResult<Vec<String>> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;
        let created_at = Utc::now().to_rfc3339();

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let id = Uuid::new_v4().to_string();
            tx.execute(
                "INSERT INTO questions (id, survey_id, response_id, domain, question, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    record.survey_id,
                    record.response_id,
                    record.domain,
                    record.question,
                    created_at,
                ],
            )?;
            ids.push(id);
        }

        tx.commit()?;
        Ok(ids)
    }

    /// Find questions, optionally filtered by survey, in insertion order
    pub fn find_questions(&self, survey_id: Option<&str>) -> AppResult<Vec<Question>> {
        let conn = self.get_connection()?;

        let mut sql = String::from(
            "SELECT id, survey_id, response_id, domain, question, created_at FROM questions",
        );
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(sid) = survey_id {
            sql.push_str(" WHERE survey_id = ?1");
            params_vec.push(Box::new(sid.to_string()));
        }
        sql.push_str(" ORDER BY rowid");

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_refs.as_slice(), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(
                |(id, survey_id, response_id, domain, question, created_at)| {
                    Ok(Question {
                        id,
                        survey_id,
                        response_id,
                        domain,
                        question,
                        created_at: parse_timestamp(&created_at)?,
                    })
                },
            )
            .collect()
    }

    /// Check whether a question with the given durable id exists
    pub fn question_exists(&self, question_id: &str) -> AppResult<bool> {
        let conn = self.get_connection()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?1)",
            params![question_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // ========================================================================
    // Answers
    // ========================================================================

    /// Insert a new answer and return its durable id
    pub fn insert_answer(&self, record: NewAnswerRecord) -> AppResult<String> {
        let conn = self.get_connection()?;
        let id = Uuid::new_v4().to_string();

        conn.execute(
            "INSERT INTO answers (id, question_id, response_id, answer, sentiment, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                record.question_id,
                record.response_id,
                record.answer,
                record.sentiment,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(id)
    }

    /// Find answers, optionally filtered by response, in insertion order
    pub fn find_answers(&self, response_id: Option<&str>) -> AppResult<Vec<Answer>> {
        let conn = self.get_connection()?;

        let mut sql = String::from(
            "SELECT id, question_id, response_id, answer, sentiment, created_at FROM answers",
        );
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(rid) = response_id {
            sql.push_str(" WHERE response_id = ?1");
            params_vec.push(Box::new(rid.to_string()));
        }
        sql.push_str(" ORDER BY rowid");

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_refs.as_slice(), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(
                |(id, question_id, response_id, answer, sentiment, created_at)| {
                    Ok(Answer {
                        id,
                        question_id,
                        response_id,
                        answer,
                        sentiment,
                        created_at: parse_timestamp(&created_at)?,
                    })
                },
            )
            .collect()
    }
}

/// Parse an RFC 3339 timestamp column back into a UTC datetime
fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp '{}': {}", raw, e)))
}

/// Parse a stored user-type column back into the enum
fn parse_user_type(raw: &str) -> AppResult<UserType> {
    UserType::parse(raw)
        .ok_or_else(|| AppError::database(format!("Invalid user_type value '{}'", raw)))
}
