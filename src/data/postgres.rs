use crate::{
    data::{Student, StudentRepository},
    error::{GetDatabaseConnectionSnafu, MakeQuerySnafu, RosterResult},
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres, pool::PoolConnection};

#[derive(Clone, Debug)]
pub struct PgStudentRepository {
    pool: Pool<Postgres>,
}

impl PgStudentRepository {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn get_connection(&self) -> RosterResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        let mut conn = self.get_connection().await?;
        sqlx::query_as::<_, Student>(
            "SELECT id, name, lastname, email FROM public.students ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        let mut conn = self.get_connection().await?;
        sqlx::query_as::<_, Student>(
            "SELECT id, name, lastname, email FROM public.students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn save(&self, student: Student) -> RosterResult<Student> {
        let Student {
            id,
            name,
            lastname,
            email,
        } = student;
        let mut conn = self.get_connection().await?;

        let query = match id {
            None => sqlx::query_as::<_, Student>(
                "INSERT INTO public.students (name, lastname, email) VALUES ($1, $2, $3) RETURNING id, name, lastname, email",
            )
            .bind(name)
            .bind(lastname)
            .bind(email),
            // an id that has since been deleted gets re-inserted under the same id
            Some(id) => sqlx::query_as::<_, Student>(
                "INSERT INTO public.students (id, name, lastname, email) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, lastname = EXCLUDED.lastname, email = EXCLUDED.email \
                 RETURNING id, name, lastname, email",
            )
            .bind(id)
            .bind(name)
            .bind(lastname)
            .bind(email),
        };

        query.fetch_one(&mut *conn).await.context(MakeQuerySnafu)
    }

    async fn delete_by_id(&self, id: i64) -> RosterResult<()> {
        let mut conn = self.get_connection().await?;
        sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}
