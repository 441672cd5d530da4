use crate::{
    config::RuntimeConfiguration,
    data::postgres::PgStudentRepository,
    error::{MigrateSnafu, OpenDatabaseSnafu, RosterResult},
    service::{RepositoryStudentService, StudentService},
};
use snafu::ResultExt;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::sync::Arc;

#[derive(Clone)]
pub struct RosterState {
    students: Arc<dyn StudentService>,
}

impl RosterState {
    pub fn new(students: impl StudentService + 'static) -> Self {
        Self {
            students: Arc::new(students),
        }
    }

    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::new(RepositoryStudentService::new(PgStudentRepository::new(pool)))
    }

    pub fn students(&self) -> &dyn StudentService {
        self.students.as_ref()
    }
}

pub async fn open_pool(
    options: PgPoolOptions,
    config: &RuntimeConfiguration,
) -> RosterResult<Pool<Postgres>> {
    let pool = options
        .connect(&config.db_config().get_db_path())
        .await
        .context(OpenDatabaseSnafu)?;

    sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

    Ok(pool)
}
