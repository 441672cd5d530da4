use crate::error::RosterResult;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod student;

pub use student::{Student, StudentForm};

/// The boundary between the app and wherever students are actually stored.
///
/// Implementations own identity: [`StudentRepository::save`] assigns an `id` to any student
/// without one, and everything else addresses records by that `id`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every stored student, ordered by `id`.
    async fn find_all(&self) -> RosterResult<Vec<Student>>;
    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>>;
    /// Inserts when `student.id` is `None`, otherwise replaces the whole record under that `id`.
    async fn save(&self, student: Student) -> RosterResult<Student>;
    /// Deleting an `id` that isn't stored is fine.
    async fn delete_by_id(&self, id: i64) -> RosterResult<()>;
}

#[async_trait]
impl<R: StudentRepository + ?Sized> StudentRepository for Arc<R> {
    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, student: Student) -> RosterResult<Student> {
        (**self).save(student).await
    }

    async fn delete_by_id(&self, id: i64) -> RosterResult<()> {
        (**self).delete_by_id(id).await
    }
}
