use crate::{
    data::{Student, StudentRepository},
    error::RosterResult,
};
use async_trait::async_trait;

/// What the route handlers need from the rest of the app.
///
/// Every method has the same contract as its [`StudentRepository`] counterpart.
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn list_all_students(&self) -> RosterResult<Vec<Student>>;
    async fn get_student_by_id(&self, id: i64) -> RosterResult<Option<Student>>;
    async fn save_student(&self, student: Student) -> RosterResult<Student>;
    async fn update_student(&self, student: Student) -> RosterResult<Student>;
    async fn delete_student_by_id(&self, id: i64) -> RosterResult<()>;
}

#[derive(Debug, Clone)]
pub struct RepositoryStudentService<R> {
    repository: R,
}

impl<R: StudentRepository> RepositoryStudentService<R> {
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: StudentRepository> StudentService for RepositoryStudentService<R> {
    async fn list_all_students(&self) -> RosterResult<Vec<Student>> {
        self.repository.find_all().await
    }

    async fn get_student_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        self.repository.find_by_id(id).await
    }

    async fn save_student(&self, student: Student) -> RosterResult<Student> {
        self.repository.save(student).await
    }

    async fn update_student(&self, student: Student) -> RosterResult<Student> {
        self.repository.save(student).await
    }

    async fn delete_student_by_id(&self, id: i64) -> RosterResult<()> {
        self.repository.delete_by_id(id).await
    }
}
