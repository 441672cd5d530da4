use crate::{
    data::{Student, StudentRepository},
    error::RosterResult,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Keeps students in a map instead of postgres. Ids count up from 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    table: Mutex<Table>,
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Student>,
    last_id: i64,
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut student: Student) -> RosterResult<Student> {
        let mut table = self.table.lock().await;
        let id = match student.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        student.id = Some(id);
        table.rows.insert(id, student.clone());
        Ok(student)
    }

    async fn delete_by_id(&self, id: i64) -> RosterResult<()> {
        self.table.lock().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryStudentRepository;
    use crate::data::{Student, StudentRepository, contract};

    #[tokio::test]
    async fn saved_student_is_found_by_id() {
        contract::saved_student_is_found_by_id(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        contract::unknown_id_is_none(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        contract::empty_store_lists_nothing(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn lists_each_saved_student_once() {
        contract::lists_each_saved_student_once(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn save_with_id_overwrites() {
        contract::save_with_id_overwrites(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        contract::delete_is_idempotent(&InMemoryStudentRepository::default()).await;
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryStudentRepository::default();
        let first = repo.save(Student::new("A", "B", "a@b.c")).await.unwrap();
        repo.delete_by_id(first.id.unwrap()).await.unwrap();

        let second = repo.save(Student::new("C", "D", "c@d.e")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
