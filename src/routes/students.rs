use crate::{
    data::{Student, StudentForm},
    error::{MissingStudentSnafu, RosterResult},
    state::RosterState,
    views::View,
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use snafu::OptionExt;

const STUDENTS_ROUTE: &str = "/students";

pub async fn get_students(State(state): State<RosterState>) -> RosterResult<View> {
    let students = state.students().list_all_students().await?;
    debug!(count = students.len(), "Listing students");
    Ok(View::Students(students))
}

#[allow(clippy::unused_async)]
pub async fn get_new_student_form() -> View {
    View::CreateStudent(Student::default())
}

pub async fn post_new_student(
    State(state): State<RosterState>,
    Form(form): Form<StudentForm>,
) -> RosterResult<Redirect> {
    let student = state.students().save_student(form.into()).await?;
    info!(id = ?student.id, "Created student");
    Ok(Redirect::to(STUDENTS_ROUTE))
}

pub async fn get_edit_student_form(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
) -> RosterResult<View> {
    let student = state
        .students()
        .get_student_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(View::EditStudent(student))
}

pub async fn post_update_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> RosterResult<Redirect> {
    let existing = state.students().get_student_by_id(id).await?;
    info!(id, exists = existing.is_some(), "Updating student");

    let mut student = existing.context(MissingStudentSnafu { id })?;
    student.id = Some(id);
    student.overwrite_from(form);

    state.students().update_student(student).await?;
    Ok(Redirect::to(STUDENTS_ROUTE))
}

pub async fn get_delete_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
) -> RosterResult<Redirect> {
    state.students().delete_student_by_id(id).await?;
    info!(id, "Deleted student");
    Ok(Redirect::to(STUDENTS_ROUTE))
}
