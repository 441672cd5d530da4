use crate::{
    data::Student,
    maud_conveniences::{escape, form_submit_button, render_page, render_table, simple_form_element, title},
};
use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A named page, plus whatever it needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Students(Vec<Student>),
    CreateStudent(Student),
    EditStudent(Student),
}

impl View {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Students(_) => "students",
            Self::CreateStudent(_) => "create-student",
            Self::EditStudent(_) => "edit_student",
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            Self::Students(students) => render_students(students),
            Self::CreateStudent(student) => render_student_form("Create Student", "/students", student),
            Self::EditStudent(student) => {
                let action = student
                    .id
                    .map_or_else(|| "/students".to_string(), |id| format!("/students/{id}"));
                render_student_form("Edit Student", &action, student)
            }
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        debug!(view = self.name(), "Rendering");
        render_page("Students", self.render()).into_response()
    }
}

fn render_students(students: &[Student]) -> Markup {
    let rows = students
        .iter()
        .map(|student| {
            let id = student.id.unwrap_or_default();
            [
                escape(&student.name),
                escape(&student.lastname),
                escape(&student.email),
                html! {
                    div class="flex flex-row space-x-2" {
                        a href={"/students/edit/" (id)} class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" {"Edit"}
                        a href={"/students-delete/" (id)} class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" {"Delete"}
                    }
                },
            ]
        })
        .collect();

    html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            (render_table("Students", ["Name", "Last Name", "Email", "Actions"], rows))
            a href="/students/new" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded text-center" {
                "Add new Student"
            }
        }
    }
}

fn render_student_form(heading: &str, action: &str, student: &Student) -> Markup {
    let prefill = |value: &str| (!value.is_empty()).then(|| value.to_string());
    let name = prefill(&student.name);
    let lastname = prefill(&student.lastname);
    let email = prefill(&student.email);

    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title(heading))
            form method="post" action=(action) {
                (simple_form_element("name", "Name", true, None, name.as_deref()))
                (simple_form_element("lastname", "Last Name", true, None, lastname.as_deref()))
                (simple_form_element("email", "Email", false, Some("email"), email.as_deref()))
                (form_submit_button(Some("Save")))
            }
            a href="/students" class="text-blue-500 hover:underline" {"Back to students"}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofia() -> Student {
        Student {
            id: Some(3),
            ..Student::new("Sofia", "Ramos", "sofia@gmail.com")
        }
    }

    #[test]
    fn names_match_pages() {
        assert_eq!(View::Students(vec![]).name(), "students");
        assert_eq!(View::CreateStudent(Student::default()).name(), "create-student");
        assert_eq!(View::EditStudent(sofia()).name(), "edit_student");
    }

    #[test]
    fn listing_links_to_edit_and_delete() {
        let rendered = View::Students(vec![sofia()]).render().into_string();

        assert!(rendered.contains("Sofia"));
        assert!(rendered.contains("sofia@gmail.com"));
        assert!(rendered.contains(r#"href="/students/edit/3""#));
        assert!(rendered.contains(r#"href="/students-delete/3""#));
    }

    #[test]
    fn listing_escapes_user_data() {
        let student = Student::new("<script>", "x", "y");
        let rendered = View::Students(vec![student]).render().into_string();

        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_form_posts_to_its_id() {
        let rendered = View::EditStudent(sofia()).render().into_string();

        assert!(rendered.contains(r#"action="/students/3""#));
        assert!(rendered.contains(r#"value="Ramos""#));
    }

    #[test]
    fn create_form_is_blank() {
        let rendered = View::CreateStudent(Student::default()).render().into_string();

        assert!(rendered.contains(r#"action="/students""#));
        assert!(!rendered.contains("value="));
    }
}
