use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub lastname: String,
    pub email: String,
}

impl Student {
    #[cfg(test)]
    pub fn new(name: &str, lastname: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            lastname: lastname.to_string(),
            email: email.to_string(),
        }
    }

    /// Copies the editable fields out of a submitted form. `id` is never touched.
    pub fn overwrite_from(&mut self, form: StudentForm) {
        let StudentForm {
            name,
            lastname,
            email,
        } = form;

        self.name = name;
        self.lastname = lastname;
        self.email = email;
    }
}

/// What the create and edit forms post. Anything else in the body (an `id` included) is dropped.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub lastname: String,
    pub email: String,
}

impl From<StudentForm> for Student {
    fn from(form: StudentForm) -> Self {
        let mut student = Self::default();
        student.overwrite_from(form);
        student
    }
}
