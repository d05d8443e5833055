use super::ApplicationStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    /// The day the record was created.
    pub date: chrono::NaiveDate,
    pub notes: String,
}

impl JobApplication {
    /// The `"company - role"` string used to pick records for deletion.
    /// Not unique: two applications to the same role at the same company share it.
    pub fn label(&self) -> String {
        format!("{} - {}", self.company, self.role)
    }
}

/// What the user fills in; the date is assigned when the record is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub notes: String,
}

impl NewApplication {
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> NewApplication {
        NewApplication {
            company: company.into(),
            role: role.into(),
            status: ApplicationStatus::ToApply,
            notes: String::new(),
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> NewApplication {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> NewApplication {
        self.notes = notes.into();
        self
    }

    pub fn dated(self, date: chrono::NaiveDate) -> JobApplication {
        JobApplication {
            company: self.company,
            role: self.role,
            status: self.status,
            date,
            notes: self.notes,
        }
    }
}
