//! Query parameters and validation for the generate endpoints.
//!
//! Empty values are treated the same as absent ones.

use tracing::warn;

use crate::errors::AppError;
use crate::notice::date::{date_line, Clock};
use crate::render::{NoticeFields, TemplateSpec};

pub const DEFAULT_TEACHER: &str = "Nabila Tabassum";
pub const DEFAULT_REMARKS: &str = "N/A";

/// A recognised query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Class,
    Subject,
    ClassWork,
    Homework,
    Remarks,
    Teacher,
    Date,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Class,
        Field::Subject,
        Field::ClassWork,
        Field::Homework,
        Field::Remarks,
        Field::Teacher,
        Field::Date,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Class => "class",
            Field::Subject => "subject",
            Field::ClassWork => "cw",
            Field::Homework => "hw",
            Field::Remarks => "remarks",
            Field::Teacher => "teacher",
            Field::Date => "date",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Debug, Default)]
pub struct NoticeQuery {
    pub class_name: Option<String>,
    pub subject: Option<String>,
    pub cw: Option<String>,
    pub hw: Option<String>,
    pub remarks: Option<String>,
    pub teacher: Option<String>,
    pub date: Option<String>,
}

impl NoticeQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// Unknown keys are ignored. A repeated key keeps every value, joined with `,`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = NoticeQuery::default();
        for (key, value) in pairs {
            let Some(field) = Field::from_key(&key) else {
                continue;
            };
            let slot = query.slot(field);
            if let Some(existing) = slot {
                existing.push(',');
                existing.push_str(&value);
            } else {
                *slot = Some(value);
            }
        }
        query
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Class => &mut self.class_name,
            Field::Subject => &mut self.subject,
            Field::ClassWork => &mut self.cw,
            Field::Homework => &mut self.hw,
            Field::Remarks => &mut self.remarks,
            Field::Teacher => &mut self.teacher,
            Field::Date => &mut self.date,
        }
    }

    fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Class => &self.class_name,
            Field::Subject => &self.subject,
            Field::ClassWork => &self.cw,
            Field::Homework => &self.hw,
            Field::Remarks => &self.remarks,
            Field::Teacher => &self.teacher,
            Field::Date => &self.date,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Checks the template's required fields and applies defaults.
    ///
    /// The error message always lists the template's full required set.
    pub fn into_fields(self, spec: &TemplateSpec, clock: &dyn Clock) -> Result<NoticeFields, AppError> {
        let missing: Vec<&str> = spec
            .required_fields
            .iter()
            .filter(|f| self.field(**f).is_none())
            .map(|f| f.key())
            .collect();
        if !missing.is_empty() {
            warn!(template = ?spec.variant, ?missing, "Rejecting notice request");
            let required: Vec<&str> = spec.required_fields.iter().map(|f| f.key()).collect();
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                required.join(", ")
            )));
        }

        let date = date_line(self.field(Field::Date), clock);
        let homework = spec
            .homework
            .and_then(|_| self.field(Field::Homework))
            .map(str::to_string);

        Ok(NoticeFields {
            class_name: non_empty(self.class_name).unwrap_or_default(),
            subject: non_empty(self.subject).unwrap_or_default(),
            teacher: non_empty(self.teacher).unwrap_or_else(|| DEFAULT_TEACHER.to_string()),
            date_line: date,
            class_work: non_empty(self.cw).unwrap_or_default(),
            homework,
            remarks: non_empty(self.remarks).unwrap_or_else(|| DEFAULT_REMARKS.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
