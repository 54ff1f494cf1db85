use crate::{error::StoreError, schema::*};
use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct Club {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
}

/// One membership edge between a club and a student.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct Signup {
    pub id: i32,
    pub club_id: i32,
    pub student_id: i32,
}

/// A club that passed validation and may be inserted.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clubs)]
pub struct NewClub {
    name: String,
}

impl NewClub {
    pub fn new(name: impl Into<String>) -> Result<Self, StoreError> {
        Ok(Self {
            name: required_name("club", name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A student that passed validation and may be inserted.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudent {
    name: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>) -> Result<Self, StoreError> {
        Ok(Self {
            name: required_name("student", name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = signups)]
pub struct NewSignup {
    pub club_id: i32,
    pub student_id: i32,
}

fn required_name(entity: &str, name: String) -> Result<String, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation(format!("{entity} name is required")));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kept_verbatim() {
        let club = NewClub::new("Robotics Club").unwrap();
        assert_eq!(club.name(), "Robotics Club");

        let student = NewStudent::new(" Kipo Oak").unwrap();
        assert_eq!(student.name(), " Kipo Oak");
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                NewClub::new(name),
                Err(StoreError::Validation(msg)) if msg == "club name is required"
            ));
            assert!(matches!(
                NewStudent::new(name),
                Err(StoreError::Validation(msg)) if msg == "student name is required"
            ));
        }
    }
}
