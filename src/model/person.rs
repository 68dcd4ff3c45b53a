use entity::prelude::{Applicant, Instructor};
use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorDto {
    pub id: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub utorid: String,
}

impl InstructorDto {
    pub fn from_entity(index: usize, entity: &Instructor) -> Self {
        Self {
            id: id(index),
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            email: entity.email.clone(),
            utorid: entity.utorid.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDto {
    pub id: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub utorid: String,
    pub phone: String,
    pub student_number: String,
}

impl ApplicantDto {
    pub fn from_entity(index: usize, entity: &Applicant) -> Self {
        Self {
            id: id(index),
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            email: entity.email.clone(),
            utorid: entity.utorid.clone(),
            phone: entity.phone.clone(),
            student_number: entity.student_number.clone(),
        }
    }
}
