use entity::prelude::{Application, Preference};
use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: usize,
    pub session_id: usize,
    pub applicant_id: usize,
    pub comments: String,
    pub program: String,
    pub department: String,
    pub previous_uoft_ta_experience: String,
    pub yip: u32,
    pub annotation: String,
}

impl ApplicationDto {
    pub fn from_entity(index: usize, entity: &Application) -> Self {
        Self {
            id: id(index),
            session_id: id(entity.session_index),
            applicant_id: id(entity.applicant_index),
            comments: entity.comments.clone(),
            program: entity.program.clone(),
            department: entity.department.clone(),
            previous_uoft_ta_experience: entity.previous_uoft_ta_experience.clone(),
            yip: entity.yip,
            annotation: entity.annotation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceDto {
    pub id: usize,
    pub position_id: usize,
    pub application_id: usize,
    pub preference_level: u32,
}

impl PreferenceDto {
    pub fn from_entity(index: usize, entity: &Preference) -> Self {
        Self {
            id: id(index),
            position_id: id(entity.position_index),
            application_id: id(entity.application_index),
            preference_level: entity.preference_level,
        }
    }
}
