use chrono::NaiveDate;
use entity::prelude::{PositionTemplate, Session};
use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: usize,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rate1: f64,
    pub rate2: Option<f64>,
}

impl SessionDto {
    pub fn from_entity(index: usize, entity: &Session) -> Self {
        Self {
            id: id(index),
            name: entity.name.clone(),
            start_date: entity.start_date,
            end_date: entity.end_date,
            rate1: entity.rate1,
            rate2: entity.rate2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionTemplateDto {
    pub id: usize,
    pub position_type: String,
    pub offer_template: String,
    pub session_id: usize,
}

impl PositionTemplateDto {
    pub fn from_entity(index: usize, entity: &PositionTemplate) -> Self {
        Self {
            id: id(index),
            position_type: entity.position_type.clone(),
            offer_template: entity.offer_template.clone(),
            session_id: id(entity.session_index),
        }
    }
}
