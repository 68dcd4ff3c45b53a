use chrono::NaiveDate;
use entity::prelude::{Assignment, ReportingTag, WageChunk};
use serde::{Deserialize, Serialize};

use super::id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDto {
    pub id: usize,
    pub position_id: usize,
    pub applicant_id: usize,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub note: String,
    pub offer_override_pdf: Option<String>,
}

impl AssignmentDto {
    pub fn from_entity(index: usize, entity: &Assignment) -> Self {
        Self {
            id: id(index),
            position_id: id(entity.position_index),
            applicant_id: id(entity.applicant_index),
            contract_start: entity.contract_start,
            contract_end: entity.contract_end,
            note: entity.note.clone(),
            offer_override_pdf: entity.offer_override_pdf.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageChunkDto {
    pub id: usize,
    pub assignment_id: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours: u32,
    pub rate: f64,
}

impl WageChunkDto {
    pub fn from_entity(index: usize, entity: &WageChunk) -> Self {
        Self {
            id: id(index),
            assignment_id: id(entity.assignment_index),
            start_date: entity.start_date,
            end_date: entity.end_date,
            hours: entity.hours,
            rate: entity.rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingTagDto {
    pub id: usize,
    pub wage_chunk_id: usize,
    pub name: String,
}

impl ReportingTagDto {
    pub fn from_entity(index: usize, entity: &ReportingTag) -> Self {
        Self {
            id: id(index),
            wage_chunk_id: id(entity.wage_chunk_index),
            name: entity.name.clone(),
        }
    }
}
