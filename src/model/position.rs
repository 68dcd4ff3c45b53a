use chrono::NaiveDate;
use entity::prelude::Position;
use serde::{Deserialize, Serialize};

use super::id;

/// A position with its advertisement and matching data merged into one
/// object, the shape the positions endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    pub id: usize,
    pub position_code: String,
    pub position_title: String,
    pub position_type: String,
    pub session_id: usize,
    pub hours_per_assignment: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duties: String,
    pub qualifications: String,
    pub desired_num_assignments: u32,
    pub current_enrollment: u32,
    pub current_waitlisted: u32,
    pub instructor_ids: Vec<usize>,

    // Advertisement
    pub ad_hours_per_assignment: u32,
    pub ad_num_assignments: u32,
    pub ad_open_date: NaiveDate,
    pub ad_close_date: NaiveDate,
}

impl PositionDto {
    pub fn from_entity(index: usize, entity: &Position) -> Self {
        Self {
            id: id(index),
            position_code: entity.position_code.clone(),
            position_title: entity.position_title.clone(),
            position_type: entity.position_type.clone(),
            session_id: id(entity.session_index),
            hours_per_assignment: entity.est_hours_per_assignment,
            start_date: entity.est_start_date,
            end_date: entity.est_end_date,
            duties: entity.duties.clone(),
            qualifications: entity.qualifications.clone(),
            desired_num_assignments: entity.desired_num_assignments,
            current_enrollment: entity.current_enrollment,
            current_waitlisted: entity.current_waitlisted,
            instructor_ids: entity.instructor_indexes.iter().copied().map(id).collect(),
            ad_hours_per_assignment: entity.ad_hours_per_assignment,
            ad_num_assignments: entity.ad_num_assignments,
            ad_open_date: entity.ad_open_date,
            ad_close_date: entity.ad_close_date,
        }
    }
}
