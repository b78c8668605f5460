use crate::core::time::{format_clock, format_date, format_primitive};
use crate::db::models::{Exam, ExamEvent};
use crate::repositories::exams::ExamSummaryRow;
use crate::schemas::admin::{EventResponse, ExamResponse, ExamSummary};

pub(super) fn event_to_response(event: ExamEvent) -> EventResponse {
    EventResponse {
        event_id: event.id,
        college_id: event.college_id,
        exam_name: event.exam_name,
        exam_start_date: format_date(event.exam_start_date),
        exam_end_date: format_date(event.exam_end_date),
        start_time: format_clock(event.start_time),
        end_time: format_clock(event.end_time),
        cutoff_percentage: event.cutoff_percentage,
        event_type: event.event_type,
        is_active: event.is_active,
        updated_by: event.updated_by,
        updated_at: format_primitive(event.updated_at),
    }
}

pub(super) fn exam_to_response(exam: Exam) -> ExamResponse {
    ExamResponse {
        exam_id: exam.id,
        event_id: exam.event_id,
        course: exam.course,
        exam_status: exam.exam_status,
        created_at: format_primitive(exam.created_at),
    }
}

pub(super) fn exam_summary(row: ExamSummaryRow) -> ExamSummary {
    ExamSummary {
        exam_id: row.id,
        course: row.course,
        exam_status: row.exam_status,
        question_count: row.question_count,
    }
}
