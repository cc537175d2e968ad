//! Conversions between data-layer records and domain entities

use aarogya_data::models::{
    EmergencyContactRecord, PrescriptionRecord, SleepLogRecord, WaterLogRecord,
};

use super::{EmergencyContact, Prescription, SleepLog, WaterLog};

/// Convert a stored contact record to a domain contact
pub fn contact_from_record(record: EmergencyContactRecord) -> EmergencyContact {
    EmergencyContact {
        id: record.id,
        user_id: record.user_id,
        name: record.name,
        phone: record.phone,
        relation: record.relation,
        created_at: record.created_at,
    }
}

/// Convert a stored water log record to a domain water log
pub fn water_log_from_record(record: WaterLogRecord) -> WaterLog {
    WaterLog {
        user_id: record.user_id,
        date: record.date,
        intake: record.intake,
    }
}

/// Convert a stored sleep log record to a domain sleep log
pub fn sleep_log_from_record(record: SleepLogRecord) -> SleepLog {
    SleepLog {
        user_id: record.user_id,
        date: record.date,
        hours: record.hours,
    }
}

/// Convert a stored prescription record to a domain prescription,
/// attaching the signed URL when one was issued
pub fn prescription_from_record(record: PrescriptionRecord, signed_url: Option<String>) -> Prescription {
    Prescription {
        id: record.id,
        user_id: record.user_id,
        title: record.title,
        date: record.date,
        file_path: record.file_path,
        created_at: record.created_at,
        signed_url,
    }
}
