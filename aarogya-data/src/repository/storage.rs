use tracing::debug;

use super::errors::RepositoryError;
use crate::database::DatabasePool;
use crate::models::{
    EmergencyContactRecord, PrescriptionRecord, SleepLogRecord, WaterLogRecord,
};

/// Database storage operations for the Aarogya entities
pub struct DatabaseStorage;

#[cfg(feature = "sqlite")]
impl DatabaseStorage {
    // ---- emergency contacts ----

    /// Store an emergency contact in the database
    pub async fn store_contact(
        pool: &DatabasePool,
        contact: &EmergencyContactRecord,
    ) -> Result<(), RepositoryError> {
        debug!("Storing emergency contact in database: id={}", contact.id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get().map_err(RepositoryError::Pool)?;

                conn.execute(
                    "INSERT INTO emergency_contacts (id, user_id, name, phone, relation, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    (
                        &contact.id,
                        &contact.user_id,
                        &contact.name,
                        &contact.phone,
                        &contact.relation,
                        &contact.created_at,
                    ),
                )
                .map_err(RepositoryError::Sqlite)?;

                Ok(())
            }
        }
    }

    /// Get all emergency contacts for a user, newest first
    pub async fn contacts_for_user(
        pool: &DatabasePool,
        user_id: &str,
    ) -> Result<Vec<EmergencyContactRecord>, RepositoryError> {
        debug!("Getting emergency contacts from database: user_id={}", user_id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let mut stmt = conn.prepare(
                    "SELECT id, user_id, name, phone, relation, created_at
                     FROM emergency_contacts WHERE user_id = ?1
                     ORDER BY created_at DESC",
                )?;

                let contacts = stmt.query_map([user_id], |row| {
                    Ok(EmergencyContactRecord {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        name: row.get(2)?,
                        phone: row.get(3)?,
                        relation: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?;

                let mut result = Vec::new();
                for contact in contacts {
                    result.push(contact?);
                }

                Ok(result)
            }
        }
    }

    /// Delete an emergency contact scoped to its owner.
    /// Returns false when no matching row existed.
    pub async fn delete_contact(
        pool: &DatabasePool,
        id: &str,
        user_id: &str,
    ) -> Result<bool, RepositoryError> {
        debug!("Deleting emergency contact from database: id={}", id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let affected = conn.execute(
                    "DELETE FROM emergency_contacts WHERE id = ?1 AND user_id = ?2",
                    (id, user_id),
                )?;

                Ok(affected > 0)
            }
        }
    }

    // ---- water logs ----

    /// Upsert the water intake for a user and day
    pub async fn upsert_water_log(
        pool: &DatabasePool,
        log: &WaterLogRecord,
    ) -> Result<(), RepositoryError> {
        debug!(
            "Upserting water log in database: user_id={}, date={}",
            log.user_id, log.date
        );

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                conn.execute(
                    "INSERT INTO water_logs (user_id, date, intake) VALUES (?1, ?2, ?3)
                     ON CONFLICT (user_id, date) DO UPDATE SET intake = excluded.intake",
                    (&log.user_id, &log.date, log.intake),
                )?;

                Ok(())
            }
        }
    }

    /// Get water logs for a user, optionally restricted to a single day
    pub async fn water_logs_for_user(
        pool: &DatabasePool,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLogRecord>, RepositoryError> {
        debug!("Getting water logs from database: user_id={}", user_id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let map_row = |row: &rusqlite::Row<'_>| {
                    Ok(WaterLogRecord {
                        user_id: row.get(0)?,
                        date: row.get(1)?,
                        intake: row.get(2)?,
                    })
                };

                let mut result = Vec::new();
                match date {
                    Some(date) => {
                        let mut stmt = conn.prepare(
                            "SELECT user_id, date, intake FROM water_logs
                             WHERE user_id = ?1 AND date = ?2 ORDER BY date",
                        )?;
                        let logs = stmt.query_map((user_id, date), map_row)?;
                        for log in logs {
                            result.push(log?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare(
                            "SELECT user_id, date, intake FROM water_logs
                             WHERE user_id = ?1 ORDER BY date",
                        )?;
                        let logs = stmt.query_map([user_id], map_row)?;
                        for log in logs {
                            result.push(log?);
                        }
                    }
                }

                Ok(result)
            }
        }
    }

    // ---- sleep logs ----

    /// Upsert the sleep hours for a user and day
    pub async fn upsert_sleep_log(
        pool: &DatabasePool,
        log: &SleepLogRecord,
    ) -> Result<(), RepositoryError> {
        debug!(
            "Upserting sleep log in database: user_id={}, date={}",
            log.user_id, log.date
        );

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                conn.execute(
                    "INSERT INTO sleep_logs (user_id, date, hours) VALUES (?1, ?2, ?3)
                     ON CONFLICT (user_id, date) DO UPDATE SET hours = excluded.hours",
                    (&log.user_id, &log.date, log.hours),
                )?;

                Ok(())
            }
        }
    }

    /// Get the sleep log for a user on a specific day
    pub async fn sleep_log_for_date(
        pool: &DatabasePool,
        user_id: &str,
        date: &str,
    ) -> Result<Option<SleepLogRecord>, RepositoryError> {
        debug!(
            "Getting sleep log from database: user_id={}, date={}",
            user_id, date
        );

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let mut stmt = conn.prepare(
                    "SELECT user_id, date, hours FROM sleep_logs
                     WHERE user_id = ?1 AND date = ?2",
                )?;

                let log = stmt.query_row((user_id, date), |row| {
                    Ok(SleepLogRecord {
                        user_id: row.get(0)?,
                        date: row.get(1)?,
                        hours: row.get(2)?,
                    })
                });

                match log {
                    Ok(log) => Ok(Some(log)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(RepositoryError::Sqlite(e)),
                }
            }
        }
    }

    /// Get all sleep logs for a user ordered by date
    pub async fn sleep_logs_for_user(
        pool: &DatabasePool,
        user_id: &str,
    ) -> Result<Vec<SleepLogRecord>, RepositoryError> {
        debug!("Getting sleep logs from database: user_id={}", user_id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let mut stmt = conn.prepare(
                    "SELECT user_id, date, hours FROM sleep_logs
                     WHERE user_id = ?1 ORDER BY date",
                )?;

                let logs = stmt.query_map([user_id], |row| {
                    Ok(SleepLogRecord {
                        user_id: row.get(0)?,
                        date: row.get(1)?,
                        hours: row.get(2)?,
                    })
                })?;

                let mut result = Vec::new();
                for log in logs {
                    result.push(log?);
                }

                Ok(result)
            }
        }
    }

    // ---- prescriptions ----

    /// Store prescription metadata in the database
    pub async fn store_prescription(
        pool: &DatabasePool,
        prescription: &PrescriptionRecord,
    ) -> Result<(), RepositoryError> {
        debug!("Storing prescription in database: id={}", prescription.id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                conn.execute(
                    "INSERT INTO prescriptions (id, user_id, title, date, file_path, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    (
                        &prescription.id,
                        &prescription.user_id,
                        &prescription.title,
                        &prescription.date,
                        &prescription.file_path,
                        &prescription.created_at,
                    ),
                )?;

                Ok(())
            }
        }
    }

    /// Get all prescriptions for a user, newest first
    pub async fn prescriptions_for_user(
        pool: &DatabasePool,
        user_id: &str,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError> {
        debug!("Getting prescriptions from database: user_id={}", user_id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let mut stmt = conn.prepare(
                    "SELECT id, user_id, title, date, file_path, created_at
                     FROM prescriptions WHERE user_id = ?1
                     ORDER BY created_at DESC",
                )?;

                let prescriptions = stmt.query_map([user_id], |row| {
                    Ok(PrescriptionRecord {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        title: row.get(2)?,
                        date: row.get(3)?,
                        file_path: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?;

                let mut result = Vec::new();
                for prescription in prescriptions {
                    result.push(prescription?);
                }

                Ok(result)
            }
        }
    }

    /// Get a prescription by ID scoped to its owner
    pub async fn prescription_by_id(
        pool: &DatabasePool,
        id: &str,
        user_id: &str,
    ) -> Result<Option<PrescriptionRecord>, RepositoryError> {
        debug!("Getting prescription by ID from database: id={}", id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let mut stmt = conn.prepare(
                    "SELECT id, user_id, title, date, file_path, created_at
                     FROM prescriptions WHERE id = ?1 AND user_id = ?2",
                )?;

                let prescription = stmt.query_row((id, user_id), |row| {
                    Ok(PrescriptionRecord {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        title: row.get(2)?,
                        date: row.get(3)?,
                        file_path: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                });

                match prescription {
                    Ok(prescription) => Ok(Some(prescription)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(RepositoryError::Sqlite(e)),
                }
            }
        }
    }

    /// Delete a prescription row scoped to its owner.
    /// Returns false when no matching row existed.
    pub async fn delete_prescription(
        pool: &DatabasePool,
        id: &str,
        user_id: &str,
    ) -> Result<bool, RepositoryError> {
        debug!("Deleting prescription from database: id={}", id);

        match pool {
            DatabasePool::SQLite(pool) => {
                let conn = pool.get()?;

                let affected = conn.execute(
                    "DELETE FROM prescriptions WHERE id = ?1 AND user_id = ?2",
                    (id, user_id),
                )?;

                Ok(affected > 0)
            }
        }
    }
}
