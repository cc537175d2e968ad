use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::errors::RepositoryError;
use crate::models::{
    EmergencyContactRecord, PrescriptionRecord, SleepLogRecord, WaterLogRecord,
};

/// In-memory storage used when the database pool is not available.
/// Water and sleep logs are keyed by (user_id, date) so the one-row-per-day
/// rule holds here exactly as it does in SQLite.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    contacts: Arc<Mutex<HashMap<String, EmergencyContactRecord>>>,
    water_logs: Arc<Mutex<HashMap<(String, String), WaterLogRecord>>>,
    sleep_logs: Arc<Mutex<HashMap<(String, String), SleepLogRecord>>>,
    prescriptions: Arc<Mutex<HashMap<String, PrescriptionRecord>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    // ---- emergency contacts ----

    pub async fn store_contact(
        &self,
        contact: &EmergencyContactRecord,
    ) -> Result<EmergencyContactRecord, RepositoryError> {
        let mut store = self.contacts.lock()?;
        store.insert(contact.id.clone(), contact.clone());
        Ok(contact.clone())
    }

    pub async fn contacts_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<EmergencyContactRecord>, RepositoryError> {
        let store = self.contacts.lock()?;
        let mut contacts: Vec<EmergencyContactRecord> = store
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        // Newest first
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    pub async fn delete_contact(&self, id: &str, user_id: &str) -> Result<bool, RepositoryError> {
        let mut store = self.contacts.lock()?;
        match store.get(id) {
            Some(contact) if contact.user_id == user_id => {
                store.remove(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ---- water logs ----

    pub async fn upsert_water_log(
        &self,
        log: &WaterLogRecord,
    ) -> Result<WaterLogRecord, RepositoryError> {
        let mut store = self.water_logs.lock()?;
        store.insert((log.user_id.clone(), log.date.clone()), log.clone());
        Ok(log.clone())
    }

    pub async fn water_logs_for_user(
        &self,
        user_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<WaterLogRecord>, RepositoryError> {
        let store = self.water_logs.lock()?;
        let mut logs: Vec<WaterLogRecord> = store
            .values()
            .filter(|log| {
                log.user_id == user_id && date.map_or(true, |d| log.date == d)
            })
            .cloned()
            .collect();
        logs.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(logs)
    }

    // ---- sleep logs ----

    pub async fn upsert_sleep_log(
        &self,
        log: &SleepLogRecord,
    ) -> Result<SleepLogRecord, RepositoryError> {
        let mut store = self.sleep_logs.lock()?;
        store.insert((log.user_id.clone(), log.date.clone()), log.clone());
        Ok(log.clone())
    }

    pub async fn sleep_log_for_date(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<Option<SleepLogRecord>, RepositoryError> {
        let store = self.sleep_logs.lock()?;
        Ok(store.get(&(user_id.to_string(), date.to_string())).cloned())
    }

    pub async fn sleep_logs_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<SleepLogRecord>, RepositoryError> {
        let store = self.sleep_logs.lock()?;
        let mut logs: Vec<SleepLogRecord> = store
            .values()
            .filter(|log| log.user_id == user_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(logs)
    }

    // ---- prescriptions ----

    pub async fn store_prescription(
        &self,
        prescription: &PrescriptionRecord,
    ) -> Result<PrescriptionRecord, RepositoryError> {
        let mut store = self.prescriptions.lock()?;
        store.insert(prescription.id.clone(), prescription.clone());
        Ok(prescription.clone())
    }

    pub async fn prescriptions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError> {
        let store = self.prescriptions.lock()?;
        let mut prescriptions: Vec<PrescriptionRecord> = store
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        prescriptions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(prescriptions)
    }

    pub async fn prescription_by_id(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<PrescriptionRecord>, RepositoryError> {
        let store = self.prescriptions.lock()?;
        Ok(store
            .get(id)
            .filter(|p| p.user_id == user_id)
            .cloned())
    }

    pub async fn delete_prescription(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<bool, RepositoryError> {
        let mut store = self.prescriptions.lock()?;
        match store.get(id) {
            Some(p) if p.user_id == user_id => {
                store.remove(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, user_id: &str) -> EmergencyContactRecord {
        EmergencyContactRecord {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: "Asha Rao".to_string(),
            phone: "+91 98765 43210".to_string(),
            relation: "mother".to_string(),
            created_at: format!("2024-03-0{}T08:00:00Z", id.len().min(9)),
        }
    }

    #[tokio::test]
    async fn contacts_are_scoped_to_owner() {
        let storage = InMemoryStorage::new();
        storage.store_contact(&contact("a", "user-1")).await.unwrap();
        storage.store_contact(&contact("b", "user-2")).await.unwrap();

        let listed = storage.contacts_for_user("user-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a");

        // Deleting someone else's contact is a no-op
        assert!(!storage.delete_contact("a", "user-2").await.unwrap());
        assert!(storage.delete_contact("a", "user-1").await.unwrap());
        assert!(storage.contacts_for_user("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn water_log_upsert_keeps_one_row_per_day() {
        let storage = InMemoryStorage::new();
        let mut log = WaterLogRecord {
            user_id: "user-1".to_string(),
            date: "2024-03-01".to_string(),
            intake: 500,
        };
        storage.upsert_water_log(&log).await.unwrap();
        log.intake = 1250;
        storage.upsert_water_log(&log).await.unwrap();

        let logs = storage.water_logs_for_user("user-1", None).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].intake, 1250);
    }

    #[tokio::test]
    async fn sleep_log_lookup_by_date() {
        let storage = InMemoryStorage::new();
        let log = SleepLogRecord {
            user_id: "user-1".to_string(),
            date: "2024-03-01".to_string(),
            hours: 7.5,
        };
        storage.upsert_sleep_log(&log).await.unwrap();

        let found = storage
            .sleep_log_for_date("user-1", "2024-03-01")
            .await
            .unwrap();
        assert_eq!(found.unwrap().hours, 7.5);

        let missing = storage
            .sleep_log_for_date("user-1", "2024-03-02")
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
