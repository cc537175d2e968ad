use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entities::{conversions, Prescription};
use aarogya_data::models::CreatePrescriptionRecord;
use aarogya_data::repository::{
    PrescriptionRepository, PrescriptionRepositoryTrait, RepositoryError,
};

/// Signed file URLs stay valid for one hour
const SIGNED_URL_TTL: Duration = Duration::from_secs(60 * 60);

/// Prescription service errors
#[derive(Debug, Error)]
pub enum PrescriptionServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found error
    #[error("Prescription not found: {0}")]
    NotFound(String),

    /// The signed URL token is invalid or expired
    #[error("Invalid or expired file token")]
    InvalidToken,

    /// File storage error
    #[error("File storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Token signing error
    #[error("Failed to sign file URL: {0}")]
    Signing(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for PrescriptionServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => PrescriptionServiceError::Validation(msg),
            RepositoryError::NotFound(msg) => PrescriptionServiceError::NotFound(msg),
            other => PrescriptionServiceError::Repository(other.to_string()),
        }
    }
}

/// A stored prescription file ready to be served
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// File name component of the storage path
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Local object directory for prescription binaries.
/// Files are keyed by a user-scoped relative path and never exposed
/// directly; reads go through a signed URL token.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at PRESCRIPTION_DIR
    pub fn from_env() -> Self {
        let root = std::env::var("PRESCRIPTION_DIR")
            .unwrap_or_else(|_| "./data/prescriptions".to_string());
        Self::new(root)
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, PrescriptionServiceError> {
        // Paths are generated here and carried in signed tokens, but a
        // traversal component still must never escape the root.
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(PrescriptionServiceError::Validation(
                "Invalid file path".to_string(),
            ));
        }
        Ok(self.root.join(relative))
    }

    /// Write a file under the store root
    pub async fn save(&self, relative: &str, bytes: &[u8]) -> Result<(), PrescriptionServiceError> {
        let path = self.resolve(relative)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    /// Read a file from the store root
    pub async fn read(&self, relative: &str) -> Result<Vec<u8>, PrescriptionServiceError> {
        let path = self.resolve(relative)?;
        Ok(tokio::fs::read(&path).await?)
    }

    /// Remove a file from the store root
    pub async fn remove(&self, relative: &str) -> Result<(), PrescriptionServiceError> {
        let path = self.resolve(relative)?;
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FileClaims {
    /// Storage path the token grants access to
    path: String,
    /// Expiry as a unix timestamp
    exp: usize,
}

/// HS256 signer for short-lived file URLs
#[derive(Debug, Clone)]
pub struct UrlSigner {
    secret: String,
}

impl UrlSigner {
    /// Create a signer with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Create a signer from FILE_SIGNING_SECRET
    pub fn from_env() -> Self {
        let secret = std::env::var("FILE_SIGNING_SECRET")
            .unwrap_or_else(|_| "aarogya-dev-file-secret".to_string());
        Self::new(secret)
    }

    /// Issue a token granting access to a storage path until the TTL elapses
    pub fn sign(&self, path: &str, ttl: Duration) -> Result<String, PrescriptionServiceError> {
        let exp = (Utc::now().timestamp() as usize).saturating_add(ttl.as_secs() as usize);
        let claims = FileClaims {
            path: path.to_string(),
            exp,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| PrescriptionServiceError::Signing(e.to_string()))
    }

    /// Verify a token and return the storage path it grants access to
    pub fn verify(&self, token: &str) -> Result<String, PrescriptionServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<FileClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims.path)
        .map_err(|_| PrescriptionServiceError::InvalidToken)
    }
}

/// Trait for prescription storage and retrieval
#[async_trait]
pub trait PrescriptionServiceTrait: Send + Sync {
    /// Store an uploaded prescription file and its metadata
    async fn upload(
        &self,
        user_id: &str,
        title: &str,
        date: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Prescription, PrescriptionServiceError>;

    /// List a user's prescriptions, newest first, each with a signed URL
    async fn list(&self, user_id: &str) -> Result<Vec<Prescription>, PrescriptionServiceError>;

    /// Delete a prescription; the file is removed before the row
    async fn delete(&self, id: &str, user_id: &str) -> Result<(), PrescriptionServiceError>;

    /// Redeem a signed URL token for the stored file
    async fn open_file(&self, token: &str) -> Result<StoredFile, PrescriptionServiceError>;
}

/// Prescription service over the metadata repository and the file store
pub struct PrescriptionService<R: PrescriptionRepositoryTrait> {
    repository: R,
    files: FileStore,
    signer: UrlSigner,
}

impl<R: PrescriptionRepositoryTrait> PrescriptionService<R> {
    /// Create a new prescription service
    pub fn new(repository: R, files: FileStore, signer: UrlSigner) -> Self {
        Self {
            repository,
            files,
            signer,
        }
    }

    fn signed_url(&self, file_path: &str) -> Option<String> {
        match self.signer.sign(file_path, SIGNED_URL_TTL) {
            Ok(token) => Some(format!("/api/v1/prescriptions/files/{token}")),
            Err(e) => {
                warn!("Failed to sign file URL: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl<R: PrescriptionRepositoryTrait + Send + Sync> PrescriptionServiceTrait
    for PrescriptionService<R>
{
    async fn upload(
        &self,
        user_id: &str,
        title: &str,
        date: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Prescription, PrescriptionServiceError> {
        for (value, field) in [(title, "title"), (date, "date")] {
            if value.trim().is_empty() {
                return Err(PrescriptionServiceError::Validation(format!(
                    "Missing {field}"
                )));
            }
        }
        if bytes.is_empty() {
            return Err(PrescriptionServiceError::Validation(
                "Missing file".to_string(),
            ));
        }

        let file_path = match file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => {
                format!("{user_id}/{}.{ext}", Uuid::new_v4())
            }
            _ => format!("{user_id}/{}", Uuid::new_v4()),
        };

        debug!(%user_id, %file_path, "Storing prescription file");
        self.files.save(&file_path, &bytes).await?;

        let record = self
            .repository
            .create(CreatePrescriptionRecord {
                user_id: user_id.to_string(),
                title: title.to_string(),
                date: date.to_string(),
                file_path: file_path.clone(),
            })
            .await?;

        let signed_url = self.signed_url(&file_path);
        Ok(conversions::prescription_from_record(record, signed_url))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Prescription>, PrescriptionServiceError> {
        let records = self.repository.list_for_user(user_id).await?;
        Ok(records
            .into_iter()
            .map(|record| {
                let signed_url = self.signed_url(&record.file_path);
                conversions::prescription_from_record(record, signed_url)
            })
            .collect())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<(), PrescriptionServiceError> {
        let record = self
            .repository
            .get(id, user_id)
            .await?
            .ok_or_else(|| PrescriptionServiceError::NotFound(id.to_string()))?;

        // File first, then the row; a dangling row is worse than a
        // dangling file.
        self.files.remove(&record.file_path).await?;
        self.repository.delete(id, user_id).await?;
        Ok(())
    }

    async fn open_file(&self, token: &str) -> Result<StoredFile, PrescriptionServiceError> {
        let file_path = self.signer.verify(token)?;
        let bytes = match self.files.read(&file_path).await {
            Ok(bytes) => bytes,
            Err(PrescriptionServiceError::Storage(e))
                if e.kind() == std::io::ErrorKind::NotFound =>
            {
                return Err(PrescriptionServiceError::NotFound(file_path));
            }
            Err(e) => return Err(e),
        };

        let file_name = file_path
            .rsplit('/')
            .next()
            .unwrap_or(file_path.as_str())
            .to_string();
        Ok(StoredFile { file_name, bytes })
    }
}

/// Create a prescription service backed by the default repository,
/// the PRESCRIPTION_DIR file store and the FILE_SIGNING_SECRET signer
pub fn create_default_prescription_service() -> impl PrescriptionServiceTrait + Send + Sync {
    PrescriptionService::new(
        PrescriptionRepository::new(),
        FileStore::from_env(),
        UrlSigner::from_env(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarogya_data::repository::prescription_mocks::MockPrescriptionRepository;

    fn service_in(dir: &std::path::Path) -> PrescriptionService<MockPrescriptionRepository> {
        PrescriptionService::new(
            MockPrescriptionRepository::new(),
            FileStore::new(dir),
            UrlSigner::new("test-secret"),
        )
    }

    #[test]
    fn signed_token_round_trips() {
        let signer = UrlSigner::new("test-secret");
        let token = signer.sign("user-1/file.pdf", Duration::from_secs(3600)).unwrap();
        assert_eq!(signer.verify(&token).unwrap(), "user-1/file.pdf");
    }

    #[test]
    fn expired_token_is_rejected() {
        let signer = UrlSigner::new("test-secret");
        let token = signer.sign("user-1/file.pdf", Duration::from_secs(0)).unwrap();
        std::thread::sleep(Duration::from_millis(1100));
        assert!(matches!(
            signer.verify(&token),
            Err(PrescriptionServiceError::InvalidToken)
        ));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let signer = UrlSigner::new("test-secret");
        let other = UrlSigner::new("other-secret");
        let token = other.sign("user-1/file.pdf", Duration::from_secs(3600)).unwrap();
        assert!(signer.verify(&token).is_err());
    }

    #[tokio::test]
    async fn upload_then_open_file_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());

        let prescription = service
            .upload("user-1", "Dr. Rao visit", "2026-08-30", "scan.pdf", b"pdfbytes".to_vec())
            .await
            .unwrap();
        assert!(prescription.file_path.starts_with("user-1/"));
        assert!(prescription.file_path.ends_with(".pdf"));

        let url = prescription.signed_url.unwrap();
        let token = url.rsplit('/').next().unwrap();
        let file = service.open_file(token).await.unwrap();
        assert_eq!(file.bytes, b"pdfbytes");
    }

    #[tokio::test]
    async fn delete_removes_file_then_row() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());

        let prescription = service
            .upload("user-1", "Scan", "2026-08-30", "scan.png", b"png".to_vec())
            .await
            .unwrap();

        service.delete(&prescription.id, "user-1").await.unwrap();
        assert!(service.list("user-1").await.unwrap().is_empty());
        assert!(!dir.path().join(&prescription.file_path).exists());
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());

        let prescription = service
            .upload("user-1", "Scan", "2026-08-30", "scan.png", b"png".to_vec())
            .await
            .unwrap();

        let result = service.delete(&prescription.id, "user-2").await;
        assert!(matches!(result, Err(PrescriptionServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn traversal_paths_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let result = store.read("../outside").await;
        assert!(matches!(
            result,
            Err(PrescriptionServiceError::Validation(_))
        ));
    }
}
