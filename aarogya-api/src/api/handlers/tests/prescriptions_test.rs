use aarogya_domain::services::{PrescriptionServiceError, PrescriptionServiceTrait};
use aarogya_domain::testing::create_mock_prescription_service;

#[tokio::test]
async fn upload_then_list_returns_signed_url() {
    let service = create_mock_prescription_service();

    let stored = service
        .upload(
            "user-1",
            "Blood test",
            "2026-08-01",
            "report.pdf",
            b"PDFDATA".to_vec(),
        )
        .await
        .unwrap();
    assert_eq!(stored.user_id, "user-1");

    let listed = service.list("user-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    let signed_url = listed[0].signed_url.as_deref().unwrap();
    assert!(signed_url.starts_with("/api/v1/prescriptions/files/"));
}

#[tokio::test]
async fn delete_is_scoped_to_the_owner() {
    let service = create_mock_prescription_service();

    let stored = service
        .upload(
            "user-1",
            "X-ray",
            "2026-08-02",
            "scan.png",
            b"PNGDATA".to_vec(),
        )
        .await
        .unwrap();

    let result = service.delete(&stored.id, "user-2").await;
    assert!(matches!(result, Err(PrescriptionServiceError::NotFound(_))));

    service.delete(&stored.id, "user-1").await.unwrap();
    assert!(service.list("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn signed_url_token_opens_the_file() {
    let service = create_mock_prescription_service();

    service
        .upload(
            "user-1",
            "Blood test",
            "2026-08-01",
            "report.pdf",
            b"PDFDATA".to_vec(),
        )
        .await
        .unwrap();

    let listed = service.list("user-1").await.unwrap();
    let signed_url = listed[0].signed_url.as_deref().unwrap();
    let token = signed_url.rsplit('/').next().unwrap();

    let file = service.open_file(token).await.unwrap();
    assert_eq!(file.bytes, b"PDFDATA");
}
