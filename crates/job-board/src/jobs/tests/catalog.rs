use std::sync::Arc;

use crate::jobs::domain::{InvalidArgument, JobFilter, JobId, JobPatch};
use crate::jobs::repository::RepositoryError;
use crate::jobs::{CatalogError, JobCatalog};

use super::common::*;

#[tokio::test]
async fn create_assigns_identity_and_posting_date() {
    let (store, _) = seeded_store(&[]).await;
    let catalog = build_catalog(store);

    let job = catalog
        .create(posting("poster@example.com"))
        .await
        .expect("create job");

    let fetched = catalog
        .get(&job.id.to_string())
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched, job);
    assert!(job.applied_applicants.is_empty());
    assert_eq!(catalog.list().await.expect("list").len(), 2);
}

#[tokio::test]
async fn update_never_touches_applicants() {
    let (store, job) = seeded_store(&["x@example.com"]).await;
    let catalog = build_catalog(store);

    let updated = catalog
        .update(
            &job.id.to_string(),
            JobPatch {
                job_salary: Some(41000.0),
                ..JobPatch::default()
            },
        )
        .await
        .expect("update")
        .expect("present");

    assert_eq!(updated.job_salary, Some(41000.0));
    assert_eq!(
        updated.applied_applicants,
        vec![applicant("x@example.com")]
    );
}

#[tokio::test]
async fn update_and_delete_report_missing_jobs() {
    let (store, _) = seeded_store(&[]).await;
    let catalog = build_catalog(store);
    let missing = JobId::new().to_string();

    let updated = catalog
        .update(&missing, JobPatch::default())
        .await
        .expect("update");
    assert!(updated.is_none());
    assert!(catalog.delete(&missing).await.expect("delete").is_none());
}

#[tokio::test]
async fn delete_removes_job() {
    let (store, job) = seeded_store(&[]).await;
    let catalog = build_catalog(store);

    let deleted = catalog
        .delete(&job.id.to_string())
        .await
        .expect("delete")
        .expect("present");
    assert_eq!(deleted.id, job.id);
    assert!(catalog.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn count_by_owner_counts_only_that_owner() {
    let (store, _) = seeded_store(&[]).await;
    let catalog = build_catalog(store);
    let owned = posting("owner@example.com");
    let foreign = posting("someone-else@example.com");
    catalog.create(owned).await.expect("create");
    catalog.create(foreign).await.expect("create");

    let owned_count = catalog
        .count_by_owner("owner@example.com")
        .await
        .expect("count");
    let stranger_count = catalog
        .count_by_owner("nobody@example.com")
        .await
        .expect("count");
    assert_eq!(owned_count, 2);
    assert_eq!(stranger_count, 0);

    let owned = catalog
        .find(&JobFilter::owned_by("someone-else@example.com"))
        .await
        .expect("find");
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].job_owner, "someone-else@example.com");
}

#[tokio::test]
async fn malformed_identifiers_are_invalid_arguments() {
    let (store, _) = seeded_store(&[]).await;
    let catalog = build_catalog(store);

    assert!(matches!(
        catalog.get("42").await,
        Err(CatalogError::InvalidArgument(InvalidArgument::MalformedJobId(_)))
    ));
    assert!(matches!(
        catalog.count_by_owner(" ").await,
        Err(CatalogError::InvalidArgument(InvalidArgument::BlankOwner))
    ));
}

#[tokio::test]
async fn store_failures_propagate() {
    let catalog = JobCatalog::new(Arc::new(UnavailableStore));

    assert!(matches!(
        catalog.list().await,
        Err(CatalogError::Store(RepositoryError::Unavailable(_)))
    ));
}
