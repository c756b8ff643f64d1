use clap::Args;
use job_board::error::AppError;
use job_board::jobs::{
    ApplicantId, ApplicationResult, ApplicationSubmissionService, InMemoryJobStore, JobCatalog,
    JobPosting,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Concurrent submissions fired per applicant.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=512))]
    pub(crate) concurrency: u16,
    /// Number of distinct applicants applying to the seeded job.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=512))]
    pub(crate) applicants: u16,
}

fn planned_submissions(concurrency: u16, applicants: u16) -> usize {
    usize::from(concurrency).saturating_mul(usize::from(applicants))
}

#[derive(Debug, Default)]
struct Tally {
    submitted: usize,
    already_applied: usize,
    job_not_found: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, result: ApplicationResult) {
        match result {
            ApplicationResult::Submitted => self.submitted += 1,
            ApplicationResult::AlreadyApplied => self.already_applied += 1,
            ApplicationResult::JobNotFound => self.job_not_found += 1,
        }
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        concurrency,
        applicants,
    } = args;

    let store = Arc::new(InMemoryJobStore::default());
    let catalog = JobCatalog::new(store.clone());
    let submissions = Arc::new(ApplicationSubmissionService::new(store));

    println!("Application submission demo");
    let job = match catalog.create(demo_posting()).await {
        Ok(job) => job,
        Err(err) => {
            println!("  Posting rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Posted {} at {} ({})",
        job.job_role, job.name_of_company, job.id
    );
    println!(
        "- Firing {} concurrent submissions for each of {} applicants",
        concurrency, applicants
    );

    let mut handles = Vec::with_capacity(planned_submissions(concurrency, applicants));
    for index in 0..applicants {
        let applicant = format!("applicant{}@example.com", index + 1);
        for _ in 0..concurrency {
            let submissions = submissions.clone();
            let applicant = applicant.clone();
            let job_id = job.id.to_string();
            handles.push(tokio::spawn(async move {
                submissions.submit(&applicant, &job_id).await
            }));
        }
    }

    let mut tally = Tally::default();
    for handle in handles {
        match handle.await {
            Ok(Ok(result)) => tally.record(result),
            Ok(Err(err)) => {
                println!("  Submission failed: {}", err);
                tally.failed += 1;
            }
            Err(err) => {
                println!("  Submission task aborted: {}", err);
                tally.failed += 1;
            }
        }
    }

    println!("\nOutcomes");
    println!("- submitted: {}", tally.submitted);
    println!("- already_applied: {}", tally.already_applied);
    println!("- job_not_found: {}", tally.job_not_found);
    if tally.failed > 0 {
        println!("- failed: {}", tally.failed);
    }

    let stored = match catalog.get(&job.id.to_string()).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            println!("  Job lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Job store unavailable: {}", err);
            return Ok(());
        }
    };

    let applied: Vec<&str> = stored
        .applied_applicants
        .iter()
        .map(ApplicantId::as_str)
        .collect();
    match serde_json::to_string_pretty(&applied) {
        Ok(json) => println!("\nRecorded applicants:\n{}", json),
        Err(err) => println!("\nRecorded applicants unavailable: {}", err),
    }

    Ok(())
}

fn demo_posting() -> JobPosting {
    JobPosting {
        job_role: "Backend Engineer".to_string(),
        job_requirements: "Rust, async services".to_string(),
        job_location: "Remote".to_string(),
        job_description: "Own the application pipeline.".to_string(),
        job_salary: Some(120_000.0),
        name_of_company: "Acme".to_string(),
        job_owner: "hiring@acme.example".to_string(),
        job_type: Some("full-time".to_string()),
        ..JobPosting::default()
    }
}
