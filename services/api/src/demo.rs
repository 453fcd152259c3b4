use crate::infra::{
    InMemoryApplicationRepository, InMemoryJobRepository, InMemoryResumeRepository,
};
use clap::Args;
use std::sync::Arc;

use applicant_ai::browser::{BrowserConfig, BrowserGateway, HttpBrowser, SessionTimeouts};
use applicant_ai::config::AppConfig;
use applicant_ai::error::AppError;
use applicant_ai::workflows::applications::{ApplicationService, ApplicationSubmitter};
use applicant_ai::workflows::jobs::{JobScrapeService, JobScraper};
use applicant_ai::workflows::resume::{OpenAiTailor, ResumeService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Job posting URL to scrape (defaults to a generic stub posting)
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Base resume text to tailor and submit
    #[arg(long)]
    pub(crate) base_resume: Option<String>,
}

/// Walk the full workflow on the in-memory adapters: scrape a posting,
/// tailor the resume (falling back if no backend key is configured), submit
/// the application, and report each stage.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let url = args
        .url
        .unwrap_or_else(|| "https://generic.example/job/1".to_string());
    let base_resume = args.base_resume.unwrap_or_else(|| {
        "Software engineer with five years of experience building backend services.".to_string()
    });

    let timeouts = SessionTimeouts {
        navigation: config.engine.navigation_timeout,
        element_wait: config.engine.element_wait_timeout,
    };
    let browser: Arc<dyn BrowserGateway> = Arc::new(HttpBrowser::new(&BrowserConfig {
        user_agent: config.engine.user_agent.clone(),
        max_sessions: config.engine.max_sessions,
    })?);

    let jobs = Arc::new(InMemoryJobRepository::default());
    let resumes = Arc::new(InMemoryResumeRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());

    let job_service = JobScrapeService::new(
        Arc::new(JobScraper::new(browser.clone(), timeouts)),
        jobs.clone(),
    );
    let resume_service = ResumeService::new(resumes.clone(), Arc::new(OpenAiTailor::new(&config.tailor)?));
    let application_service = ApplicationService::new(
        jobs,
        resumes,
        applications,
        Arc::new(ApplicationSubmitter::new(browser, timeouts)),
    );

    println!("== Agentic Job Application Demo ==\n");

    println!("Scraping {url}");
    let job = match job_service.scrape(&url).await {
        Ok(job) => job,
        Err(err) => {
            println!("  scrape failed: {err}");
            return Ok(());
        }
    };
    println!("  [{}] {} at {}", job.source, job.title, job.company);

    println!("\nTailoring resume against the posting");
    let resume = match resume_service.tailor(&base_resume, &job.description).await {
        Ok(resume) => resume,
        Err(err) => {
            println!("  tailoring failed: {err}");
            return Ok(());
        }
    };
    let preview: String = resume.content.chars().take(120).collect();
    println!("  resume {} stored: {preview}...", resume.id.0);

    println!("\nSubmitting application");
    match application_service.submit(job.id, resume.id).await {
        Ok(application) => {
            println!(
                "  application {} finished with status `{}`",
                application.id.0,
                application.status.label()
            );
            if let Some(at) = application.submitted_at {
                println!("  submitted at {at}");
            }
        }
        Err(err) => println!("  submission error: {err}"),
    }

    Ok(())
}
