use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use scraper::{Html, Selector};

use crate::browser::{BrowserGateway, PageSession, SessionError};
use crate::workflows::jobs::{JobId, JobRecord};

#[derive(Debug, Clone)]
pub(super) enum Script {
    Serve(String),
    FailNavigation,
}

pub(super) struct ScriptedBrowser {
    script: Script,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl ScriptedBrowser {
    pub(super) fn new(script: Script) -> Self {
        Self {
            script,
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(super) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(super) fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserGateway for ScriptedBrowser {
    async fn open(&self) -> Result<Box<dyn PageSession>, SessionError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            script: self.script.clone(),
            markup: None,
            closed: self.closed.clone(),
        }))
    }
}

struct ScriptedSession {
    script: Script,
    markup: Option<String>,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl PageSession for ScriptedSession {
    async fn goto(&mut self, url: &str, _limit: Duration) -> Result<(), SessionError> {
        match &self.script {
            Script::Serve(markup) => {
                self.markup = Some(markup.clone());
                Ok(())
            }
            Script::FailNavigation => Err(SessionError::Navigation {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }

    async fn wait_for(&mut self, selector: &str, _limit: Duration) -> Result<(), SessionError> {
        let markup = self.markup.as_ref().ok_or(SessionError::NoPage)?;
        let missing = || SessionError::ElementNotFound {
            selector: selector.to_string(),
        };
        let parsed = Selector::parse(selector).map_err(|_| missing())?;
        if Html::parse_document(markup).select(&parsed).next().is_some() {
            Ok(())
        } else {
            Err(missing())
        }
    }

    fn content(&self) -> Result<String, SessionError> {
        self.markup.clone().ok_or(SessionError::NoPage)
    }

    async fn close(self: Box<Self>) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub(super) fn job(source: &str, url: &str) -> JobRecord {
    JobRecord {
        id: JobId(1),
        title: "Senior Rust Engineer".to_string(),
        company: "Ferrous Systems".to_string(),
        description: "Build and operate distributed services in Rust.".to_string(),
        url: url.to_string(),
        source: source.to_string(),
        created_at: Utc::now(),
    }
}
