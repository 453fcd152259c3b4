use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::browser::{BrowserGateway, PageSession, SessionError};

/// What a scripted session should do when the scraper drives it.
#[derive(Debug, Clone)]
pub(super) enum Script {
    /// Serve this markup for any URL.
    Serve(String),
    /// Fail the navigation step with a timeout-shaped error.
    FailNavigation,
}

/// Gateway serving canned pages, counting opens and closes so tests can
/// assert the acquire/release discipline.
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

    pub(super) fn serving(markup: &str) -> Self {
        Self::new(Script::Serve(markup.to_string()))
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
    async fn goto(&mut self, url: &str, limit: Duration) -> Result<(), SessionError> {
        match &self.script {
            Script::Serve(markup) => {
                self.markup = Some(markup.clone());
                Ok(())
            }
            Script::FailNavigation => Err(SessionError::Navigation {
                url: url.to_string(),
                reason: format!("page load exceeded {}ms", limit.as_millis()),
            }),
        }
    }

    async fn wait_for(&mut self, selector: &str, _limit: Duration) -> Result<(), SessionError> {
        let markup = self.markup.as_ref().ok_or(SessionError::NoPage)?;
        let parsed = Selector::parse(selector).map_err(|_| SessionError::ElementNotFound {
            selector: selector.to_string(),
        })?;
        if Html::parse_document(markup).select(&parsed).next().is_some() {
            Ok(())
        } else {
            Err(SessionError::ElementNotFound {
                selector: selector.to_string(),
            })
        }
    }

    fn content(&self) -> Result<String, SessionError> {
        self.markup.clone().ok_or(SessionError::NoPage)
    }

    async fn close(self: Box<Self>) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub(super) const LINKEDIN_JOB_PAGE: &str = r#"<html><body>
    <h1 class="top-card-layout__title">Senior Rust Engineer</h1>
    <a class="topcard__org-name-link">Ferrous Systems</a>
    <div class="show-more-less-html__markup">Build and operate distributed services in Rust.</div>
</body></html>"#;
