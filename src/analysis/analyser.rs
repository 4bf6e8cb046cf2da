//! Analysis orchestrator
//!
//! Fetches a page once, then runs the feature extractors and the link
//! harvest concurrently against the same parsed document and merges their
//! outputs into one [`AnalysisResult`].

use crate::analysis::document::{decode, Document};
use crate::analysis::doctype::classify_markup_version;
use crate::analysis::features::{count_headings, extract_title, has_login_form};
use crate::analysis::harvest::LinkHarvester;
use crate::analysis::{AnalysisResult, PageReport};
use crate::config::{AnalyserConfig, Config};
use crate::fetch::{Fetch, HttpFetcher};
use crate::url::validate_target;
use crate::{FetchError, LensError};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Runs complete page analyses
pub struct Analyser {
    fetcher: Arc<dyn Fetch>,
    harvester: LinkHarvester,
    max_concurrent_pages: usize,
}

impl Analyser {
    /// Creates an analyser around an existing fetch capability
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Used for the page fetch and every link probe
    /// * `config` - Worker pool size and batch concurrency
    pub fn new(fetcher: Arc<dyn Fetch>, config: &AnalyserConfig) -> Self {
        let harvester = LinkHarvester::new(Arc::clone(&fetcher), config.worker_count);

        Self {
            fetcher,
            harvester,
            max_concurrent_pages: config.max_concurrent_pages.max(1),
        }
    }

    /// Creates an analyser backed by a reqwest client built from `config`
    pub fn from_config(config: &Config) -> Result<Self, LensError> {
        let fetcher = HttpFetcher::new(&config.outbound, &config.user_agent)?;
        Ok(Self::new(Arc::new(fetcher), &config.analyser))
    }

    /// Analyses a single page
    ///
    /// # Errors
    ///
    /// * `LensError::Input` - The URL has no scheme or host; nothing was fetched
    /// * `LensError::Fetch` - The page could not be fetched or answered non-2xx
    /// * `LensError::Parse` - The body is not decodable markup
    ///
    /// Unreachable links are not errors; they are reported in the result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sumi_lens::config::Config;
    /// use sumi_lens::Analyser;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let analyser = Analyser::from_config(&Config::default())?;
    /// let result = analyser.analyse("https://example.com/").await?;
    /// println!("{}: {}", result.html_version, result.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyse(&self, target: &str) -> Result<AnalysisResult, LensError> {
        // Url::parse ignores surrounding whitespace, so the link base must as well
        let target = target.trim();
        let url = validate_target(target)?;
        tracing::info!("Analysing {}", url);
        let start_time = Instant::now();

        let body = self.fetch_page(url.as_str()).await?;
        let raw = decode(&body)?;
        let document = Document::from_html(raw);

        let (html_version, title, headings, login, link) = tokio::join!(
            async { classify_markup_version(raw) },
            async { extract_title(&document) },
            async { count_headings(&document) },
            async { has_login_form(&document) },
            self.harvester.harvest(&document, target),
        );

        tracing::info!(
            "Analysed {} in {:?}: {} links, {} inaccessible",
            url,
            start_time.elapsed(),
            link.total_links(),
            link.inaccessible_link_count
        );

        Ok(AnalysisResult {
            html_version,
            title,
            headings,
            link,
            has_login_form: login,
        })
    }

    /// Analyses a batch of pages independently
    ///
    /// At most `max-concurrent-pages` analyses run at once. Reports come back
    /// in input order; one page failing does not affect the others.
    pub async fn analyse_all(&self, urls: &[String]) -> Vec<PageReport> {
        stream::iter(urls)
            .map(|url| async move {
                let outcome = self.analyse(url).await;
                if let Err(e) = &outcome {
                    tracing::warn!("Analysis of {} failed: {}", url, e);
                }
                PageReport::new(url.clone(), outcome)
            })
            .buffered(self.max_concurrent_pages)
            .collect()
            .await
    }

    /// Fetches the page and buffers its body
    async fn fetch_page(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.fetcher.fetch(url).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.into_bytes().await
    }
}
