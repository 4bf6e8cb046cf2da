//! Link harvesting and accessibility probing
//!
//! One harvest runs in three phases:
//! - Discovery: anchors are walked in document order on the calling task,
//!   fragment-only and duplicate hrefs are dropped, and each first-seen href
//!   is sent into a bounded job queue
//! - Probing: a fixed pool of worker tasks drains the queue, resolving each
//!   href and issuing one GET through the [`Fetch`] capability
//! - Aggregation: every worker folds its outcome into one shared
//!   [`LinkSummary`] under a mutex held only for the update
//!
//! The harvest returns once the queue is closed and every worker has exited.

use crate::analysis::document::Document;
use crate::fetch::Fetch;
use crate::url::{classify_href, is_fragment, normalize_base, resolve_href, LinkKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

type JobQueue = Arc<tokio::sync::Mutex<mpsc::Receiver<LinkJob>>>;

/// Aggregated link statistics for one page
///
/// `internal_links + external_links` equals the number of distinct,
/// non-fragment hrefs on the page, and `inaccessible_link` holds exactly
/// `inaccessible_link_count` resolved URLs in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSummary {
    pub internal_links: usize,
    pub external_links: usize,
    pub inaccessible_link_count: usize,
    pub inaccessible_link: Vec<String>,
}

impl LinkSummary {
    /// Number of distinct links counted
    pub fn total_links(&self) -> usize {
        self.internal_links + self.external_links
    }

    /// Folds one probe result into the tally
    fn record(&mut self, kind: LinkKind, outcome: ProbeOutcome) {
        if kind.is_internal() {
            self.internal_links += 1;
        } else {
            self.external_links += 1;
        }

        if !outcome.reachable {
            self.inaccessible_link_count += 1;
            self.inaccessible_link.push(outcome.url);
        }
    }
}

/// A distinct href waiting to be probed
#[derive(Debug)]
struct LinkJob {
    href: String,
}

/// Result of probing one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The resolved absolute URL that was requested
    pub url: String,
    /// Whether the link answered with an accepted status
    pub reachable: bool,
}

/// Returns true for statuses that count as reachable
///
/// The accepted band is `200..=300`: 300 itself is treated as reachable.
pub fn is_accessible_status(status: u16) -> bool {
    (200..=300).contains(&status)
}

/// Discovers, probes and tallies the links of a document
pub struct LinkHarvester {
    fetcher: Arc<dyn Fetch>,
    worker_count: usize,
}

impl LinkHarvester {
    /// Creates a harvester with a fixed probe pool size
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Outbound capability used for every probe
    /// * `worker_count` - Number of probe workers spawned per harvest (at least one)
    pub fn new(fetcher: Arc<dyn Fetch>, worker_count: usize) -> Self {
        Self {
            fetcher,
            worker_count: worker_count.max(1),
        }
    }

    /// Number of workers spawned per harvest
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Harvests every link of `document` relative to `base_url`
    ///
    /// Probe failures are recorded as inaccessible links and never abort the
    /// harvest. The link counts cover every distinct href only if no worker
    /// panics; a panicking worker's in-flight link is not counted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use sumi_lens::analysis::{Document, LinkHarvester};
    /// use sumi_lens::config::{OutboundConfig, UserAgentConfig};
    /// use sumi_lens::fetch::HttpFetcher;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let fetcher = HttpFetcher::new(&OutboundConfig::default(), &UserAgentConfig::default())?;
    /// let harvester = LinkHarvester::new(Arc::new(fetcher), 16);
    /// let document = Document::parse(br#"<a href="/about">About</a>"#)?;
    /// let summary = harvester.harvest(&document, "https://example.com/").await;
    /// println!("{} internal links", summary.internal_links);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn harvest(&self, document: &Document, base_url: &str) -> LinkSummary {
        let base: Arc<str> = Arc::from(normalize_base(base_url));
        let summary = Arc::new(Mutex::new(LinkSummary::default()));
        let (sender, receiver) = mpsc::channel::<LinkJob>(self.worker_count);
        let queue: JobQueue = Arc::new(tokio::sync::Mutex::new(receiver));

        let workers: Vec<JoinHandle<()>> = (0..self.worker_count)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    Arc::clone(&self.fetcher),
                    Arc::clone(&base),
                    Arc::clone(&queue),
                    Arc::clone(&summary),
                ))
            })
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        for anchor in document.elements("a") {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if is_fragment(href) || !seen.insert(href) {
                continue;
            }

            let job = LinkJob {
                href: href.to_string(),
            };
            if sender.send(job).await.is_err() {
                tracing::warn!("All probe workers exited early, stopping link discovery");
                break;
            }
        }
        tracing::debug!(
            "Discovered {} distinct links on {}, probing with {} workers",
            seen.len(),
            base,
            self.worker_count
        );

        // Closing the queue lets workers exit once it is drained
        drop(sender);

        for handle in workers {
            if let Err(e) = handle.await {
                tracing::warn!("Probe worker failed: {}", e);
            }
        }

        let result = std::mem::take(&mut *lock(&summary));
        result
    }
}

/// Worker loop: take jobs until the queue is closed and empty
async fn run_worker(
    worker_id: usize,
    fetcher: Arc<dyn Fetch>,
    base: Arc<str>,
    queue: JobQueue,
    summary: Arc<Mutex<LinkSummary>>,
) {
    while let Some(job) = next_job(&queue).await {
        let outcome = probe(fetcher.as_ref(), &base, &job.href).await;
        let kind = classify_href(&base, &job.href);

        lock(&summary).record(kind, outcome);
    }
    tracing::trace!("Probe worker {} finished", worker_id);
}

async fn next_job(queue: &JobQueue) -> Option<LinkJob> {
    queue.lock().await.recv().await
}

/// Issues one reachability check for `href`
async fn probe(fetcher: &dyn Fetch, base: &str, href: &str) -> ProbeOutcome {
    let url = resolve_href(base, href);

    let reachable = match fetcher.fetch(&url).await {
        Ok(response) => {
            let status = response.status();
            // Release the body before doing anything else
            drop(response);
            tracing::debug!("Probe {} -> {}", url, status);
            is_accessible_status(status)
        }
        Err(e) => {
            tracing::debug!("Probe {} failed: {}", url, e);
            false
        }
    };

    ProbeOutcome { url, reachable }
}

fn lock(summary: &Mutex<LinkSummary>) -> MutexGuard<'_, LinkSummary> {
    summary.lock().unwrap_or_else(PoisonError::into_inner)
}
