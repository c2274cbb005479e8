use crate::error::VitrineError;
use async_trait::async_trait;
use tokio::sync::{broadcast, watch};
use tracing::warn;

/// Where a section's data comes from.
///
/// `Ok(None)` is the *empty* result: an empty list or a missing singleton
/// row. The binding treats it exactly like a failed fetch and substitutes
/// the fallback, so an intentionally emptied section is indistinguishable
/// from an unconfigured one.
#[async_trait]
pub trait SectionSource: Send + Sync {
    type Data: Clone + Send + Sync;

    async fn fetch(&self) -> Result<Option<Self::Data>, VitrineError>;
}

/// Resolution state of one public section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData<T> {
    /// A fetch is outstanding; no stale content is served in this window.
    Loading,
    /// Persisted content from the backend.
    Live(T),
    /// Statically embedded default content; never persisted.
    Fallback(T),
}

impl<T> SectionData<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SectionData::Fallback(_))
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            SectionData::Loading => "loading",
            SectionData::Live(_) => "live",
            SectionData::Fallback(_) => "fallback",
        }
    }
}

/// Keeps one rendered section consistent with persisted content while
/// remaining resolvable when the backend is empty, misconfigured, or
/// erroring.
///
/// On spawn the binding performs one fetch; for its lifetime it holds one
/// bus subscription and re-resolves from scratch on every signal. Dropping
/// the binding ends the refresh task and releases the subscription.
#[derive(Debug, Clone)]
pub struct SectionBinding<T> {
    rx: watch::Receiver<SectionData<T>>,
}

impl<T> SectionBinding<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn spawn<S>(source: S, fallback: T, mut signals: broadcast::Receiver<()>) -> Self
    where
        S: SectionSource<Data = T> + 'static,
    {
        let (tx, rx) = watch::channel(SectionData::Loading);

        tokio::spawn(async move {
            if tx.send(resolve(&source, &fallback).await).is_err() {
                return;
            }
            loop {
                match signals.recv().await {
                    Ok(()) => {}
                    // A burst of missed signals collapses into one refresh.
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
                if tx.send(SectionData::Loading).is_err() {
                    break;
                }
                if tx.send(resolve(&source, &fallback).await).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// The section's resolved data, waiting out any in-flight fetch.
    pub async fn current(&self) -> SectionData<T> {
        let mut rx = self.rx.clone();
        match rx
            .wait_for(|data| !matches!(data, SectionData::Loading))
            .await
        {
            Ok(data) => data.clone(),
            // Refresh task gone; serve whatever the channel last held.
            Err(_) => self.rx.borrow().clone(),
        }
    }

    /// The instantaneous state, including `Loading`.
    pub fn snapshot(&self) -> SectionData<T> {
        self.rx.borrow().clone()
    }
}

async fn resolve<S: SectionSource>(source: &S, fallback: &S::Data) -> SectionData<S::Data> {
    match source.fetch().await {
        Ok(Some(data)) => SectionData::Live(data),
        Ok(None) => SectionData::Fallback(fallback.clone()),
        Err(err) => {
            warn!(error = %err, "section fetch failed; serving fallback");
            SectionData::Fallback(fallback.clone())
        }
    }
}
