use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use rtsp_formats::request::RtspRequest;
use tokio::sync::Mutex;

/// Maps outstanding `CSeq`s to the request that produced them, so a later
/// response can be matched back to its request.
///
/// The sequence counter lives alongside the table (not inside it) since it
/// never needs the table's lock: it is a plain monotonic `AtomicU32`,
/// unaffected by reconnects.
pub struct Correlator {
    next_cseq: AtomicU32,
    outstanding: Mutex<HashMap<u32, RtspRequest>>,
}

impl Correlator {
    pub fn new() -> Self {
        Self {
            next_cseq: AtomicU32::new(0),
            outstanding: Mutex::new(HashMap::new()),
        }
    }

    /// Assigns the next cseq and clones `request` into the outstanding
    /// table under it, returning the clone to be serialized to the wire.
    /// The caller's own `request` is left untouched.
    pub async fn track(&self, request: &RtspRequest) -> (u32, RtspRequest) {
        let cseq = self.next_cseq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut tracked = request.clone();
        tracked.headers_mut().set(
            rtsp_formats::header::RtspHeader::CSeq,
            format!("{}", cseq),
        );
        self.outstanding.lock().await.insert(cseq, tracked.clone());
        (cseq, tracked)
    }

    /// Removes and returns the request matching `cseq`, if any is
    /// outstanding. A miss is not an error here; the caller logs it.
    pub async fn resolve(&self, cseq: Option<u32>) -> Option<RtspRequest> {
        let cseq = cseq?;
        self.outstanding.lock().await.remove(&cseq)
    }

    #[cfg(test)]
    pub async fn outstanding_count(&self) -> usize {
        self.outstanding.lock().await.len()
    }
}

impl Default for Correlator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rtsp_formats::{consts::methods::RtspMethod, request::RtspRequest};
    use url::Url;

    use super::Correlator;

    fn sample_request() -> RtspRequest {
        RtspRequest::builder()
            .method(RtspMethod::Options)
            .uri(Url::parse("rtsp://example.com").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn assigns_strictly_increasing_cseqs() {
        let correlator = Correlator::new();
        let request = sample_request();
        let (first, _) = correlator.track(&request).await;
        let (second, _) = correlator.track(&request).await;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn tracks_then_resolves_leaving_the_table_empty() {
        let correlator = Correlator::new();
        let request = sample_request();
        let (cseq, _) = correlator.track(&request).await;
        assert_eq!(correlator.outstanding_count().await, 1);

        let resolved = correlator.resolve(Some(cseq)).await;
        assert!(resolved.is_some());
        assert_eq!(correlator.outstanding_count().await, 0);
    }

    #[tokio::test]
    async fn resolving_an_unknown_cseq_is_a_harmless_miss() {
        let correlator = Correlator::new();
        assert!(correlator.resolve(Some(999)).await.is_none());
    }

    #[tokio::test]
    async fn does_not_mutate_the_callers_original_request() {
        let correlator = Correlator::new();
        let request = sample_request();
        assert_eq!(request.cseq(), None);
        let _ = correlator.track(&request).await;
        assert_eq!(request.cseq(), None);
    }
}
