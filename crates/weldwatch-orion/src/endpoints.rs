use url::Url;

use crate::error::{OrionError, OrionResult};

/// URL builders for the Orion v2 API. Pure construction, no I/O.
#[derive(Debug, Clone)]
pub struct OrionEndpoints {
    base: Url,
}

impl OrionEndpoints {
    /// Parses and validates the broker base URL. A trailing slash on
    /// the base is tolerated; the URL must be able to carry path
    /// segments.
    pub fn new(base_url: &str) -> OrionResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| OrionError::BaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(OrionError::BaseUrl(format!(
                "{base_url}: cannot carry a path"
            )));
        }
        Ok(Self { base })
    }

    /// `{base}/v2/entities`, with optional query pairs such as
    /// `type=<T>` or `options=upsert`.
    pub fn entities(&self, query: &[(&str, &str)]) -> Url {
        let mut url = self.join(&["v2", "entities"]);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// `{base}/v2/op/update`, the batch operation endpoint.
    pub fn update_op(&self) -> Url {
        self.join(&["v2", "op", "update"])
    }

    /// `{base}/v2/subscriptions`.
    pub fn subscriptions(&self) -> Url {
        self.join(&["v2", "subscriptions"])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base validated as segmentable in new");
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }
}
