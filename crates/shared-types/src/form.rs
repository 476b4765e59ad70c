use serde::{Deserialize, Serialize};

/// Relative path the shorten form posts to.
pub const SHORTEN_PATH: &str = "/short";

/// DOM id of the shorten form.
pub const FORM_ELEMENT_ID: &str = "firstForm";

/// DOM id of the region the submission result is written into.
pub const RESULT_ELEMENT_ID: &str = "result";

/// Content type declared on every form submission.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Prefix written in front of the failure message when a submission fails.
pub const SUBMIT_ERROR_PREFIX: &str = "Error submitting form: ";

/// Failure message for a response that arrived with a non-success status.
pub const RESPONSE_NOT_OK: &str = "Network response was not ok";

/// Wire name of the source URL field.
pub const FULL_URL_FIELD: &str = "fullUrl";

/// Wire name of the time-to-live field.
pub const TTL_FIELD: &str = "ttl";

/// Ordered field-name/value pairs collected from a form at submission time.
///
/// Duplicate names are allowed and kept in order; nothing here validates
/// the fields against a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = FormPayload::new();
        for (name, value) in iter {
            payload.push(name, value);
        }
        payload
    }
}

/// The fields of the shorten form, and the body of `POST /short`.
///
/// Missing fields deserialize as empty strings; the handler reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShortenLinkForm {
    #[serde(rename = "fullUrl", default)]
    pub full_url: String,
    /// Lifetime of the link in seconds. Empty means the service default.
    #[serde(default)]
    pub ttl: String,
}

impl ShortenLinkForm {
    pub fn new(full_url: impl Into<String>, ttl: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            ttl: ttl.into(),
        }
    }

    /// Snapshot the form as an ordered payload, in document order.
    pub fn to_payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();
        payload.push(FULL_URL_FIELD, self.full_url.as_str());
        payload.push(TTL_FIELD, self.ttl.as_str());
        payload
    }
}
