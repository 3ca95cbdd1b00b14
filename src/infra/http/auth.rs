use chrono::{NaiveDate, Utc};
use md5::{Digest, Md5};

/// Daily credential for the catalog API: the hex md5 of
/// `<secret>_<UTC date as YYYYMMDD>`, computed fresh per request.
pub struct AuthTokenSource {
    secret: String,
}

impl AuthTokenSource {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn current_token(&self) -> String {
        self.token_for(Utc::now().date_naive())
    }

    fn token_for(&self, date: NaiveDate) -> String {
        let stamp = date.format("%Y%m%d");
        let mut hasher = Md5::new();
        hasher.update(format!("{}_{}", self.secret, stamp).as_bytes());
        hex::encode(hasher.finalize())
    }
}
