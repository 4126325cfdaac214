//! Navigation link parsing

use super::types::PAGE_PARAM;
use url::Url;

/// Parse the `page` query parameter of a navigation link.
///
/// Accepts absolute URLs (`https://api.binarylane.com.au/v2/servers?page=2`)
/// and bare paths (`/v2/servers?page=2`).
pub fn parse_page_number(link: &str) -> Option<u32> {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/").ok()?.join(link).ok()?
        }
        Err(_) => return None,
    };

    url.query_pairs()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.parse().ok())
}
