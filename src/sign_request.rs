use crate::constants::{X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use crate::time::{format_date, format_iso8601, now, DateTime};
use crate::{Credential, Error, Result};
use http::request::Parts;
use http::{header, HeaderMap, HeaderValue};
use log::debug;
use std::fmt::Write;

/// RequestSigner computes the AWS SigV4 headers for a request.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Given a request and a credential, `sign` inserts `Host`, `X-Amz-Date`
/// and `Authorization` so the request proves possession of the secret key
/// without transmitting it. The computation is pure apart from a single
/// clock read: no I/O, no shared state, safe to call from multiple threads
/// as long as each call owns its request.
///
/// Canonicalization here is the minimal form the target services verify
/// against: header names lowercased and sorted, values trimmed of leading
/// and trailing whitespace only (internal whitespace runs are NOT collapsed
/// as the full SigV4 spec would), and the path and query taken verbatim
/// from the URL. Callers signing arbitrary headers with internal whitespace
/// runs are outside this contract.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given signing namespace and region,
    /// e.g. `("execute-api", "us-east-1")`.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request, extending its headers in place.
    ///
    /// The body is hashed, never embedded; pass the exact bytes that will
    /// go on the wire. On error the header map is left untouched.
    pub fn sign(&self, req: &mut Parts, body: &[u8], cred: &Credential) -> Result<()> {
        if cred.access_key_id.is_empty() || cred.secret_access_key.is_empty() {
            return Err(Error::credential_unavailable(
                "access key or secret key is missing, refusing to sign",
            ));
        }

        let authority = req
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| Error::request_invalid("request target has no host"))?;

        // One instant per signing operation. The same pair feeds the
        // X-Amz-Date header, the credential scope and the string to sign;
        // reading the clock twice here would skew them apart.
        let now = self.time.unwrap_or_else(now);
        let amz_date = format_iso8601(now);
        let date_stamp = format_date(now);

        // Host and X-Amz-Date must be in the map before canonicalization so
        // they are part of the signed set. They are forced to the URL's host
        // and the captured instant; stale caller-supplied values would
        // produce a signature the server rejects.
        req.headers
            .insert(header::HOST, HeaderValue::from_str(authority.as_str())?);
        req.headers
            .insert(X_AMZ_DATE, HeaderValue::from_str(&amz_date)?);
        if let Some(token) = &cred.session_token {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }

        let payload_hash = hex_sha256(body);
        let creq = canonical_request_string(req, &payload_hash)?;
        debug!("calculated canonical request:\n{creq}");

        // Scope: "20240101/<region>/<service>/aws4_request"
        let scope = format!(
            "{date_stamp}/{}/{}/aws4_request",
            self.region, self.service
        );

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20240101T000000Z
        // 20240101/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "AWS4-HMAC-SHA256")?;
            writeln!(f, "{amz_date}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{}", hex_sha256(creq.as_bytes()))?;
            f
        };
        debug!("calculated string to sign:\n{string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            &date_stamp,
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "AWS4-HMAC-SHA256 Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
            cred.access_key_id,
            signed_header_names(&req.headers).join(";"),
        ))?;
        authorization.set_sensitive(true);
        req.headers.insert(header::AUTHORIZATION, authorization);

        Ok(())
    }
}

/// Header names in canonical order: ascending lexicographic over the
/// lowercased form. `http::HeaderName` is already lowercase, so a plain
/// sort does it; insertion order never matters.
fn signed_header_names(headers: &HeaderMap) -> Vec<&str> {
    let mut names = headers.keys().map(|k| k.as_str()).collect::<Vec<&str>>();
    names.sort_unstable();

    names
}

/// Canonical request:
///
/// METHOD \n URI_PATH \n QUERY_STRING \n CANONICAL_HEADERS \n
/// SIGNED_HEADERS \n PAYLOAD_HASH
///
/// The canonical-headers block already ends in a newline of its own, so no
/// extra separator precedes the signed-headers line.
fn canonical_request_string(req: &Parts, payload_hash: &str) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method)?;
    // http::Uri canonicalizes an empty path to "/".
    writeln!(f, "{}", req.uri.path())?;
    writeln!(f, "{}", req.uri.query().unwrap_or_default())?;
    let names = signed_header_names(&req.headers);
    for name in names.iter() {
        writeln!(f, "{}:{}", name, req.headers[*name].to_str()?.trim())?;
    }
    writeln!(f)?;
    writeln!(f, "{}", names.join(";"))?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

/// Derive the signing key through the nested HMAC chain:
///
/// kDate = HMAC("AWS4" + secret, date_stamp)
/// kRegion = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
fn generate_signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    let secret = format!("AWS4{secret}");
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());

    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
